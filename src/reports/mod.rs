use crate::cmd::hit::PointerEvent;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use oskforge::error::HitTestError;
use oskforge::hit_test::KeyHit;
use oskforge::layout::CompiledKeyboard;

pub fn print_keyboard(name: &str, kb: &CompiledKeyboard) {
    println!("\nKeyboard: {}", name);
    println!(
        "   Origin ({}, {})  Size {}x{}  Scale {}px/unit wide, {}px/unit high",
        kb.origin().x,
        kb.origin().y,
        kb.width(),
        kb.height(),
        kb.width_scale(),
        kb.height_scale()
    );

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Row").add_attribute(Attribute::Bold),
        Cell::new("Key").add_attribute(Attribute::Bold),
        Cell::new("X"),
        Cell::new("Y"),
        Cell::new("W"),
        Cell::new("H"),
        Cell::new("Type"),
        Cell::new("Label").fg(Color::Cyan),
    ]);

    for i in 0..=5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (r, row) in kb.rows().iter().enumerate() {
        for (c, key) in row.keys.iter().enumerate() {
            let label = if key.is_key {
                Cell::new(key.label()).fg(Color::Cyan)
            } else {
                Cell::new("(pad)").fg(Color::DarkGrey)
            };
            table.add_row(vec![
                Cell::new(r),
                Cell::new(c),
                Cell::new(key.origin.x),
                Cell::new(key.origin.y),
                Cell::new(key.width),
                Cell::new(row.height),
                Cell::new(key.key_type.to_string()),
                label,
            ]);
        }
    }
    println!("{}", table);
}

pub fn print_hits(results: &[(PointerEvent, u64, Result<KeyHit, HitTestError>)]) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![
        Cell::new("X").add_attribute(Attribute::Bold),
        Cell::new("Y").add_attribute(Attribute::Bold),
        Cell::new("t (ms)"),
        Cell::new("Row"),
        Cell::new("Key"),
        Cell::new("Result"),
    ]);

    for (ev, ms, outcome) in results {
        let (row, col, result) = match outcome {
            Ok(hit) => (
                Cell::new(hit.id.row),
                Cell::new(hit.id.column),
                Cell::new(hit.key.label()).fg(Color::Green),
            ),
            Err(e) => (
                Cell::new("-"),
                Cell::new("-"),
                Cell::new(e.to_string()).fg(Color::Red),
            ),
        };
        table.add_row(vec![
            Cell::new(ev.x),
            Cell::new(ev.y),
            Cell::new(ms),
            row,
            col,
            result,
        ]);
    }
    println!("{}", table);
}
