use crate::error::OskResult;
use crate::keymap::{validate, KeyDescriptor, KeyType, Keymap};
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A key resolved to absolute pixels. Its height is the height of its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledKey {
    pub origin: Point,
    pub width: i32,
    pub is_key: bool,
    pub key_type: KeyType,
    /// First codepoint of the descriptor's `char`, standard keys only.
    pub key_code: Option<char>,
}

impl CompiledKey {
    pub fn right(&self) -> i32 {
        self.origin.x + self.width
    }

    /// Upper-cased character for standard keys, mnemonic for special keys.
    pub fn label(&self) -> String {
        match self.key_type.label() {
            Some(mnemonic) => mnemonic.to_string(),
            None => self
                .key_code
                .map(|c| c.to_uppercase().collect())
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledRow {
    pub y: i32,
    pub height: i32,
    pub keys: Vec<CompiledKey>,
}

impl CompiledRow {
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }
}

/// A keymap resolved to pixel geometry for one canvas size.
///
/// Immutable once built; share it behind an `Arc` between the renderer and
/// the hit-test engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledKeyboard {
    origin: Point,
    width: i32,
    height: i32,
    width_scale: i32,
    height_scale: i32,
    rows: Vec<CompiledRow>,
}

impl CompiledKeyboard {
    /// Validates `km`, then compiles it for a `canvas_width` x `canvas_height` canvas.
    pub fn from_keymap(km: &Keymap, canvas_width: u32, canvas_height: u32) -> OskResult<Self> {
        validate(km)?;
        Ok(compile(km, canvas_width, canvas_height))
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Pixels per key-width unit.
    pub fn width_scale(&self) -> i32 {
        self.width_scale
    }

    /// Pixels per row-height unit.
    pub fn height_scale(&self) -> i32 {
        self.height_scale
    }

    pub fn rows(&self) -> &[CompiledRow] {
        &self.rows
    }

    pub fn key(&self, row: usize, column: usize) -> Option<&CompiledKey> {
        self.rows.get(row)?.keys.get(column)
    }

    /// Inclusive bounds test against the outer keyboard rectangle.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let Point { x: ox, y: oy } = self.origin;
        (oy..=oy + self.height).contains(&y) && (ox..=ox + self.width).contains(&x)
    }
}

/// Rounds half away from zero, the convention every pixel conversion here uses.
fn to_px(v: f64) -> i32 {
    v.round() as i32
}

fn clamp_dim(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

/// Converts a keymap to absolute pixel coordinates.
///
/// `km` must already have passed [`validate`]; compiling an unvalidated keymap
/// still terminates but the geometry is meaningless.
pub fn compile(km: &Keymap, canvas_width: u32, canvas_height: u32) -> CompiledKeyboard {
    let (fb_w, fb_h) = (f64::from(canvas_width), f64::from(canvas_height));
    let m = &km.kb_margins;
    let px_top = to_px(fb_h * m.top);
    let px_bottom = to_px(fb_h * m.bottom);
    let px_left = to_px(fb_w * m.left);
    let px_right = to_px(fb_w * m.right);

    let origin = Point::new(px_left, px_top);
    let width = clamp_dim(canvas_width)
        .saturating_sub(px_left)
        .saturating_sub(px_right);
    let height = clamp_dim(canvas_height)
        .saturating_sub(px_top)
        .saturating_sub(px_bottom);

    // Truncated to whole pixels; the keyboard may end short of its drawable area.
    let width_scale = (f64::from(width) / km.total_key_width).floor() as i32;
    let height_scale = (f64::from(height) / km.total_row_height).floor() as i32;

    debug!(
        "Compiling '{}' for {}x{}: origin=({}, {}) drawable={}x{} scale={}x{}",
        km.lang, canvas_width, canvas_height, origin.x, origin.y, width, height, width_scale, height_scale
    );

    // Rounded sizes can overrun the drawable area by up to half a pixel per
    // row or key; the last one is clipped to the outer bounds.
    let right_edge = origin.x.saturating_add(width);
    let bottom_edge = origin.y.saturating_add(height);

    let mut rows = Vec::with_capacity(km.rows.len());
    let mut curr_y = origin.y;
    for r in &km.rows {
        let row_height = to_px(f64::from(height_scale) * r.row_height)
            .min(bottom_edge.saturating_sub(curr_y).max(0));
        let mut curr_x = origin.x;
        let keys = r
            .keys
            .iter()
            .map(|k| {
                let key_width = to_px(f64::from(width_scale) * k.key_width)
                    .min(right_edge.saturating_sub(curr_x).max(0));
                let key = compile_key(k, Point::new(curr_x, curr_y), key_width);
                curr_x = curr_x.saturating_add(key.width);
                key
            })
            .collect();

        rows.push(CompiledRow {
            y: curr_y,
            height: row_height,
            keys,
        });
        curr_y = curr_y.saturating_add(row_height);
    }

    CompiledKeyboard {
        origin,
        width,
        height,
        width_scale,
        height_scale,
        rows,
    }
}

fn compile_key(k: &KeyDescriptor, origin: Point, width: i32) -> CompiledKey {
    let key_code = if k.key_type == KeyType::Standard {
        let mut chars = k.char.chars();
        let first = chars.next();
        if chars.next().is_some() {
            warn!("Key char '{}' has several codepoints, keeping the first", k.char);
        }
        first
    } else {
        None
    };

    CompiledKey {
        origin,
        width,
        is_key: !k.is_padding,
        key_type: k.key_type,
        key_code,
    }
}
