use clap::Args;
use oskforge::error::OskResult;
use oskforge::keymap::{validate, Keymap};

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {}

pub fn run(_args: ValidateArgs, keymap: &Keymap) -> OskResult<()> {
    println!("\n🔎 === KEYMAP AUDIT === 🔎");
    validate(keymap)?;
    println!(
        "✅ Keymap '{}' OK: {} rows, {} keys",
        keymap.lang,
        keymap.rows.len(),
        keymap.rows.iter().map(|r| r.keys.len()).sum::<usize>()
    );
    Ok(())
}
