use crate::reports;
use clap::Args;
use oskforge::config::Config;
use oskforge::error::OskResult;
use oskforge::keymap::Keymap;
use oskforge::layout::CompiledKeyboard;

#[derive(Args, Debug, Clone)]
pub struct LayoutArgs {
    #[command(flatten)]
    pub config: Config,

    /// Print the compiled keyboard as JSON instead of a table.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: LayoutArgs, keymap: &Keymap) -> OskResult<()> {
    let canvas = &args.config.canvas;
    let kb = CompiledKeyboard::from_keymap(keymap, canvas.canvas_width, canvas.canvas_height)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&kb)?);
    } else {
        reports::print_keyboard(&keymap.lang, &kb);
    }
    Ok(())
}
