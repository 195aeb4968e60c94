use clap::Args;
use oskforge::config::Config;
use oskforge::error::OskResult;
use oskforge::keymap::Keymap;
use oskforge::layout::CompiledKeyboard;
use oskforge::render::{load_font, render_with_font, DEFAULT_FONT_SIZE};
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    #[command(flatten)]
    pub config: Config,

    /// Destination PNG file.
    #[arg(long)]
    pub out: PathBuf,

    /// TrueType font used for key labels.
    #[arg(long, default_value = "data/fonts/DejaVuSans.ttf")]
    pub font: PathBuf,

    #[arg(long, default_value_t = DEFAULT_FONT_SIZE)]
    pub font_size: f32,
}

pub fn run(args: RenderArgs, keymap: &Keymap) -> OskResult<()> {
    let canvas = &args.config.canvas;
    let kb = CompiledKeyboard::from_keymap(keymap, canvas.canvas_width, canvas.canvas_height)?;
    let font = load_font(&args.font)?;

    let img = render_with_font(&kb, &font, args.font_size);
    img.save_png(&args.out)?;
    println!(
        "🖼️  Rendered '{}' ({}x{}, {} labels) to {}",
        keymap.lang,
        img.width,
        img.height,
        img.labels.len(),
        args.out.display()
    );
    Ok(())
}
