use clap::{Parser, Subcommand};
use oskforge::keymap::Keymap;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(
        global = true,
        short = 'k',
        long,
        default_value = "data/keymaps/en_us.json"
    )]
    keymap: String,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Validate(cmd::validate::ValidateArgs),
    Layout(cmd::layout::LayoutArgs),
    Hit(cmd::hit::HitArgs),
    Render(cmd::render::RenderArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    info!("📂 Loading Keymap: {}", cli.keymap);
    let keymap = Keymap::load_from_file(&cli.keymap).unwrap_or_else(|e| {
        error!("❌ {}", e);
        process::exit(1);
    });

    let result = match cli.command {
        Commands::Validate(args) => cmd::validate::run(args, &keymap),
        Commands::Layout(args) => cmd::layout::run(args, &keymap),
        Commands::Hit(args) => cmd::hit::run(args, &keymap),
        Commands::Render(args) => cmd::render::run(args, &keymap),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
