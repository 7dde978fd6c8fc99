use std::path::PathBuf;

use clap::Parser;

/// A clinic appointment booker with a terminal UI
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to a TOML theme file with color overrides
    #[arg(long)]
    theme: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = frontdesk::tui::run(cli.theme.as_deref()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
