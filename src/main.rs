//! Gomoku GUI
//!
//! Play against the minimax engine on a configurable board.

use std::path::PathBuf;

use clap::Parser;
use gomoku::config::{GameConfig, DEFAULT_CONFIG_PATH};
use gomoku::ui::GomokuApp;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Game configuration file (JSON)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), eframe::Error> {
    let args = Args::parse();
    gomoku::logging::init(args.debug);

    let config = GameConfig::load_or_default(&args.config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(|cc| Ok(Box::new(GomokuApp::new(cc, config)))),
    )
}
