//! Command-line move selector
//!
//! Reads one move request as JSON and prints the response:
//!
//! ```text
//! $ echo '{"board": [0, ...], "depth": 2}' | gomoku-cli
//! {"move":112,"winner":null}
//! ```

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gomoku::api;
use gomoku::config::GameConfig;
use gomoku::search::TieBreak;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Request file (JSON); stdin when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Configuration file providing the tie-break policy
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible random tie-break
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();
    gomoku::logging::init(args.debug);

    match run(&args) {
        Ok(response) => println!("{response}"),
        Err(e) => {
            log::error!("{e:#}");
            println!("{}", serde_json::json!({ "error": format!("{e:#}") }));
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<String> {
    let tie_break = match (args.seed, &args.config) {
        (Some(seed), _) => TieBreak::Random { seed: Some(seed) },
        (None, Some(path)) => {
            GameConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?
                .tie_break
        }
        (None, None) => TieBreak::First,
    };

    let input = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    Ok(api::handle_json(&input, tie_break)?)
}
