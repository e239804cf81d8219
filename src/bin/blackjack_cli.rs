// src/bin/blackjack_cli.rs

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use blackjack_engine::config::{GameConfig, DEFAULT_RESULTS_PATH};
use blackjack_engine::console::StdConsole;
use blackjack_engine::infra::{CsvResultLog, SessionRng};
use blackjack_engine::{logging, Session};

#[derive(Parser, Debug)]
#[command(name = "blackjack_cli", version, about = "Console blackjack against a house-rules dealer")]
struct Cli {
    /// CSV file that round results are appended to.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_RESULTS_PATH)]
    results: PathBuf,

    /// Fixed seed for reproducible shuffles.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,
}

impl From<Cli> for GameConfig {
    fn from(cli: Cli) -> Self {
        GameConfig {
            results_path: cli.results,
            seed: cli.seed,
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    logging::init();
    let config = GameConfig::from(Cli::parse());
    tracing::debug!(?config, "starting blackjack session");

    let mut session = Session::new(
        SessionRng::from_seed(config.seed),
        CsvResultLog::new(&config.results_path),
        StdConsole,
    );
    session.run().context("blackjack session aborted")
}
