// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handrank CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use rand::{SeedableRng, rngs::SmallRng};
use std::{fs, path::PathBuf};

use handrank_eval::{EvalConfig, Evaluator};

mod commands;

#[derive(Debug, Parser)]
struct Cli {
    /// Evaluator config JSON file.
    #[clap(long, short)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluates a player hand.
    Eval {
        /// The community cards, e.g. 2_H,7_D,9_C.
        #[clap(long, short, value_delimiter = ',', required = true)]
        board: Vec<String>,
        /// The player hole cards, e.g. A_S,A_C.
        #[clap(long, value_delimiter = ',', required = true)]
        hole: Vec<String>,
    },
    /// Compares players hands on the same board.
    Showdown {
        /// The community cards, e.g. 2_H,7_D,9_C.
        #[clap(long, short, value_delimiter = ',', required = true)]
        board: Vec<String>,
        /// A player hole cards, repeat for each player, e.g. A_S,A_C.
        #[clap(long, short, required = true)]
        player: Vec<String>,
    },
    /// Deals a random hand and runs a showdown.
    Deal {
        /// Number of players.
        #[clap(long, short, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=10))]
        players: u8,
        /// Seed for a repeatable deal.
        #[clap(long, short)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let evaluator = Evaluator::new(load_config(cli.config)?)?;

    let output = match cli.command {
        Command::Eval { board, hole } => commands::eval(&evaluator, &board, &hole)?,
        Command::Showdown { board, player } => commands::showdown(&evaluator, &board, &player)?,
        Command::Deal { players, seed } => {
            let mut rng = match seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_os_rng(),
            };
            commands::deal(&evaluator, players as usize, &mut rng)?
        }
    };

    print!("{output}");
    Ok(())
}

fn load_config(path: Option<PathBuf>) -> Result<EvalConfig> {
    let Some(path) = path else {
        return Ok(EvalConfig::default());
    };

    info!("Loading config from {}", path.display());
    let json = fs::read_to_string(&path)
        .with_context(|| format!("Cannot read config {}", path.display()))?;
    let config = serde_json::from_str(&json)
        .with_context(|| format!("Invalid config {}", path.display()))?;

    Ok(config)
}
