// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handviewer CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::Parser;
use log::error;
use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process,
};

use handviewer_core::{HandParser, ParseOptions};

pub mod terminal;

#[derive(Debug, Parser)]
struct Cli {
    /// The hand history file, reads from stdin if missing.
    file: Option<PathBuf>,
    /// Replace player names with their table position.
    #[clap(long, short)]
    anonymize: bool,
    /// Show amounts in big blinds.
    #[clap(long, short)]
    bb: bool,
    /// Print the hand as JSON.
    #[clap(long, short)]
    json: bool,
    /// Enable debug logging.
    #[clap(long, short)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(cli) {
        error!("{e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let text = read_input(cli.file.as_ref())?;

    let options = ParseOptions {
        anonymize: cli.anonymize,
        bb_mode: cli.bb,
    };

    let hand = HandParser::new(options).parse(&text);

    let mut stdout = io::stdout();
    if cli.json {
        serde_json::to_writer_pretty(&mut stdout, &hand).context("Failed to write JSON")?;
        println!();
    } else {
        terminal::print_hand(&mut stdout, &hand)?;
    }

    Ok(())
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Cannot read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Cannot read stdin")?;
            Ok(text)
        }
    }
}
