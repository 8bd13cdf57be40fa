// src/main.rs
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use count_words::{app, args::Args, config::Config, logging, presentation};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init();

    match try_main(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // One line on stderr; every message already embeds its cause.
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(args: Args) -> Result<()> {
    let config = Config::try_from(args)?;
    let summary = app::run(&config)?;
    presentation::print_total(summary.total)
}
