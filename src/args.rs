// src/args.rs
use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};
use count_words_usecase::dto::DEFAULT_REPORT_NAME;

/// Every option has a default, so the job runs with no arguments at all.
#[derive(Parser, Debug)]
#[command(
    name = "count_words",
    version,
    about = "Counts the words of every file in a directory"
)]
pub struct Args {
    /// Directory whose files are counted (not recursive)
    #[arg(
        long,
        env = "COUNT_WORDS_INPUT_DIR",
        default_value = DEFAULT_INPUT_DIR,
        value_hint = ValueHint::DirPath
    )]
    pub input_dir: PathBuf,

    /// Directory receiving the report file
    #[arg(
        long,
        env = "COUNT_WORDS_OUTPUT_DIR",
        default_value = DEFAULT_OUTPUT_DIR,
        value_hint = ValueHint::DirPath
    )]
    pub output_dir: PathBuf,

    /// File name of the per-file report
    #[arg(long, env = "COUNT_WORDS_REPORT_NAME", default_value = DEFAULT_REPORT_NAME)]
    pub report_name: String,
}
