// src/config.rs
use std::{ffi::OsStr, path::{Path, PathBuf}};

use count_words_usecase::{CountRequest, dto::DEFAULT_REPORT_NAME};
use derive_builder::Builder;

use crate::args::Args;

/// Input mount used by the job platform.
pub const DEFAULT_INPUT_DIR: &str = "/inputs";
/// Output mount collected by the job platform after the run.
pub const DEFAULT_OUTPUT_DIR: &str = "/outputs";

#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Config {
    #[builder(default = "PathBuf::from(DEFAULT_INPUT_DIR)")]
    pub input_dir: PathBuf,
    #[builder(default = "PathBuf::from(DEFAULT_OUTPUT_DIR)")]
    pub output_dir: PathBuf,
    #[builder(default = "DEFAULT_REPORT_NAME.to_string()")]
    pub report_name: String,
}

impl ConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match &self.report_name {
            Some(name) if Path::new(name).file_name() != Some(OsStr::new(name)) => {
                Err(format!("report name must be a plain file name, got '{name}'"))
            }
            _ => Ok(()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            report_name: DEFAULT_REPORT_NAME.to_string(),
        }
    }
}

impl Config {
    pub fn request(&self) -> CountRequest {
        CountRequest::new(&self.input_dir, &self.output_dir).with_report_name(&self.report_name)
    }
}

impl TryFrom<Args> for Config {
    type Error = ConfigBuilderError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        ConfigBuilder::default()
            .input_dir(args.input_dir)
            .output_dir(args.output_dir)
            .report_name(args.report_name)
            .build()
    }
}
