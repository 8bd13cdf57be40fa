use std::path::PathBuf;

/// Report file name used when none is configured.
pub const DEFAULT_REPORT_NAME: &str = "count.txt";

/// Input of [`crate::CountWords::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountRequest {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub report_name: String,
}

impl CountRequest {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            report_name: DEFAULT_REPORT_NAME.to_string(),
        }
    }

    #[must_use]
    pub fn with_report_name(mut self, name: impl Into<String>) -> Self {
        self.report_name = name.into();
        self
    }
}
