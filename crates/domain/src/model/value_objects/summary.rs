use std::path::PathBuf;

use count_words_shared_kernel::WordCount;

use crate::model::WordCountRecord;

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub records: Vec<WordCountRecord>,
    pub total: WordCount,
    pub report_path: PathBuf,
}

impl Summary {
    pub fn new(records: Vec<WordCountRecord>, total: WordCount, report_path: PathBuf) -> Self {
        Self { records, total, report_path }
    }
}
