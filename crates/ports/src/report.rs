// crates/ports/src/report.rs
use std::path::{Path, PathBuf};

use count_words_domain::WordCountRecord;
use count_words_shared_kernel::Result;

/// Port for creating the per-run report artifact.
pub trait ReportSink {
    /// Creates (or truncates) the report `name` inside `dir`.
    fn create(&self, dir: &Path, name: &str) -> Result<Box<dyn ReportWriter>>;
}

/// An open report. Dropping it without [`ReportWriter::finish`] releases the
/// handle on a best-effort basis.
pub trait ReportWriter {
    fn append(&mut self, record: &WordCountRecord) -> Result<()>;

    /// Flushes and closes the report, returning its path.
    fn finish(self: Box<Self>) -> Result<PathBuf>;
}
