use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use count_words_domain::WordCountRecord;
use count_words_ports::report::{ReportSink, ReportWriter};
use count_words_shared_kernel::{CountWordsError, FsOperation, Result};
use tracing::debug;

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Create (or truncate) `path` behind a buffered writer.
    pub fn create(path: &Path) -> Result<BufWriter<File>> {
        File::create(path)
            .map(BufWriter::new)
            .map_err(|e| CountWordsError::filesystem(FsOperation::CreateReport, path, e))
    }
}

/// Writes the report as a plain text file, one line per record.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileReportSink;

impl ReportSink for FileReportSink {
    fn create(&self, dir: &Path, name: &str) -> Result<Box<dyn ReportWriter>> {
        let path = dir.join(name);
        let out = FileWriter::create(&path)?;
        debug!(report = %path.display(), "created report");
        Ok(Box::new(FileReportWriter { path, out }))
    }
}

#[derive(Debug)]
pub struct FileReportWriter {
    path: PathBuf,
    out: BufWriter<File>,
}

impl FileReportWriter {
    fn write_error(&self, source: std::io::Error) -> CountWordsError {
        CountWordsError::filesystem(FsOperation::WriteReport, &self.path, source)
    }
}

impl ReportWriter for FileReportWriter {
    fn append(&mut self, record: &WordCountRecord) -> Result<()> {
        writeln!(self.out, "{record}").map_err(|e| self.write_error(e))
    }

    fn finish(mut self: Box<Self>) -> Result<PathBuf> {
        self.out.flush().map_err(|e| self.write_error(e))?;
        // Best-effort: devices and some sandboxed filesystems reject fsync.
        if let Err(e) = self.out.get_ref().sync_all() {
            debug!(report = %self.path.display(), error = %e, "report sync skipped");
        }
        Ok(self.path)
    }
}
