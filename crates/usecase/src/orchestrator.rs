use count_words_domain::{InputEntry, Summary, WordCountRecord, count_words};
use count_words_ports::{filesystem::InputSource, report::ReportSink};
use count_words_shared_kernel::{CountWordsError, FsOperation, Result, WordCount};
use tracing::{debug, info};

use crate::dto::CountRequest;

/// Counts the words of every file in a directory and writes one report line per file.
///
/// The first failure aborts the run. Lines appended before the failure stay in the
/// report as far as they were flushed.
pub struct CountWords<'a> {
    source: &'a dyn InputSource,
    sink: &'a dyn ReportSink,
}

impl<'a> CountWords<'a> {
    pub fn new(source: &'a dyn InputSource, sink: &'a dyn ReportSink) -> Self {
        Self { source, sink }
    }

    pub fn run(&self, request: &CountRequest) -> Result<Summary> {
        let entries = self.source.entries(&request.input_dir)?;
        if entries.is_empty() {
            return Err(CountWordsError::EmptyInput { path: request.input_dir.clone() });
        }
        debug!(dir = %request.input_dir.display(), files = entries.len(), "enumerated inputs");

        let mut report = self.sink.create(&request.output_dir, &request.report_name)?;
        let mut total = WordCount::zero();
        let mut records = Vec::with_capacity(entries.len());

        for entry in entries {
            let words = self.count_entry(&entry)?;
            debug!(file = %entry.name, words = words.value(), "counted");

            let record = WordCountRecord::new(entry.name, words);
            report.append(&record)?;
            total += words;
            records.push(record);
        }

        let report_path = report.finish()?;
        info!(files = records.len(), total = total.value(), report = %report_path.display(), "word count complete");
        Ok(Summary::new(records, total, report_path))
    }

    fn count_entry(&self, entry: &InputEntry) -> Result<WordCount> {
        let reader = self.source.open(entry)?;
        count_words(reader)
            .map_err(|source| CountWordsError::filesystem(FsOperation::ReadFile, &entry.path, source))
    }
}
