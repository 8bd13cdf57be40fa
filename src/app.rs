// src/app.rs
use count_words_domain::Summary;
use count_words_infra::{DirectoryInputSource, FileReportSink};
use count_words_shared_kernel::Result;
use count_words_usecase::CountWords;
use tracing::info_span;

use crate::config::Config;

/// Runs one word count over the configured directories using the filesystem adapters.
pub fn run(config: &Config) -> Result<Summary> {
    let _span = info_span!("count_words", input = %config.input_dir.display()).entered();
    let source = DirectoryInputSource::new();
    let sink = FileReportSink;
    CountWords::new(&source, &sink).run(&config.request())
}
