// crates/infra/src/lib.rs
pub mod filesystem;
pub mod persistence;

pub use filesystem::DirectoryInputSource;
pub use persistence::{FileReportSink, FileReportWriter};
