// crates/shared-kernel/src/error.rs
use std::{fmt, path::PathBuf};

use thiserror::Error;

/// Filesystem step that failed, used to render diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsOperation {
    OpenDirectory,
    ReadDirectory,
    OpenFile,
    ReadFile,
    CreateReport,
    WriteReport,
}

impl fmt::Display for FsOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Self::OpenDirectory => "open directory",
            Self::ReadDirectory => "read directory",
            Self::OpenFile => "open file",
            Self::ReadFile => "read file",
            Self::CreateReport => "create report",
            Self::WriteReport => "write report",
        };
        f.write_str(verb)
    }
}

/// Root error type shared across the workspace. Every variant is fatal to a run.
#[derive(Debug, Error)]
pub enum CountWordsError {
    #[error("failed to {operation} '{}': {source}", .path.display())]
    Filesystem {
        operation: FsOperation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no files found in '{}'", .path.display())]
    EmptyInput { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, CountWordsError>;

impl CountWordsError {
    pub fn filesystem(operation: FsOperation, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem { operation, path: path.into(), source }
    }

    pub fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput { .. })
    }

    pub fn is_filesystem(&self) -> bool {
        matches!(self, Self::Filesystem { .. })
    }
}
