use std::{fs::File, io::BufReader, path::Path};

use count_words_shared_kernel::{CountWordsError, FsOperation, Result};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> Result<File> {
        File::open(path).map_err(|e| CountWordsError::filesystem(FsOperation::OpenFile, path, e))
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> Result<BufReader<File>> {
        Self::open(path).map(BufReader::new)
    }
}
