// crates/infra/src/filesystem.rs
use std::{fs, io::BufRead, path::Path};

use count_words_domain::InputEntry;
use count_words_ports::filesystem::InputSource;
use count_words_shared_kernel::{CountWordsError, FileName, FsOperation, Result};
use tracing::debug;

use crate::persistence::FileReader;

/// Lists the direct children of a directory with `std::fs::read_dir`.
///
/// Entries come back in the order the platform yields them; nothing is sorted.
/// Every child is an entry, subdirectories included, so a child that cannot be
/// read as a file fails the run when it is opened or scanned.
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectoryInputSource;

impl DirectoryInputSource {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for DirectoryInputSource {
    fn entries(&self, dir: &Path) -> Result<Vec<InputEntry>> {
        let read_dir =
            fs::read_dir(dir).map_err(|e| CountWordsError::filesystem(FsOperation::OpenDirectory, dir, e))?;

        let mut entries = Vec::new();
        for item in read_dir {
            let item = item.map_err(|e| CountWordsError::filesystem(FsOperation::ReadDirectory, dir, e))?;
            entries.push(InputEntry::in_dir(dir, FileName::from_os_str(&item.file_name())));
        }

        debug!(dir = %dir.display(), count = entries.len(), "listed input directory");
        Ok(entries)
    }

    fn open(&self, entry: &InputEntry) -> Result<Box<dyn BufRead>> {
        Ok(Box::new(FileReader::open_buffered(&entry.path)?))
    }
}
