// crates/ports/src/filesystem.rs
use std::{io::BufRead, path::Path};

use count_words_domain::InputEntry;
use count_words_shared_kernel::Result;

/// Port for listing and reading the files of an input directory.
pub trait InputSource {
    /// Direct file entries of `dir`, in the order the source yields them.
    ///
    /// Subdirectories are not entries. An empty result is not an error here;
    /// the caller decides what an empty input means.
    fn entries(&self, dir: &Path) -> Result<Vec<InputEntry>>;

    /// Opens `entry` for buffered, streaming reads.
    fn open(&self, entry: &InputEntry) -> Result<Box<dyn BufRead>>;
}
