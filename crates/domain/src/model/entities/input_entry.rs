use std::path::{Path, PathBuf};

use count_words_shared_kernel::FileName;

/// A direct child of the input directory: its name and the path used to open it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEntry {
    pub name: FileName,
    pub path: PathBuf,
}

impl InputEntry {
    /// Builds the entry for `name` inside `dir`.
    pub fn in_dir(dir: &Path, name: FileName) -> Self {
        let path = dir.join(name.as_str());
        Self { name, path }
    }
}
