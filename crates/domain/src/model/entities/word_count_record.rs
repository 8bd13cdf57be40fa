use std::fmt;

use count_words_shared_kernel::{FileName, WordCount};

/// Word count of a single input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCountRecord {
    pub name: FileName,
    pub words: WordCount,
}

impl WordCountRecord {
    pub fn new(name: FileName, words: WordCount) -> Self {
        Self { name, words }
    }
}

/// Report line without the trailing newline: `<name> has <count> words`.
impl fmt::Display for WordCountRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} has {} words", self.name, self.words)
    }
}
