// crates/shared-kernel/src/lib.rs
pub use error::{CountWordsError, FsOperation, Result};

pub mod error;
pub mod value_objects;

pub use value_objects::{FileName, WordCount};
