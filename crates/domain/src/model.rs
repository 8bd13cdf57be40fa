pub mod entities;
pub mod value_objects;

pub use entities::{InputEntry, WordCountRecord};
pub use value_objects::Summary;
