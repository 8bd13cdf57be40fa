pub mod input_entry;
pub mod word_count_record;

pub use input_entry::InputEntry;
pub use word_count_record::WordCountRecord;
