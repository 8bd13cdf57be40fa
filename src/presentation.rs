// src/presentation.rs
use std::io::{self, Write};

use anyhow::{Result, anyhow};
use count_words_shared_kernel::WordCount;

/// Line printed on stdout once all files are counted. The double space is part of the format.
pub fn total_line(total: WordCount) -> String {
    format!("Total word count:  {total}")
}

/// Writes the total line. The io cause stays in the message, which is printed as a single line.
pub fn write_total<W: Write>(out: &mut W, total: WordCount) -> Result<()> {
    writeln!(out, "{}", total_line(total))
        .and_then(|()| out.flush())
        .map_err(|e| anyhow!("failed to write the total to stdout: {e}"))
}

pub fn print_total(total: WordCount) -> Result<()> {
    write_total(&mut io::stdout().lock(), total)
}
