//! Streaming word scanner.
//!
//! A word is a maximal run of bytes that are not separators. Separators are the
//! ASCII whitespace bytes: space, `\t`, `\n`, `\r`, form feed and vertical tab.
//! The reader is consumed chunk by chunk through [`BufRead::fill_buf`], so a file
//! is never held in memory as a whole.

use std::io::{self, BufRead};

use count_words_shared_kernel::WordCount;

/// Returns `true` for bytes that separate words.
#[inline]
pub const fn is_word_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Byte range of one word within the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSpan {
    pub start: u64,
    pub len: u64,
}

impl TokenSpan {
    pub const fn end(self) -> u64 {
        self.start + self.len
    }
}

/// Lazy, single-pass iterator over the words of a buffered reader.
///
/// A read error is yielded once, after which the iterator is exhausted.
#[derive(Debug)]
pub struct Words<R> {
    reader: R,
    offset: u64,
    done: bool,
}

impl<R: BufRead> Words<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, offset: 0, done: false }
    }
}

impl<R: BufRead> Iterator for Words<R> {
    type Item = io::Result<TokenSpan>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut start: Option<u64> = None;
        loop {
            let buf = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            };

            if buf.is_empty() {
                self.done = true;
                return start.map(|start| Ok(TokenSpan { start, len: self.offset - start }));
            }

            let mut used = 0;
            let mut word_ended = false;
            for &byte in buf {
                if is_word_separator(byte) {
                    if start.is_some() {
                        word_ended = true;
                        break;
                    }
                } else if start.is_none() {
                    start = Some(self.offset + used as u64);
                }
                used += 1;
            }

            self.reader.consume(used);
            self.offset += used as u64;

            if let (true, Some(start)) = (word_ended, start) {
                return Some(Ok(TokenSpan { start, len: self.offset - start }));
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for Words<R> {}

/// Counts the words of `reader`, propagating the first read error.
pub fn count_words<R: BufRead>(reader: R) -> io::Result<WordCount> {
    Words::new(reader).try_fold(WordCount::zero(), |count, token| token.map(|_| count.increment()))
}
