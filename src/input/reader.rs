//! Line-buffered character source for pipes, files and tests

use super::{InputError, KeySource};
use log::warn;
use std::collections::VecDeque;
use std::io::BufRead;

/// Reads input a line at a time and yields its non-whitespace characters.
///
/// Only the first character of each line waits on the underlying reader;
/// the rest come from the buffered line. Invalid UTF-8 is skipped.
pub struct ReaderSource<R> {
    reader: R,
    line: Vec<u8>,
    pending: VecDeque<char>,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
            pending: VecDeque::new(),
        }
    }

    /// Read the next line into `pending`. Returns false at end of input.
    fn fill(&mut self) -> Result<bool, InputError> {
        self.line.clear();
        if self.reader.read_until(b'\n', &mut self.line)? == 0 {
            return Ok(false);
        }

        for chunk in self.line.utf8_chunks() {
            self.pending.extend(chunk.valid().chars());
            if !chunk.invalid().is_empty() {
                warn!("Skipping {} byte(s) of invalid UTF-8 input", chunk.invalid().len());
            }
        }
        Ok(true)
    }
}

impl<R: BufRead> KeySource for ReaderSource<R> {
    fn next_key(&mut self) -> Result<Option<char>, InputError> {
        loop {
            match self.pending.pop_front() {
                Some(c) if c.is_whitespace() => continue,
                Some(c) => return Ok(Some(c)),
                None => {
                    if !self.fill()? {
                        return Ok(None);
                    }
                }
            }
        }
    }
}
