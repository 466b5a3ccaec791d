// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Line-oriented word-list reader.
//!
//! A word list supplies one word per `\n`-terminated line. The reader
//! consumes any [`Read`] source through a fixed-size buffer refilled in
//! blocks, yielding one validated word per call. It reports:
//!
//! - `Ok(Some(word))`: the next word,
//! - `Ok(None)`: end of input, the success signal to start searching,
//! - `Err(BadFormat)`: an empty line, a line longer than [`MAX_WORD_LEN`],
//!   a line containing anything but printable non-whitespace ASCII (this
//!   includes the `\r` of a CRLF line ending), or the buffer overflowing
//!   before a terminator is found,
//! - `Err(SourceUnavailable)`: the underlying source failed mid-read.
//!
//! Trailing bytes after the last terminator are not a word; they are
//! discarded as end of input.

use std::io::Read;

use super::errors::BuildError;

/// Maximum length of a dictionary word, in bytes.
pub const MAX_WORD_LEN: usize = 50;

/// Capacity of the internal read buffer.
const READ_BUF_SIZE: usize = 256;

/// Number of bytes requested from the source per refill.
const READ_BLOCK_LEN: usize = 100;

/// Buffered reader yielding one word per line of the underlying source.
#[derive(Debug)]
pub struct WordReader<R> {
    inner: R,

    /// Bytes read from the source but not yet consumed as words.
    buffer: Vec<u8>,

    /// Number of complete lines consumed so far.
    line_no: usize,
}

impl<R: Read> WordReader<R> {
    /// Wrap a readable word-list source.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buffer: Vec::with_capacity(READ_BUF_SIZE),
            line_no: 0,
        }
    }

    /// Read the next word, refilling the buffer from the source as needed.
    ///
    /// Returns `Ok(None)` once the source is exhausted with no complete
    /// line remaining.
    pub fn next_word(&mut self) -> Result<Option<String>, BuildError> {
        let newline = loop {
            if let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
                break pos;
            }

            // No terminator buffered yet: refill one block.
            if self.buffer.len() + 1 + READ_BLOCK_LEN > READ_BUF_SIZE {
                // A line this long cannot be a valid word.
                return Err(BuildError::BadFormat {
                    line_no: self.line_no + 1,
                });
            }
            let mut block = [0u8; READ_BLOCK_LEN];
            let read = self
                .inner
                .read(&mut block)
                .map_err(|_| BuildError::SourceUnavailable)?;
            if read == 0 {
                // End of input; any unterminated fragment is not a word.
                return Ok(None);
            }
            self.buffer.extend_from_slice(&block[..read]);
        };

        let line = &self.buffer[..newline];
        // Words are printable non-whitespace 7-bit characters. Rejecting
        // anything else here also catches CRLF word lists: a trailing '\r'
        // would otherwise become part of the word and never match a grid
        // letter.
        if line.is_empty()
            || line.len() > MAX_WORD_LEN
            || !line.iter().all(|b| b.is_ascii_graphic())
        {
            return Err(BuildError::BadFormat {
                line_no: self.line_no + 1,
            });
        }

        let word = line.iter().map(|&b| b as char).collect();
        self.buffer.drain(..=newline);
        self.line_no += 1;
        Ok(Some(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(input: &str) -> WordReader<Cursor<Vec<u8>>> {
        WordReader::new(Cursor::new(input.as_bytes().to_vec()))
    }

    #[test]
    fn test_reads_words_in_order() {
        let mut r = reader("hello\nworld\n");
        assert_eq!(r.next_word().unwrap(), Some("hello".to_string()));
        assert_eq!(r.next_word().unwrap(), Some("world".to_string()));
        assert_eq!(r.next_word().unwrap(), None);
    }

    #[test]
    fn test_empty_source() {
        let mut r = reader("");
        assert_eq!(r.next_word().unwrap(), None);
    }

    #[test]
    fn test_trailing_fragment_is_end_of_input() {
        let mut r = reader("hello\nwor");
        assert_eq!(r.next_word().unwrap(), Some("hello".to_string()));
        assert_eq!(r.next_word().unwrap(), None);
    }

    #[test]
    fn test_word_at_max_length_is_accepted() {
        let word = "a".repeat(MAX_WORD_LEN);
        let mut r = reader(&format!("{}\n", word));
        assert_eq!(r.next_word().unwrap(), Some(word));
    }

    #[test]
    fn test_word_over_max_length_is_bad_format() {
        let mut r = reader(&format!("{}\n", "a".repeat(MAX_WORD_LEN + 1)));
        assert_eq!(r.next_word(), Err(BuildError::BadFormat { line_no: 1 }));
    }

    #[test]
    fn test_empty_line_is_bad_format() {
        let mut r = reader("hello\n\nworld\n");
        assert_eq!(r.next_word().unwrap(), Some("hello".to_string()));
        assert_eq!(r.next_word(), Err(BuildError::BadFormat { line_no: 2 }));
    }

    #[test]
    fn test_crlf_line_ending_is_bad_format() {
        // A '\r' kept in the word could never match a grid letter; reject
        // it loudly instead.
        let mut r = reader("cat\r\ndog\n");
        assert_eq!(r.next_word(), Err(BuildError::BadFormat { line_no: 1 }));
    }

    #[test]
    fn test_non_ascii_bytes_are_bad_format() {
        let mut r = WordReader::new(Cursor::new(b"caf\xc3\xa9\n".to_vec()));
        assert_eq!(r.next_word(), Err(BuildError::BadFormat { line_no: 1 }));
    }

    #[test]
    fn test_embedded_space_is_bad_format() {
        let mut r = reader("two words\n");
        assert_eq!(r.next_word(), Err(BuildError::BadFormat { line_no: 1 }));
    }

    #[test]
    fn test_unterminated_run_overflows_buffer() {
        // No terminator anywhere: the buffer fills up before a line is found.
        let mut r = reader(&"a".repeat(READ_BUF_SIZE * 2));
        assert_eq!(r.next_word(), Err(BuildError::BadFormat { line_no: 1 }));
    }

    #[test]
    fn test_line_numbers_in_errors() {
        let mut r = reader(&format!("one\ntwo\n{}\n", "x".repeat(60)));
        assert_eq!(r.next_word().unwrap(), Some("one".to_string()));
        assert_eq!(r.next_word().unwrap(), Some("two".to_string()));
        assert_eq!(r.next_word(), Err(BuildError::BadFormat { line_no: 3 }));
    }
}
