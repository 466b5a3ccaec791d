// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for dictionary construction.

use std::fmt;

/// Errors that can occur while building a dictionary from a word list.
///
/// Normal end of input is not an error: the reader reports it as `Ok(None)`
/// and it is the signal that the search phase may begin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A word-list line was empty, exceeded the maximum word length,
    /// contained a byte outside printable non-whitespace ASCII, or the
    /// read buffer filled up before a line terminator was found.
    BadFormat { line_no: usize },

    /// Node allocation failed during the build. The dictionary is left in
    /// its partially-built state and must be discarded by the caller.
    OutOfMemory,

    /// The word-list source could not be opened or read.
    SourceUnavailable,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::BadFormat { line_no } => {
                write!(f, "Word list line {} is malformed", line_no)
            }
            BuildError::OutOfMemory => {
                write!(f, "Out of memory while building the dictionary")
            }
            BuildError::SourceUnavailable => {
                write!(f, "Word list source could not be opened or read")
            }
        }
    }
}
