//! Error types for checked bit-string construction.
//!
//! The unchecked core routines raise nothing; only the validated
//! [`crate::BitString`] layer reports malformed input.

use std::fmt;

/// Errors that can occur when validating a bit-string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BitStringError {
    /// The input contained no characters at all.
    Empty,
    /// A character other than `'0'` or `'1'` was found.
    InvalidBit { position: usize, found: char },
}

impl fmt::Display for BitStringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "bit-string must not be empty"),
            Self::InvalidBit { position, found } => {
                write!(f, "invalid bit {found:?} at position {position}")
            }
        }
    }
}

impl std::error::Error for BitStringError {}
