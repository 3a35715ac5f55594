//! Error types for magnitude parsing and conversion.

use thiserror::Error;

/// Failure to turn user input into a [`Magnitude`](crate::Magnitude).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MagnitudeError {
    /// The literal contained no digits.
    #[error("magnitude literal is empty")]
    Empty,

    /// Magnitudes count things; negative values have no layout.
    #[error("magnitude cannot be negative")]
    Negative,

    /// A character that is neither a digit nor a group separator.
    #[error("invalid character {found:?} at position {position}")]
    InvalidDigit {
        /// Byte offset of the offending character.
        position: usize,
        /// The offending character.
        found: char,
    },

    /// The value does not fit in 128 bits.
    #[error("magnitude does not fit in 128 bits")]
    Overflow,
}
