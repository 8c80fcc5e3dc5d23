//! Error types for the codec.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// A failure raised by the encoder or the decoder.
///
/// Every failure aborts the whole call; no partial output is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The string to encode or decode is empty.
    #[error("empty input")]
    EmptyInput,

    /// Text contains a character outside `a-z`, `A-Z`, `0-9` and space.
    #[error(
        "invalid character '{character}' (U+{codepoint:04X}) at position {position}",
        codepoint = u32::from(*.character)
    )]
    InvalidCharacter {
        /// The rejected character.
        character: char,
        /// Character position in the input.
        position: usize,
    },

    /// Braille input length is not a multiple of the cell width.
    #[error("invalid Braille length {length}: expected a multiple of 6")]
    InvalidLength {
        /// Input length in characters.
        length: usize,
    },

    /// A cell matches no marker and no table entry.
    #[error("unknown cell \"{cell}\" at cell {position}")]
    UnknownCell {
        /// The 6-character segment as it appeared in the input.
        cell: String,
        /// Zero-based cell index in the input.
        position: usize,
    },
}

/// Fieldless discriminant of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::EmptyInput`].
    EmptyInput,
    /// See [`Error::InvalidCharacter`].
    InvalidCharacter,
    /// See [`Error::InvalidLength`].
    InvalidLength,
    /// See [`Error::UnknownCell`].
    UnknownCell,
}

impl ErrorKind {
    /// Stable identifier of the failure kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyInput => "empty-input",
            Self::InvalidCharacter => "invalid-character",
            Self::InvalidLength => "invalid-length",
            Self::UnknownCell => "unknown-cell",
        }
    }
}

impl Error {
    /// Returns the kind of this failure.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput => ErrorKind::EmptyInput,
            Self::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
            Self::InvalidLength { .. } => ErrorKind::InvalidLength,
            Self::UnknownCell { .. } => ErrorKind::UnknownCell,
        }
    }
}
