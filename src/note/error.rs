//! Error types for note-name conversion.

use thiserror::Error;

/// An error produced while converting between note names and MIDI numbers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    /// The text is neither a note name nor a plain integer.
    #[error("invalid string {input:?}")]
    InvalidFormat { input: String },
    /// The text parsed, but the resulting number is outside 0..=127.
    #[error("out of bounds value {0}")]
    OutOfRange(i64),
    /// An accidental note was formatted with neither sharp nor flat selected.
    #[error("no spelling available for note {0} without a sharp or flat accent style")]
    NoRepresentation(i32),
}

impl NoteError {
    /// An `InvalidFormat` error for the given input text.
    pub fn invalid(input: impl Into<String>) -> Self {
        NoteError::InvalidFormat {
            input: input.into(),
        }
    }

    /// The computed value carried by `OutOfRange`, for diagnostics.
    pub fn value(&self) -> Option<i64> {
        match self {
            NoteError::OutOfRange(v) => Some(*v),
            _ => None,
        }
    }
}
