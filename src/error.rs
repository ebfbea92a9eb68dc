//! Error types for bytepack operations.

use thiserror::Error;

/// Result type for bytepack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for bytepack operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A read asked for more bytes than remain in the input.
    #[error("unexpected end of input: needed {needed} bytes, only {available} available")]
    UnexpectedEndOfInput { needed: usize, available: usize },

    /// A length prefix is negative, above the configured maximum, or a
    /// value is too long to be described by a 4-byte prefix.
    #[error("invalid length prefix: {0}")]
    InvalidLength(i64),

    /// Decoded key and value sequences of a map have different lengths.
    #[error("map length mismatch: {keys} keys, {values} values")]
    LengthMismatch { keys: usize, values: usize },

    /// Writing would grow the buffer past its configured byte limit.
    #[error("buffer capacity exceeded: needed {needed} bytes, capacity is {capacity}")]
    BufferCapacityExceeded { needed: usize, capacity: usize },

    /// A fixed-size array was decoded from a sequence of another length.
    #[error("array length mismatch: expected {expected} elements, found {found}")]
    ArrayLength { expected: usize, found: usize },

    /// Invalid UTF-8 string.
    #[error("invalid UTF-8 string")]
    InvalidUtf8,

    /// Custom error message, for composite implementations.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates an unexpected end of input error.
    pub fn end_of_input(needed: usize, available: usize) -> Self {
        Self::UnexpectedEndOfInput { needed, available }
    }

    /// Creates a buffer capacity error.
    pub fn capacity_exceeded(needed: usize, capacity: usize) -> Self {
        Self::BufferCapacityExceeded { needed, capacity }
    }

    /// Creates a custom error.
    pub fn custom(msg: impl Into<String>) -> Self {
        Self::Custom(msg.into())
    }

    /// Returns true if the error was caused by running out of input.
    pub fn is_truncation(&self) -> bool {
        matches!(self, Self::UnexpectedEndOfInput { .. })
    }
}
