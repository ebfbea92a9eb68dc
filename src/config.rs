//! Limits applied by writers and readers.

/// Largest length prefix a reader accepts by default (64 MB).
pub const DEFAULT_MAX_LENGTH: usize = 64 * 1024 * 1024;

/// Limits shared by [`Writer`](crate::Writer) and [`Reader`](crate::Reader).
///
/// The wire format carries no bound on a length prefix, so a reader trusts
/// it only up to `max_length`. A writer with a `byte_limit` refuses to grow
/// its buffer past that many bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    max_length: usize,
    byte_limit: Option<usize>,
}

impl Config {
    /// Creates the default configuration.
    pub const fn new() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            byte_limit: None,
        }
    }

    /// Sets the largest length prefix a reader will accept.
    pub const fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Caps the number of bytes a writer may hold.
    pub const fn with_byte_limit(mut self, limit: usize) -> Self {
        self.byte_limit = Some(limit);
        self
    }

    /// Removes the writer byte cap.
    pub const fn unlimited(mut self) -> Self {
        self.byte_limit = None;
        self
    }

    /// Returns the largest accepted length prefix.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Returns the writer byte cap, if any.
    pub fn byte_limit(&self) -> Option<usize> {
        self.byte_limit
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
