//! Input cursor.

use std::mem::size_of;

use tracing::{debug, trace};

use crate::codec::Decode;
use crate::config::Config;
use crate::error::{Error, Result};

/// Reader decodes values from a byte slice, front to back.
///
/// Values must be read back with the same types, in the same order, as they
/// were written. A read that fails leaves the cursor where it was before the
/// call.
#[derive(Debug)]
pub struct Reader<'a> {
    buffer: &'a [u8],
    pos: usize,
    config: Config,
}

impl<'a> Reader<'a> {
    /// Creates a new reader from a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_config(data, Config::default())
    }

    /// Creates a new reader honouring the limits in `config`.
    pub fn with_config(data: &'a [u8], config: Config) -> Self {
        Self {
            buffer: data,
            pos: 0,
            config,
        }
    }

    /// Returns the limits this reader was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the length of the whole input.
    pub fn total_len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the number of bytes remaining.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.pos
    }

    /// Returns the number of bytes consumed so far.
    pub fn bytes_consumed(&self) -> usize {
        self.total_len() - self.remaining()
    }

    /// Returns true if there is more data to read.
    pub fn has_more(&self) -> bool {
        self.pos < self.buffer.len()
    }

    /// Checks if there are enough bytes available.
    fn check_available(&self, needed: usize) -> Result<()> {
        if needed > self.remaining() {
            return Err(Error::end_of_input(needed, self.remaining()));
        }
        Ok(())
    }

    /// Reads a raw byte.
    pub fn read_byte(&mut self) -> Result<u8> {
        self.check_available(1)?;
        let value = self.buffer[self.pos];
        self.pos += 1;
        Ok(value)
    }

    /// Reads raw bytes.
    pub fn read_bytes(&mut self, length: usize) -> Result<&'a [u8]> {
        self.check_available(length)?;
        let bytes = &self.buffer[self.pos..self.pos + length];
        self.pos += length;
        Ok(bytes)
    }

    /// Reads a 4-byte signed length prefix and validates it.
    pub fn read_length(&mut self) -> Result<usize> {
        self.atomically(|reader| {
            let raw = i32::decode(reader)?;
            if raw < 0 {
                trace!(length = raw, "negative length prefix");
                return Err(Error::InvalidLength(raw.into()));
            }
            let length = raw as usize;
            if length > reader.config.max_length() {
                trace!(
                    length,
                    max = reader.config.max_length(),
                    "length prefix above configured maximum"
                );
                return Err(Error::InvalidLength(raw.into()));
            }
            Ok(length)
        })
    }

    /// Reads any [`Decode`] value.
    pub fn read<T: Decode>(&mut self) -> Result<T> {
        self.atomically(T::decode)
    }

    /// Decodes into an existing value and returns the number of bytes
    /// consumed. `target` is only overwritten if decoding succeeds.
    pub fn read_into<T: Decode>(&mut self, target: &mut T) -> Result<usize> {
        let start = self.pos;
        *target = self.read()?;
        Ok(self.pos - start)
    }

    /// Reads a length-prefixed string without copying it.
    pub fn read_str(&mut self) -> Result<&'a str> {
        self.atomically(|reader| {
            let length = reader.read_length()?;
            let bytes = reader.read_bytes(length)?;
            std::str::from_utf8(bytes).map_err(|_| Error::InvalidUtf8)
        })
    }

    /// Reads a length-prefixed string into an owned `String`.
    pub fn read_string(&mut self) -> Result<String> {
        self.read_str().map(str::to_owned)
    }

    /// Reads a sequence, preserving element order.
    pub fn read_seq<T: Decode>(&mut self) -> Result<Vec<T>> {
        self.atomically(|reader| {
            let length = reader.read_length()?;
            let mut items = Vec::with_capacity(capacity_hint::<T>(length, reader.remaining()));
            for _ in 0..length {
                items.push(T::decode(reader)?);
            }
            Ok(items)
        })
    }

    /// Reads a sequence into a set, collapsing duplicates.
    pub fn read_set<T, S>(&mut self) -> Result<S>
    where
        T: Decode,
        S: FromIterator<T>,
    {
        Ok(self.read_seq::<T>()?.into_iter().collect())
    }

    /// Reads a key sequence then a value sequence and pairs them by position.
    ///
    /// Fails with [`Error::LengthMismatch`] if the two sequences differ in
    /// length.
    pub fn read_map<K, V, M>(&mut self) -> Result<M>
    where
        K: Decode,
        V: Decode,
        M: FromIterator<(K, V)>,
    {
        self.atomically(|reader| {
            let keys = reader.read_seq::<K>()?;
            let values = reader.read_seq::<V>()?;
            if keys.len() != values.len() {
                debug!(
                    keys = keys.len(),
                    values = values.len(),
                    "map key/value length mismatch"
                );
                return Err(Error::LengthMismatch {
                    keys: keys.len(),
                    values: values.len(),
                });
            }
            Ok(keys.into_iter().zip(values).collect())
        })
    }

    /// Runs `f`, restoring the position if it fails.
    fn atomically<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        let start = self.pos;
        let result = f(self);
        if result.is_err() {
            self.pos = start;
        }
        result
    }
}

/// Preallocation for a sequence of `length` elements: never more elements
/// than `remaining` bytes could hold if each took `size_of::<T>()` bytes.
fn capacity_hint<T>(length: usize, remaining: usize) -> usize {
    length.min(remaining / size_of::<T>().max(1))
}
