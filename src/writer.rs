//! Output accumulator.

use tracing::debug;

use crate::codec::Encode;
use crate::config::Config;
use crate::error::{Error, Result};

const INITIAL_CAPACITY: usize = 256;

/// Writer appends encoded values to a single growing buffer.
///
/// Every append either writes the whole encoding of its argument or, on
/// error, leaves the buffer exactly as it was before the call.
///
/// ```rust
/// use bytepack::{Reader, Result, Writer};
///
/// fn main() -> Result<()> {
///     let mut writer = Writer::new();
///     writer.push(&7u16)?.push("seven")?.push(&vec![1i32, 2, 3])?;
///     let data = writer.into_bytes();
///
///     let mut reader = Reader::new(&data);
///     assert_eq!(reader.read::<u16>()?, 7);
///     assert_eq!(reader.read_str()?, "seven");
///     assert_eq!(reader.read_seq::<i32>()?, vec![1, 2, 3]);
///     assert!(!reader.has_more());
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct Writer {
    buffer: Vec<u8>,
    config: Config,
}

impl Writer {
    /// Creates a new writer with default capacity.
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates a new writer with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            config: Config::default(),
        }
    }

    /// Creates a new writer honouring the limits in `config`.
    pub fn with_config(config: Config) -> Self {
        let capacity = match config.byte_limit() {
            Some(limit) => limit.min(INITIAL_CAPACITY),
            None => INITIAL_CAPACITY,
        };
        Self {
            buffer: Vec::with_capacity(capacity),
            config,
        }
    }

    /// Returns the limits this writer was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the current length of the buffer.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the encoded bytes as a slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Returns a copy of everything written so far.
    ///
    /// The writer stays usable, so a caller can flush partial output and keep
    /// appending.
    pub fn snapshot(&self) -> Vec<u8> {
        self.buffer.clone()
    }

    /// Consumes the writer and returns the encoded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    /// Resets the writer for reuse.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Appends the encoding of any [`Encode`] value.
    pub fn push<T: Encode + ?Sized>(&mut self, value: &T) -> Result<&mut Self> {
        self.atomically(|writer| value.encode(writer))
    }

    /// Writes a raw byte.
    pub fn write_byte(&mut self, value: u8) -> Result<&mut Self> {
        self.ensure_capacity(1)?;
        self.buffer.push(value);
        Ok(self)
    }

    /// Writes raw bytes with no length prefix.
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<&mut Self> {
        self.ensure_capacity(data.len())?;
        self.buffer.extend_from_slice(data);
        Ok(self)
    }

    /// Writes a 4-byte signed length prefix.
    pub fn write_length(&mut self, length: usize) -> Result<&mut Self> {
        let prefix = i32::try_from(length)
            .map_err(|_| Error::InvalidLength(length as i64))?;
        self.push(&prefix)
    }

    /// Writes a length-prefixed string.
    pub fn write_str(&mut self, value: &str) -> Result<&mut Self> {
        self.atomically(|writer| {
            writer.write_length(value.len())?;
            writer.write_bytes(value.as_bytes())?;
            Ok(())
        })
    }

    /// Writes a sequence: element count, then each element in iteration order.
    pub fn write_seq<'v, T, I>(&mut self, items: I) -> Result<&mut Self>
    where
        T: Encode + ?Sized + 'v,
        I: IntoIterator<Item = &'v T>,
        I::IntoIter: ExactSizeIterator,
    {
        let items = items.into_iter();
        self.atomically(|writer| {
            writer.write_length(items.len())?;
            for item in items {
                item.encode(writer)?;
            }
            Ok(())
        })
    }

    /// Writes a set as a sequence in ascending element order.
    pub fn write_set<'v, T, I>(&mut self, items: I) -> Result<&mut Self>
    where
        T: Encode + Ord + 'v,
        I: IntoIterator<Item = &'v T>,
    {
        let mut sorted: Vec<&T> = items.into_iter().collect();
        sorted.sort_unstable();
        self.write_seq(sorted)
    }

    /// Writes a map as all keys followed by all values, both in ascending key
    /// order.
    pub fn write_map<'v, K, V, I>(&mut self, entries: I) -> Result<&mut Self>
    where
        K: Encode + Ord + 'v,
        V: Encode + 'v,
        I: IntoIterator<Item = (&'v K, &'v V)>,
    {
        let mut sorted: Vec<(&K, &V)> = entries.into_iter().collect();
        sorted.sort_unstable_by(|a, b| a.0.cmp(b.0));
        self.atomically(|writer| {
            writer.write_seq(sorted.iter().map(|(k, _)| *k))?;
            writer.write_seq(sorted.iter().map(|(_, v)| *v))?;
            Ok(())
        })
    }

    /// Runs `f`, dropping anything it wrote if it fails.
    fn atomically<F>(&mut self, f: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let mark = self.buffer.len();
        match f(self) {
            Ok(()) => Ok(self),
            Err(e) => {
                self.buffer.truncate(mark);
                Err(e)
            }
        }
    }

    fn ensure_capacity(&self, additional: usize) -> Result<()> {
        if let Some(limit) = self.config.byte_limit() {
            let needed = self.buffer.len().saturating_add(additional);
            if needed > limit {
                debug!(needed, limit, "writer byte limit exceeded");
                return Err(Error::capacity_exceeded(needed, limit));
            }
        }
        Ok(())
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}
