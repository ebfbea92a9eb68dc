//! Bytepack - length-prefixed binary encoding for Rust values.
//!
//! Values are written back to back with no tags or headers: scalars as their
//! native-order bytes, text and collections behind a 4-byte signed length
//! prefix. A reader must ask for the same types, in the same order, as the
//! writer produced them.
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use bytepack::{Reader, Result, Writer};
//!
//! fn main() -> Result<()> {
//!     let mut scores = BTreeMap::new();
//!     scores.insert("alice".to_string(), 7u32);
//!     scores.insert("bob".to_string(), 3u32);
//!
//!     // Encoding
//!     let mut writer = Writer::new();
//!     writer.push(&42i32)?.push("hello")?.push(&scores)?;
//!     let data = writer.into_bytes();
//!
//!     // Decoding
//!     let mut reader = Reader::new(&data);
//!     assert_eq!(reader.read::<i32>()?, 42);
//!     assert_eq!(reader.read_str()?, "hello");
//!     assert_eq!(reader.read::<BTreeMap<String, u32>>()?, scores);
//!     assert_eq!(reader.bytes_consumed(), data.len());
//!     Ok(())
//! }
//! ```

mod codec;
mod config;
mod container;
mod error;
mod reader;
mod scalar;
mod text;
mod writer;

pub use codec::{Decode, Encode};
pub use config::{Config, DEFAULT_MAX_LENGTH};
pub use error::{Error, Result};
pub use reader::Reader;
pub use writer::Writer;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Encodes a single value into a new buffer.
pub fn marshal<T: Encode + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut writer = Writer::new();
    writer.push(value)?;
    Ok(writer.into_bytes())
}

/// Decodes a single value from the front of `data`.
///
/// Returns the value and the number of bytes it occupied; trailing bytes are
/// left untouched.
pub fn unmarshal<T: Decode>(data: &[u8]) -> Result<(T, usize)> {
    let mut reader = Reader::new(data);
    let value = reader.read()?;
    Ok((value, reader.bytes_consumed()))
}

/// Decodes from the front of `data` into an existing value, returning the
/// number of bytes consumed. On failure `target` is left unchanged.
pub fn decode_into<T: Decode>(target: &mut T, data: &[u8]) -> Result<usize> {
    Reader::new(data).read_into(target)
}

/// Returns the number of bytes `value` encodes to.
pub fn encoded_len<T: Encode + ?Sized>(value: &T) -> Result<usize> {
    marshal(value).map(|bytes| bytes.len())
}
