//! The `Encode` / `Decode` capability shared by every supported type.
//!
//! Scalars, text and containers implement these traits inside the crate.
//! User types opt in by implementing them by hand, usually by pushing and
//! reading their fields in a fixed order:
//!
//! ```rust
//! use bytepack::{Decode, Encode, Reader, Result, Writer};
//!
//! #[derive(Debug, PartialEq)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//!     label: String,
//! }
//!
//! impl Encode for Point {
//!     fn encode(&self, writer: &mut Writer) -> Result<()> {
//!         writer.push(&self.x)?.push(&self.y)?.push(&self.label)?;
//!         Ok(())
//!     }
//! }
//!
//! impl Decode for Point {
//!     fn decode(reader: &mut Reader<'_>) -> Result<Self> {
//!         Ok(Point {
//!             x: reader.read()?,
//!             y: reader.read()?,
//!             label: reader.read()?,
//!         })
//!     }
//! }
//!
//! fn main() -> Result<()> {
//!     let points = vec![
//!         Point { x: 1, y: 2, label: "a".into() },
//!         Point { x: -3, y: 4, label: "b".into() },
//!     ];
//!     let data = bytepack::marshal(&points)?;
//!     let (decoded, consumed) = bytepack::unmarshal::<Vec<Point>>(&data)?;
//!     assert_eq!(decoded, points);
//!     assert_eq!(consumed, data.len());
//!     Ok(())
//! }
//! ```

use crate::error::Result;
use crate::reader::Reader;
use crate::writer::Writer;

/// A value that can append its byte representation to a [`Writer`].
pub trait Encode {
    /// Appends the encoding of `self`.
    fn encode(&self, writer: &mut Writer) -> Result<()>;
}

/// A value that can be reconstructed from a [`Reader`].
///
/// `decode` must consume exactly the bytes the matching [`Encode`]
/// implementation produced.
pub trait Decode: Sized {
    /// Reads one value from the front of `reader`.
    fn decode(reader: &mut Reader<'_>) -> Result<Self>;
}

impl<T: Encode + ?Sized> Encode for &T {
    #[inline]
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        (**self).encode(writer)
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    #[inline]
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        (**self).encode(writer)
    }
}

impl<T: Decode> Decode for Box<T> {
    #[inline]
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        T::decode(reader).map(Box::new)
    }
}
