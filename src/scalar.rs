//! Fixed-width scalars, stored as their native-order bit pattern.

use std::mem::size_of;

use byteorder::{ByteOrder, NativeEndian};

use crate::codec::{Decode, Encode};
use crate::error::Result;
use crate::reader::Reader;
use crate::writer::Writer;

macro_rules! impl_scalar {
    ($($ty:ty => $read:ident, $write:ident;)*) => {
        $(
            impl Encode for $ty {
                #[inline]
                fn encode(&self, writer: &mut Writer) -> Result<()> {
                    let mut buf = [0u8; size_of::<$ty>()];
                    NativeEndian::$write(&mut buf, *self);
                    writer.write_bytes(&buf)?;
                    Ok(())
                }
            }

            impl Decode for $ty {
                #[inline]
                fn decode(reader: &mut Reader<'_>) -> Result<Self> {
                    let bytes = reader.read_bytes(size_of::<$ty>())?;
                    Ok(NativeEndian::$read(bytes))
                }
            }
        )*
    };
}

impl_scalar! {
    u16 => read_u16, write_u16;
    i16 => read_i16, write_i16;
    u32 => read_u32, write_u32;
    i32 => read_i32, write_i32;
    u64 => read_u64, write_u64;
    i64 => read_i64, write_i64;
    u128 => read_u128, write_u128;
    i128 => read_i128, write_i128;
    f32 => read_f32, write_f32;
    f64 => read_f64, write_f64;
}

impl Encode for u8 {
    #[inline]
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        writer.write_byte(*self)?;
        Ok(())
    }
}

impl Decode for u8 {
    #[inline]
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        reader.read_byte()
    }
}

impl Encode for i8 {
    #[inline]
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        writer.write_byte(*self as u8)?;
        Ok(())
    }
}

impl Decode for i8 {
    #[inline]
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(reader.read_byte()? as i8)
    }
}

impl Encode for bool {
    #[inline]
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        writer.write_byte(u8::from(*self))?;
        Ok(())
    }
}

impl Decode for bool {
    #[inline]
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(reader.read_byte()? != 0)
    }
}
