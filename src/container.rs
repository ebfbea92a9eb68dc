//! Sequences, sets and maps.
//!
//! Sequences (`Vec`, `VecDeque`, `LinkedList`, slices, arrays) are a length
//! prefix followed by each element in order. Sets use the same layout, in
//! ascending order. Maps are a key sequence followed by a value sequence,
//! both in ascending key order.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};

use crate::codec::{Decode, Encode};
use crate::error::{Error, Result};
use crate::reader::Reader;
use crate::writer::Writer;

impl<T: Encode> Encode for [T] {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        writer.write_seq(self)?;
        Ok(())
    }
}

impl<T: Encode, const N: usize> Encode for [T; N] {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        self.as_slice().encode(writer)
    }
}

impl<T: Decode, const N: usize> Decode for [T; N] {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        let items = reader.read_seq::<T>()?;
        match <[T; N]>::try_from(items) {
            Ok(array) => Ok(array),
            Err(items) => Err(Error::ArrayLength {
                expected: N,
                found: items.len(),
            }),
        }
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        self.as_slice().encode(writer)
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        reader.read_seq()
    }
}

impl<T: Encode> Encode for VecDeque<T> {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        writer.write_seq(self)?;
        Ok(())
    }
}

impl<T: Decode> Decode for VecDeque<T> {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        reader.read_seq::<T>().map(VecDeque::from)
    }
}

impl<T: Encode> Encode for LinkedList<T> {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        writer.write_seq(self)?;
        Ok(())
    }
}

impl<T: Decode> Decode for LinkedList<T> {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(reader.read_seq::<T>()?.into_iter().collect())
    }
}

impl<T: Encode + Ord> Encode for BTreeSet<T> {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        writer.write_set(self)?;
        Ok(())
    }
}

impl<T: Decode + Ord> Decode for BTreeSet<T> {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        reader.read_set::<T, Self>()
    }
}

impl<T: Encode + Ord, S> Encode for HashSet<T, S> {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        writer.write_set(self)?;
        Ok(())
    }
}

impl<T, S> Decode for HashSet<T, S>
where
    T: Decode + Eq + Hash,
    S: BuildHasher + Default,
{
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        reader.read_set::<T, Self>()
    }
}

impl<K: Encode + Ord, V: Encode> Encode for BTreeMap<K, V> {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        writer.write_map(self)?;
        Ok(())
    }
}

impl<K: Decode + Ord, V: Decode> Decode for BTreeMap<K, V> {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        reader.read_map::<K, V, Self>()
    }
}

impl<K: Encode + Ord, V: Encode, S> Encode for HashMap<K, V, S> {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        writer.write_map(self)?;
        Ok(())
    }
}

impl<K, V, S> Decode for HashMap<K, V, S>
where
    K: Decode + Eq + Hash,
    V: Decode,
    S: BuildHasher + Default,
{
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        reader.read_map::<K, V, Self>()
    }
}
