//! End-to-end encoding tests: fixed byte layouts, round trips of nested
//! composites, and failure behaviour on short input.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::thread;

use bytepack::{marshal, unmarshal, Config, Decode, Encode, Error, Reader, Result, Writer};

#[derive(Debug, Clone, PartialEq)]
struct Line {
    sku: String,
    quantity: u32,
    unit_price: f64,
}

impl Encode for Line {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        writer
            .push(&self.sku)?
            .push(&self.quantity)?
            .push(&self.unit_price)?;
        Ok(())
    }
}

impl Decode for Line {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(Line {
            sku: reader.read()?,
            quantity: reader.read()?,
            unit_price: reader.read()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Order {
    id: u64,
    lines: Vec<Line>,
    tags: BTreeSet<String>,
    attributes: HashMap<String, i16>,
}

impl Encode for Order {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        writer
            .push(&self.id)?
            .push(&self.lines)?
            .push(&self.tags)?
            .push(&self.attributes)?;
        Ok(())
    }
}

impl Decode for Order {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(Order {
            id: reader.read()?,
            lines: reader.read()?,
            tags: reader.read()?,
            attributes: reader.read()?,
        })
    }
}

fn test_order() -> Order {
    Order {
        id: 0xdead_beef,
        lines: vec![
            Line {
                sku: "apple".to_string(),
                quantity: 3,
                unit_price: 0.5,
            },
            Line {
                sku: "pear".to_string(),
                quantity: 1,
                unit_price: 1.25,
            },
        ],
        tags: ["fresh", "fruit"].iter().map(|s| s.to_string()).collect(),
        attributes: [("aisle".to_string(), 4), ("shelf".to_string(), -2)]
            .into_iter()
            .collect(),
    }
}

#[test]
#[cfg(target_endian = "little")]
fn test_int_sequence_layout() {
    let data = marshal(&vec![1i32, 2, 3]).unwrap();
    assert_eq!(hex::encode(&data), "03000000010000000200000003000000");

    let mut reader = Reader::new(&data);
    assert_eq!(reader.read::<Vec<i32>>().unwrap(), vec![1, 2, 3]);
    assert_eq!(reader.bytes_consumed(), 16);
}

#[test]
#[cfg(target_endian = "little")]
fn test_string_layout() {
    let data = marshal("hi!").unwrap();
    assert_eq!(hex::encode(&data), "03000000686921");
}

#[test]
#[cfg(target_endian = "little")]
fn test_map_layout() {
    let mut map = HashMap::new();
    map.insert(2u16, "b".to_string());
    map.insert(1u16, "a".to_string());
    let data = marshal(&map).unwrap();
    // Keys [1, 2], then values ["a", "b"].
    assert_eq!(
        hex::encode(&data),
        "02000000010002000200000001000000610100000062"
    );
}

#[test]
fn test_truncated_second_value() {
    let data = marshal(&10i32).unwrap();
    assert_eq!(data.len(), 4);

    let mut reader = Reader::new(&data);
    assert_eq!(reader.read::<i32>().unwrap(), 10);
    let err = reader.read::<i32>().unwrap_err();
    assert!(matches!(
        err,
        Error::UnexpectedEndOfInput {
            needed: 4,
            available: 0
        }
    ));
}

#[test]
fn test_nested_composite_roundtrip() {
    let order = test_order();
    let data = marshal(&order).unwrap();
    let (decoded, consumed) = unmarshal::<Order>(&data).unwrap();
    assert_eq!(decoded, order);
    assert_eq!(consumed, data.len());
}

#[test]
fn test_sequence_of_composites_roundtrip() {
    let mut second = test_order();
    second.id = 2;
    second.lines.clear();
    let orders = vec![test_order(), second];

    let data = marshal(&orders).unwrap();
    let (decoded, _) = unmarshal::<Vec<Order>>(&data).unwrap();
    assert_eq!(decoded, orders);
}

#[test]
fn test_truncated_composite_fails_cleanly() {
    let data = marshal(&test_order()).unwrap();
    for cut in [0, 7, 12, data.len() / 2, data.len() - 1] {
        let mut reader = Reader::new(&data[..cut]);
        let err = reader.read::<Order>().unwrap_err();
        assert!(err.is_truncation(), "cut at {cut}: {err}");
        assert_eq!(reader.bytes_consumed(), 0);
    }
}

#[test]
fn test_map_positional_correspondence() {
    let map: HashMap<String, Vec<u8>> = (0u8..20)
        .map(|i| (format!("k{i:02}"), vec![i; i as usize]))
        .collect();
    let bytes = marshal(&map).unwrap();
    let (decoded, _) = unmarshal::<HashMap<String, Vec<u8>>>(&bytes).unwrap();
    assert_eq!(decoded, map);

    let ordered: BTreeMap<String, Vec<u8>> = map.clone().into_iter().collect();
    assert_eq!(marshal(&ordered).unwrap(), marshal(&map).unwrap());
}

#[test]
fn test_mixed_stream_in_order() {
    let set: HashSet<i64> = [-5, 0, 5].into_iter().collect();

    let mut writer = Writer::new();
    writer
        .push(&1u8)
        .unwrap()
        .push(&-1i16)
        .unwrap()
        .push(&u128::MAX)
        .unwrap()
        .push(&2.5f32)
        .unwrap()
        .push("")
        .unwrap()
        .push(&set)
        .unwrap()
        .push(&false)
        .unwrap();
    let data = writer.into_bytes();

    let mut reader = Reader::new(&data);
    assert_eq!(reader.read::<u8>().unwrap(), 1);
    assert_eq!(reader.read::<i16>().unwrap(), -1);
    assert_eq!(reader.read::<u128>().unwrap(), u128::MAX);
    assert_eq!(reader.read::<f32>().unwrap(), 2.5);
    assert_eq!(reader.read_string().unwrap(), "");
    assert_eq!(reader.read::<HashSet<i64>>().unwrap(), set);
    assert!(!reader.read::<bool>().unwrap());
    assert!(!reader.has_more());
}

#[test]
fn test_incremental_snapshots() {
    let mut writer = Writer::new();
    let mut flushed = Vec::new();
    for i in 0..3u32 {
        writer.push(&i).unwrap();
        let snapshot = writer.snapshot();
        flushed.push(snapshot.len());
    }
    assert_eq!(flushed, vec![4, 8, 12]);
}

#[test]
fn test_limits() {
    let data = marshal(&vec![0u8; 32]).unwrap();
    let mut reader = Reader::with_config(&data, Config::new().with_max_length(16));
    assert!(matches!(
        reader.read::<Vec<u8>>(),
        Err(Error::InvalidLength(32))
    ));

    let mut writer = Writer::with_config(Config::new().with_byte_limit(16));
    let err = writer.push(&vec![0u8; 32]).unwrap_err();
    assert!(matches!(err, Error::BufferCapacityExceeded { .. }));
    assert!(writer.is_empty());
}

#[test]
fn test_buffers_cross_threads() {
    let data = marshal(&test_order()).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let data = data.clone();
            thread::spawn(move || unmarshal::<Order>(&data).unwrap().0)
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), test_order());
    }
}
