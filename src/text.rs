//! Length-prefixed text.

use crate::codec::{Decode, Encode};
use crate::error::Result;
use crate::reader::Reader;
use crate::writer::Writer;

impl Encode for str {
    #[inline]
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        writer.write_str(self)?;
        Ok(())
    }
}

impl Encode for String {
    #[inline]
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        self.as_str().encode(writer)
    }
}

impl Decode for String {
    #[inline]
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        reader.read_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_consumes_prefix_and_content() {
        let text = String::from("héllo");
        let mut writer = Writer::new();
        writer.push(&text).unwrap();
        assert_eq!(writer.len(), 4 + text.len());

        let data = writer.into_bytes();
        let mut reader = Reader::new(&data);
        let mut decoded = String::new();
        assert_eq!(reader.read_into(&mut decoded).unwrap(), 4 + text.len());
        assert_eq!(decoded, text);
    }

    #[test]
    fn test_str_and_string_share_layout() {
        let mut a = Writer::new();
        a.push("same").unwrap();
        let mut b = Writer::new();
        b.push(&String::from("same")).unwrap();
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_bytes_vec_matches_text_layout() {
        let mut a = Writer::new();
        a.push("raw").unwrap();
        let mut b = Writer::new();
        b.push(&b"raw".to_vec()).unwrap();
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_truncated_content() {
        let mut data = 10i32.to_ne_bytes().to_vec();
        data.extend_from_slice(b"short");
        let mut reader = Reader::new(&data);
        let err = reader.read::<String>().unwrap_err();
        assert!(err.is_truncation());
    }
}
