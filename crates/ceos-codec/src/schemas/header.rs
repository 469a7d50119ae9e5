//! CEOS record header.
//!
//! Every CEOS record starts with the same 12-byte header.
//!
//! | Offset | Field                | Type   | Description                 |
//! |--------|----------------------|--------|-----------------------------|
//! | 0-3    | RecordSequenceNumber | u32 BE | 1-based record number       |
//! | 4      | RecordSubtype1       | u8     | First record subtype code   |
//! | 5      | RecordType           | u8     | Record type code            |
//! | 6      | RecordSubtype2       | u8     | Second record subtype code  |
//! | 7      | RecordSubtype3       | u8     | Third record subtype code   |
//! | 8-11   | RecordLength         | u32 BE | Record length incl. header  |

use crate::catalog::RecordTypeCode;
use crate::error::{CeosError, Result};
use crate::schema::RecordSchema;
use crate::types::FieldKind;

/// Record header length in bytes.
pub const RECORD_HEADER_LEN: usize = 12;

/// Schema name of the record header.
pub const RECORD_HEADER: &str = "record header";

/// Record header fields.
pub const RECORD_HEADER_FIELDS: &[(&str, FieldKind)] = &[
    ("RecordSequenceNumber", FieldKind::Binary(4)),
    ("RecordSubtype1", FieldKind::Binary(1)),
    ("RecordType", FieldKind::Binary(1)),
    ("RecordSubtype2", FieldKind::Binary(1)),
    ("RecordSubtype3", FieldKind::Binary(1)),
    ("RecordLength", FieldKind::Binary(4)),
];

/// Build the record header schema, the base of every record schema.
pub fn record_header() -> Result<RecordSchema> {
    RecordSchema::new(RECORD_HEADER, RECORD_HEADER_FIELDS.iter().copied())
}

/// Typed view of a record header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHeader {
    /// Record sequence number.
    pub sequence_number: u32,
    /// Record type code.
    pub code: RecordTypeCode,
    /// Total record length in bytes, header included.
    pub length: u32,
}

impl RecordHeader {
    /// Parse the header from the first 12 bytes of `data`.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let header = data
            .get(..RECORD_HEADER_LEN)
            .ok_or(CeosError::BufferTooShort {
                required: RECORD_HEADER_LEN,
                actual: data.len(),
            })?;

        Ok(Self {
            sequence_number: read_u32(header, 0),
            code: RecordTypeCode::new(header[4], header[5], header[6], header[7]),
            length: read_u32(header, 8),
        })
    }

    /// Build the 12-byte header.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; RECORD_HEADER_LEN] {
        let mut buf = [0u8; RECORD_HEADER_LEN];
        buf[0..4].copy_from_slice(&self.sequence_number.to_be_bytes());
        buf[4] = self.code.subtype1;
        buf[5] = self.code.record_type;
        buf[6] = self.code.subtype2;
        buf[7] = self.code.subtype3;
        buf[8..12].copy_from_slice(&self.length.to_be_bytes());
        buf
    }
}

/// Read a big-endian u32 from data.
fn read_u32(data: &[u8], offset: usize) -> u32 {
    let bytes = [
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ];
    u32::from_be_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Value;

    #[test]
    fn test_parse_header() {
        let bytes = [0, 0, 0, 2, 18, 10, 18, 20, 0, 0, 0x10, 0x00];
        let header = RecordHeader::parse(&bytes).unwrap();
        assert_eq!(header.sequence_number, 2);
        assert_eq!(header.code, RecordTypeCode::new(18, 10, 18, 20));
        assert_eq!(header.length, 4096);
        assert_eq!(header.to_bytes(), bytes);
    }

    #[test]
    fn test_parse_short_header() {
        let err = RecordHeader::parse(&[0; 8]).unwrap_err();
        assert!(matches!(
            err,
            CeosError::BufferTooShort {
                required: 12,
                actual: 8
            }
        ));
    }

    #[test]
    fn test_schema_matches_typed_offsets() {
        let schema = record_header().unwrap();
        assert_eq!(schema.width(), RECORD_HEADER_LEN);
        assert_eq!(schema.range_of("RecordSequenceNumber"), Some(0..4));
        assert_eq!(schema.range_of("RecordType"), Some(5..6));
        assert_eq!(schema.range_of("RecordLength"), Some(8..12));

        let bytes = [0, 0, 0, 1, 11, 192, 18, 18, 0, 0, 0x01, 0x68];
        let record = schema.decode(&bytes).unwrap();
        assert_eq!(
            record.get("RecordLength"),
            Some(&Value::Binary(vec![0, 0, 1, 0x68]))
        );
        assert_eq!(RecordHeader::parse(&bytes).unwrap().length, 360);
    }
}
