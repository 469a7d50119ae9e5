//! Record decoder.
//!
//! Walks a schema in declaration order, slices consecutive byte ranges out of
//! the buffer and decodes each one according to its [`FieldKind`].
//!
//! [`FieldKind`]: crate::types::FieldKind

use crate::error::{CeosError, Result};
use crate::schema::RecordSchema;
use crate::types::DecodedRecord;

/// Decode one record from `buffer`.
///
/// The buffer must hold at least `schema.width()` bytes; bytes past the end
/// of the schema are ignored. Decoding is fail-fast: the first malformed
/// numeric field aborts the decode and no partial record is returned.
///
/// # Errors
///
/// - [`CeosError::BufferTooShort`] if the buffer is shorter than the schema.
/// - [`CeosError::MalformedNumber`] naming the field, offset and raw bytes of
///   the first numeric field that does not parse.
pub fn decode(schema: &RecordSchema, buffer: &[u8]) -> Result<DecodedRecord> {
    let required = schema.width();
    if buffer.len() < required {
        return Err(CeosError::BufferTooShort {
            required,
            actual: buffer.len(),
        });
    }

    let mut fields = Vec::with_capacity(schema.len());
    let mut offset = 0usize;
    for field in schema.fields() {
        let width = field.width();
        let raw = buffer
            .get(offset..offset + width)
            .ok_or(CeosError::BufferTooShort {
                required,
                actual: buffer.len(),
            })?;

        let value = field
            .kind
            .decode(raw)
            .map_err(|err| CeosError::MalformedNumber {
                field: field.name.clone(),
                kind: err.kind,
                offset,
                width,
                raw: raw.to_vec(),
            })?;

        fields.push((field.name.clone(), value));
        offset += width;
    }

    Ok(DecodedRecord::new(schema.name(), fields))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FieldKind, Value};

    fn schema() -> RecordSchema {
        RecordSchema::new(
            "test",
            [("A", FieldKind::Integer(4)), ("B", FieldKind::String(6))],
        )
        .unwrap()
    }

    #[test]
    fn test_decode_basic() {
        let record = decode(&schema(), b"  12FOO   ").unwrap();
        assert_eq!(record.get("A"), Some(&Value::integer(12)));
        assert_eq!(record.get("B"), Some(&Value::text("FOO")));
        assert_eq!(record.schema_name(), "test");
    }

    #[test]
    fn test_decode_blank_integer() {
        let record = decode(&schema(), b"    FOO   ").unwrap();
        assert_eq!(record.get("A"), Some(&Value::Integer(None)));
        assert_eq!(record.get("B"), Some(&Value::text("FOO")));
    }

    #[test]
    fn test_decode_malformed_number() {
        let err = decode(&schema(), b"12X4FOO   ").unwrap_err();
        match err {
            CeosError::MalformedNumber {
                field,
                kind,
                offset,
                width,
                raw,
            } => {
                assert_eq!(field, "A");
                assert_eq!(kind, FieldKind::Integer(4));
                assert_eq!(offset, 0);
                assert_eq!(width, 4);
                assert_eq!(raw, b"12X4");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_decode_malformed_reports_offset_of_later_field() {
        let schema = RecordSchema::new(
            "test",
            [("A", FieldKind::String(3)), ("B", FieldKind::Float(4))],
        )
        .unwrap();
        let err = decode(&schema, b"abc1..2").unwrap_err();
        assert!(matches!(
            err,
            CeosError::MalformedNumber { ref field, offset: 3, width: 4, .. } if field == "B"
        ));
    }

    #[test]
    fn test_decode_buffer_too_short() {
        let err = decode(&schema(), b"  12FOO").unwrap_err();
        assert!(matches!(
            err,
            CeosError::BufferTooShort {
                required: 10,
                actual: 7
            }
        ));
    }

    #[test]
    fn test_decode_ignores_trailing_bytes() {
        let exact = decode(&schema(), b"  12FOO   ").unwrap();
        let longer = decode(&schema(), b"  12FOO   trailing garbage").unwrap();
        assert_eq!(exact, longer);
    }

    #[test]
    fn test_decode_does_not_borrow_buffer() {
        let record = {
            let buffer = b"  12FOO   ".to_vec();
            decode(&schema(), &buffer).unwrap()
        };
        assert_eq!(record.integer("A"), Some(12));
    }
}
