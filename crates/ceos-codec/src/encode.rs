//! Record encoder.
//!
//! Re-composes a [`DecodedRecord`] into the exact byte layout of a schema.
//! Text is left-justified and written one byte per char (ISO-8859-1), numbers
//! are right-justified, and both are padded with spaces. Blank numeric values
//! become all spaces.

use crate::error::{CeosError, Result};
use crate::schema::RecordSchema;
use crate::types::{DecodedRecord, FieldDescriptor, FieldKind, Value};

/// Encode `record` into a buffer of exactly `schema.width()` bytes.
///
/// Fields are looked up by name, so the record may carry extra fields that
/// the schema does not declare.
///
/// # Errors
///
/// - [`CeosError::MissingField`] if the record has no value for a field.
/// - [`CeosError::KindMismatch`] if a value does not match the field kind.
/// - [`CeosError::WidthMismatch`] if a value does not fit its field.
/// - [`CeosError::UnencodableChar`] if text holds a char above U+00FF.
pub fn encode(schema: &RecordSchema, record: &DecodedRecord) -> Result<Vec<u8>> {
    let mut buf = vec![b' '; schema.width()];

    for (field, range) in schema.layout() {
        let value = record
            .get(&field.name)
            .ok_or_else(|| CeosError::missing_field(&field.name))?;
        let bytes = encode_value(field, value)?;
        buf[range].copy_from_slice(&bytes);
    }

    Ok(buf)
}

/// Encode a single value to exactly `field.width()` bytes.
fn encode_value(field: &FieldDescriptor, value: &Value) -> Result<Vec<u8>> {
    let width = field.width();
    match (field.kind, value) {
        (FieldKind::Blank(_), Value::Blank(raw)) if raw.len() == width => Ok(raw.clone()),
        (FieldKind::Blank(_), Value::Blank(_)) => Ok(vec![b' '; width]),
        (FieldKind::String(_), Value::Text(text)) => pad_left_justified(field, text),
        (FieldKind::Integer(_), Value::Integer(Some(n))) => {
            pad_right_justified(field, &n.to_string())
        }
        (FieldKind::Float(_), Value::Float(Some(x))) => encode_float(field, *x),
        (FieldKind::Integer(_), Value::Integer(None))
        | (FieldKind::Float(_), Value::Float(None)) => Ok(vec![b' '; width]),
        (FieldKind::Binary(_), Value::Binary(bytes)) if bytes.len() == width => {
            Ok(bytes.clone())
        }
        (FieldKind::Binary(_), Value::Binary(bytes)) => Err(CeosError::WidthMismatch {
            field: field.name.clone(),
            width,
            actual: bytes.len(),
        }),
        _ => Err(CeosError::kind_mismatch(&field.name, field.kind)),
    }
}

/// Shortest rendering of `value` that parses back to the same `f64`.
fn encode_float(field: &FieldDescriptor, value: f64) -> Result<Vec<u8>> {
    let text = float_forms(value)
        .into_iter()
        .flatten()
        .filter(|form| form.parse::<f64>().ok() == Some(value))
        .min_by_key(String::len)
        .unwrap_or_else(|| value.to_string());
    pad_right_justified(field, &text)
}

/// Candidate renderings: plain decimal, scientific, integer mantissa.
fn float_forms(value: f64) -> [Option<String>; 3] {
    let plain = value.to_string();
    let plain = if let Some(rest) = plain.strip_prefix("0.") {
        format!(".{rest}")
    } else if let Some(rest) = plain.strip_prefix("-0.") {
        format!("-.{rest}")
    } else {
        plain
    };
    let scientific = format!("{value:e}");
    let integer = integer_mantissa(&scientific);
    [Some(plain), Some(scientific), integer]
}

/// Rewrite `1.2345e14` as `12345e10`.
fn integer_mantissa(scientific: &str) -> Option<String> {
    let (mantissa, exponent) = scientific.split_once('e')?;
    let exponent: i64 = exponent.parse().ok()?;
    let (sign, digits) = match mantissa.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", mantissa),
    };
    let (int, frac) = digits.split_once('.').unwrap_or((digits, ""));
    let exponent = exponent - i64::try_from(frac.len()).ok()?;
    if exponent == 0 {
        Some(format!("{sign}{int}{frac}"))
    } else {
        Some(format!("{sign}{int}{frac}e{exponent}"))
    }
}

fn pad_left_justified(field: &FieldDescriptor, text: &str) -> Result<Vec<u8>> {
    let mut out = latin1_bytes(field, text)?;
    fit(field, &out)?;
    out.resize(field.width(), b' ');
    Ok(out)
}

/// One byte per char; chars above U+00FF have no encoding.
fn latin1_bytes(field: &FieldDescriptor, text: &str) -> Result<Vec<u8>> {
    text.chars()
        .map(|ch| {
            u8::try_from(ch).map_err(|_| CeosError::UnencodableChar {
                field: field.name.clone(),
                ch,
            })
        })
        .collect()
}

fn pad_right_justified(field: &FieldDescriptor, text: &str) -> Result<Vec<u8>> {
    let bytes = fit(field, text.as_bytes())?;
    let mut out = vec![b' '; field.width() - bytes.len()];
    out.extend_from_slice(bytes);
    Ok(out)
}

fn fit<'a>(field: &FieldDescriptor, bytes: &'a [u8]) -> Result<&'a [u8]> {
    if bytes.len() > field.width() {
        return Err(CeosError::WidthMismatch {
            field: field.name.clone(),
            width: field.width(),
            actual: bytes.len(),
        });
    }
    Ok(bytes)
}
