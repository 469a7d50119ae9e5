//! Field kinds and descriptors.

use std::fmt;

use thiserror::Error;

use super::Value;

/// Primitive kind of a fixed-width field, carrying its byte width.
///
/// | Kind      | Content                                  | Blank bytes     |
/// |-----------|------------------------------------------|-----------------|
/// | `Blank`   | Reserved region, never interpreted       | kept as-is      |
/// | `String`  | Space or NUL padded text                 | empty string    |
/// | `Integer` | ASCII base-10 integer                    | blank sentinel  |
/// | `Float`   | ASCII decimal, optional sign and exponent| blank sentinel  |
/// | `Binary`  | Raw bytes                                | kept as-is      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Reserved or unused region.
    Blank(usize),
    /// Fixed-width text.
    String(usize),
    /// Fixed-width ASCII integer.
    Integer(usize),
    /// Fixed-width ASCII decimal number.
    Float(usize),
    /// Raw, uninterpreted bytes.
    Binary(usize),
}

/// Non-blank numeric content that does not parse as the declared kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not a valid {kind} literal")]
pub struct NumberFormatError {
    /// Kind whose decode failed.
    pub kind: FieldKind,
}

impl FieldKind {
    /// Byte width of the field.
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            Self::Blank(width)
            | Self::String(width)
            | Self::Integer(width)
            | Self::Float(width)
            | Self::Binary(width) => width,
        }
    }

    /// Lowercase kind name without width.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blank(_) => "blank",
            Self::String(_) => "string",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Binary(_) => "binary",
        }
    }

    /// Whether the kind holds an ASCII number.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    /// Decode the bytes of one field.
    ///
    /// `bytes` must be exactly [`width`](Self::width) long; the decoder
    /// guarantees this. Only `Integer` and `Float` can fail.
    pub fn decode(self, bytes: &[u8]) -> Result<Value, NumberFormatError> {
        debug_assert_eq!(bytes.len(), self.width());
        match self {
            Self::Blank(_) => Ok(Value::Blank(bytes.to_vec())),
            Self::String(_) => Ok(Value::Text(decode_text(trim_padding(bytes)))),
            Self::Integer(_) => match numeric_content(bytes) {
                None => Ok(Value::Integer(None)),
                Some(text) => parse_integer(text)
                    .map(|n| Value::Integer(Some(n)))
                    .ok_or(NumberFormatError { kind: self }),
            },
            Self::Float(_) => match numeric_content(bytes) {
                None => Ok(Value::Float(None)),
                Some(text) => parse_float(text)
                    .map(|f| Value::Float(Some(f)))
                    .ok_or(NumberFormatError { kind: self }),
            },
            Self::Binary(_) => Ok(Value::Binary(bytes.to_vec())),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.width())
    }
}

/// A named field within a record schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    /// Field name, unique within a schema.
    pub name: String,
    /// Field kind and width.
    pub kind: FieldKind,
}

impl FieldDescriptor {
    /// Create a new field descriptor.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Byte width of the field.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.kind.width()
    }
}

impl From<(&str, FieldKind)> for FieldDescriptor {
    fn from((name, kind): (&str, FieldKind)) -> Self {
        Self::new(name, kind)
    }
}

/// Pad bytes stripped from both ends of text and numeric fields.
fn is_pad(byte: u8) -> bool {
    byte == b' ' || byte == 0
}

/// Strip leading and trailing pad bytes.
fn trim_padding(bytes: &[u8]) -> &[u8] {
    let Some(start) = bytes.iter().position(|&b| !is_pad(b)) else {
        return &[];
    };
    let end = bytes.iter().rposition(|&b| !is_pad(b)).map_or(start, |i| i + 1);
    &bytes[start..end]
}

/// One char per byte (ISO-8859-1), so distinct bytes stay distinct.
fn decode_text(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

/// Trimmed numeric text, or `None` when the field is all padding.
///
/// Content that is not UTF-8 maps to a replacement char so it fails to parse.
fn numeric_content(bytes: &[u8]) -> Option<&str> {
    let trimmed = trim_padding(bytes);
    if trimmed.is_empty() {
        return None;
    }
    Some(std::str::from_utf8(trimmed).unwrap_or("\u{fffd}"))
}

fn parse_integer(text: &str) -> Option<i64> {
    text.parse().ok()
}

/// Parse a decimal literal. FORTRAN `D` exponents are accepted; `inf`, `nan`
/// and out-of-range values are not.
fn parse_float(text: &str) -> Option<f64> {
    let valid = text
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E' | b'd' | b'D'));
    if !valid {
        return None;
    }
    let normalized = text.replace(['d', 'D'], "E");
    normalized.parse::<f64>().ok().filter(|f| f.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_and_display() {
        assert_eq!(FieldKind::Float(16).width(), 16);
        assert_eq!(FieldKind::Blank(4).to_string(), "blank(4)");
        assert!(FieldKind::Integer(8).is_numeric());
        assert!(!FieldKind::Binary(4).is_numeric());
    }

    #[test]
    fn test_decode_integer() {
        let kind = FieldKind::Integer(4);
        assert_eq!(kind.decode(b"  12"), Ok(Value::Integer(Some(12))));
        assert_eq!(kind.decode(b"12  "), Ok(Value::Integer(Some(12))));
        assert_eq!(kind.decode(b"0012"), Ok(Value::Integer(Some(12))));
        assert_eq!(kind.decode(b" -7 "), Ok(Value::Integer(Some(-7))));
        assert_eq!(kind.decode(b"0000"), Ok(Value::Integer(Some(0))));
    }

    #[test]
    fn test_decode_integer_blank() {
        let kind = FieldKind::Integer(4);
        assert_eq!(kind.decode(b"    "), Ok(Value::Integer(None)));
        assert_eq!(kind.decode(b"\0\0\0\0"), Ok(Value::Integer(None)));
        assert_eq!(kind.decode(b" \0 \0"), Ok(Value::Integer(None)));
    }

    #[test]
    fn test_decode_integer_malformed() {
        let kind = FieldKind::Integer(4);
        assert_eq!(kind.decode(b"12X4"), Err(NumberFormatError { kind }));
        assert_eq!(kind.decode(b"1 2 "), Err(NumberFormatError { kind }));
        assert_eq!(kind.decode(b"1.50"), Err(NumberFormatError { kind }));
        assert_eq!(kind.decode(&[b'1', 0xff, b' ', b' ']), Err(NumberFormatError { kind }));
    }

    #[test]
    fn test_decode_float() {
        let kind = FieldKind::Float(16);
        assert_eq!(
            kind.decode(b"     6378.137000"),
            Ok(Value::Float(Some(6378.137)))
        );
        assert_eq!(
            kind.decode(b"-1.082626000E-03"),
            Ok(Value::Float(Some(-1.082626e-3)))
        );
        assert_eq!(
            kind.decode(b"  +2.5D+02      "),
            Ok(Value::Float(Some(250.0)))
        );
        assert_eq!(kind.decode(b"              .5"), Ok(Value::Float(Some(0.5))));
        assert_eq!(kind.decode(b"                "), Ok(Value::Float(None)));
    }

    #[test]
    fn test_decode_float_rejects_non_decimal() {
        let kind = FieldKind::Float(8);
        assert!(kind.decode(b"     inf").is_err());
        assert!(kind.decode(b"     NaN").is_err());
        assert!(kind.decode(b"  1.2.3 ").is_err());
        assert!(kind.decode(b"       .").is_err());
    }

    #[test]
    fn test_decode_float_overflow() {
        let kind = FieldKind::Float(8);
        assert!(kind.decode(b"  1E999 ").is_err());
    }

    #[test]
    fn test_decode_string() {
        let kind = FieldKind::String(8);
        assert_eq!(kind.decode(b"  FOO   "), Ok(Value::Text("FOO".to_string())));
        assert_eq!(kind.decode(b"A B\0\0\0\0\0"), Ok(Value::Text("A B".to_string())));
        assert_eq!(kind.decode(b"        "), Ok(Value::Text(String::new())));
    }

    #[test]
    fn test_decode_string_non_ascii_is_lossless() {
        let kind = FieldKind::String(4);
        let value = kind.decode(&[b'A', 0xe9, 0x01, b' ']).unwrap();
        assert_eq!(value, Value::Text("A\u{e9}\u{1}".to_string()));
    }

    #[test]
    fn test_decode_string_is_one_char_per_byte() {
        let kind = FieldKind::String(2);
        let latin1 = kind.decode(&[0xe9, b' ']).unwrap();
        let utf8 = kind.decode(&[0xc3, 0xa9]).unwrap();
        assert_eq!(latin1, Value::text("\u{e9}"));
        assert_eq!(utf8, Value::text("\u{c3}\u{a9}"));
        assert_ne!(latin1, utf8);
    }

    #[test]
    fn test_decode_blank_and_binary() {
        assert_eq!(
            FieldKind::Blank(3).decode(b"x?!"),
            Ok(Value::Blank(b"x?!".to_vec()))
        );
        assert_eq!(
            FieldKind::Binary(2).decode(&[0, 0xff]),
            Ok(Value::Binary(vec![0, 0xff]))
        );
    }

    #[test]
    fn test_descriptor_from_tuple() {
        let field = FieldDescriptor::from(("A", FieldKind::Integer(4)));
        assert_eq!(field.name, "A");
        assert_eq!(field.width(), 4);
    }
}
