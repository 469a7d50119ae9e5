//! Decoded field values.

use std::fmt;

use serde::{Serialize, Serializer};

/// A single decoded field value.
///
/// Numeric variants use `None` as the blank sentinel: the field held only
/// padding, which is distinct from a decoded zero.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Reserved region; raw bytes kept for diagnostics only.
    Blank(Vec<u8>),
    /// Text with padding stripped.
    Text(String),
    /// Integer, or `None` for an all-padding field.
    Integer(Option<i64>),
    /// Decimal number, or `None` for an all-padding field.
    Float(Option<f64>),
    /// Raw bytes.
    Binary(Vec<u8>),
}

impl Value {
    /// Create a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Create an integer value.
    #[must_use]
    pub fn integer(value: i64) -> Self {
        Self::Integer(Some(value))
    }

    /// Create a float value.
    #[must_use]
    pub fn float(value: f64) -> Self {
        Self::Float(Some(value))
    }

    /// Returns true for reserved regions and blank numeric fields.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(
            self,
            Self::Blank(_) | Self::Integer(None) | Self::Float(None)
        )
    }

    /// Text content, if this is a text value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Integer content, if this is a non-blank integer.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => *value,
            _ => None,
        }
    }

    /// Float content, if this is a non-blank float.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(value) => *value,
            _ => None,
        }
    }

    /// Raw bytes of a binary or reserved value.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Binary(bytes) | Self::Blank(bytes) => Some(bytes),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank(_) => write!(f, "<reserved>"),
            Self::Text(text) => write!(f, "{text}"),
            Self::Integer(Some(n)) => write!(f, "{n}"),
            Self::Float(Some(x)) => write!(f, "{x}"),
            Self::Integer(None) | Self::Float(None) => write!(f, "<blank>"),
            Self::Binary(bytes) => write!(f, "0x{}", hex::encode(bytes)),
        }
    }
}

/// Reserved regions and blank numerics serialize as `null`, binary as hex.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Blank(_) | Self::Integer(None) | Self::Float(None) => serializer.serialize_none(),
            Self::Text(text) => serializer.serialize_str(text),
            Self::Integer(Some(n)) => serializer.serialize_i64(*n),
            Self::Float(Some(x)) => serializer.serialize_f64(*x),
            Self::Binary(bytes) => serializer.serialize_str(&hex::encode(bytes)),
        }
    }
}
