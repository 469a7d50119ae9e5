//! Error types for CEOS record operations.

use std::path::PathBuf;
use thiserror::Error;

use crate::catalog::RecordTypeCode;
use crate::types::FieldKind;

/// Errors that can occur when building schemas, decoding or encoding records,
/// and reading CEOS files.
#[derive(Debug, Error)]
pub enum CeosError {
    /// Buffer holds fewer bytes than the schema requires.
    #[error("buffer too short: schema requires {required} bytes, got {actual}")]
    BufferTooShort { required: usize, actual: usize },

    /// Non-blank numeric field that does not parse.
    #[error(
        "malformed {kind} in field {field} at offset {offset} (width {width}): \"{}\"",
        .raw.escape_ascii()
    )]
    MalformedNumber {
        field: String,
        kind: FieldKind,
        offset: usize,
        width: usize,
        raw: Vec<u8>,
    },

    /// Field name appears more than once in a schema.
    #[error("duplicate field name: {name}")]
    DuplicateFieldName { name: String },

    /// Field declared with a width of zero.
    #[error("field {name} has zero width")]
    ZeroWidth { name: String },

    /// Schema width does not fit in `usize`.
    #[error("schema layout overflow")]
    LayoutOverflow,

    /// Record passed to the encoder lacks a schema field.
    #[error("record has no value for field {field}")]
    MissingField { field: String },

    /// Value variant does not match the field kind.
    #[error("value for field {field} does not match declared kind {expected}")]
    KindMismatch { field: String, expected: FieldKind },

    /// Encoded value does not occupy exactly the field width.
    #[error("value for field {field} needs {actual} bytes, field width is {width}")]
    WidthMismatch {
        field: String,
        width: usize,
        actual: usize,
    },

    /// Text char with no single-byte (ISO-8859-1) encoding.
    #[error("value for field {field} holds {ch:?}, which has no single-byte encoding")]
    UnencodableChar { field: String, ch: char },

    /// No schema registered for a record type code.
    #[error("unknown record type {code}")]
    UnknownRecordType { code: RecordTypeCode },

    /// Physical record length field smaller than the record header.
    #[error("invalid record length {length} at offset {offset}")]
    InvalidRecordLength { offset: u64, length: u32 },

    /// Stream ended inside a physical record.
    #[error("truncated record at offset {offset}: expected {expected} bytes, got {actual}")]
    TruncatedRecord {
        offset: u64,
        expected: usize,
        actual: usize,
    },

    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CEOS operations.
pub type Result<T> = std::result::Result<T, CeosError>;

impl CeosError {
    /// Create a DuplicateFieldName error.
    pub fn duplicate_field(name: impl Into<String>) -> Self {
        Self::DuplicateFieldName { name: name.into() }
    }

    /// Create a ZeroWidth error.
    pub fn zero_width(name: impl Into<String>) -> Self {
        Self::ZeroWidth { name: name.into() }
    }

    /// Create a MissingField error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a KindMismatch error.
    pub fn kind_mismatch(field: impl Into<String>, expected: FieldKind) -> Self {
        Self::KindMismatch {
            field: field.into(),
            expected,
        }
    }

    /// Name of the field a decode or encode error refers to, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MalformedNumber { field, .. }
            | Self::MissingField { field }
            | Self::KindMismatch { field, .. }
            | Self::WidthMismatch { field, .. }
            | Self::UnencodableChar { field, .. } => Some(field),
            Self::DuplicateFieldName { name } | Self::ZeroWidth { name } => Some(name),
            _ => None,
        }
    }
}
