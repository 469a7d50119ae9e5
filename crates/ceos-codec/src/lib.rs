//! Declarative fixed-layout codec for CEOS SAR records.
//!
//! A record layout is described as an ordered list of named fields, each
//! with a primitive kind and a byte width. The decoder walks the layout and
//! turns a raw buffer into a named-field record, in declaration order.
//!
//! # Features
//!
//! - Five field kinds: reserved blanks, padded text, ASCII integers, ASCII
//!   decimals (including FORTRAN `D` exponents), and raw binary
//! - Blank numeric fields decode to a sentinel, distinct from zero
//! - Schema composition by concatenation, used to prepend the common CEOS
//!   record header
//! - Fail-fast decoding that names the field and byte range at fault
//! - Built-in dataset summary schema and a record catalog keyed by record
//!   type code
//!
//! # Example
//!
//! ```
//! use ceos_codec::{FieldKind, RecordSchema, Value, decode};
//!
//! let schema = RecordSchema::new(
//!     "example",
//!     [("A", FieldKind::Integer(4)), ("B", FieldKind::String(6))],
//! )
//! .unwrap();
//!
//! let record = decode(&schema, b"  12FOO   ").unwrap();
//! assert_eq!(record.get("A"), Some(&Value::Integer(Some(12))));
//! assert_eq!(record.text("B"), Some("FOO"));
//!
//! let blank = decode(&schema, b"    FOO   ").unwrap();
//! assert_eq!(blank.get("A"), Some(&Value::Integer(None)));
//! ```
//!
//! # Reading files
//!
//! ```no_run
//! use std::path::Path;
//! use ceos_codec::{RecordCatalog, RecordReader};
//!
//! let catalog = RecordCatalog::standard().unwrap();
//! for record in RecordReader::open(Path::new("LED-ALPSRP000000000-H1.1__A")).unwrap() {
//!     let record = record.unwrap();
//!     if let Ok(decoded) = record.decode(&catalog) {
//!         println!("{}: {} fields", decoded.schema_name(), decoded.len());
//!     }
//! }
//! ```

pub mod catalog;
mod decode;
mod encode;
mod error;
mod reader;
mod schema;
pub mod schemas;
mod types;

// Re-export error types
pub use error::{CeosError, Result};

// Re-export core types
pub use types::{DecodedRecord, FieldDescriptor, FieldKind, NumberFormatError, Value};

pub use catalog::{RecordCatalog, RecordTypeCode};
pub use decode::decode;
pub use encode::encode;
pub use reader::{
    PhysicalRecord, RecordReader, RecordScan, decode_physical, read_records, scan_records,
};
pub use schema::RecordSchema;
pub use schemas::RecordHeader;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
