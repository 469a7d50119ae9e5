//! Core types for fixed-layout records.
//!
//! This module provides the field kinds and descriptors a schema is built
//! from, and the values and records a decode produces.

mod kind;
mod record;
mod value;

pub use kind::{FieldDescriptor, FieldKind, NumberFormatError};
pub use record::DecodedRecord;
pub use value::Value;
