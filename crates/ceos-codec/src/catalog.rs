//! Record catalog.
//!
//! Maps the four type-code bytes of a record header to the schema that
//! decodes the record. A catalog is built once and then only read; callers
//! pass it to wherever records are decoded.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{CeosError, Result};
use crate::schema::RecordSchema;
use crate::schemas::dataset_summary;

/// Record type code from bytes 4-7 of a record header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordTypeCode {
    /// First record subtype code.
    pub subtype1: u8,
    /// Record type code.
    pub record_type: u8,
    /// Second record subtype code.
    pub subtype2: u8,
    /// Third record subtype code.
    pub subtype3: u8,
}

impl RecordTypeCode {
    /// Dataset summary record.
    pub const DATASET_SUMMARY: Self = Self::new(18, 10, 18, 20);

    /// Create a record type code.
    #[must_use]
    pub const fn new(subtype1: u8, record_type: u8, subtype2: u8, subtype3: u8) -> Self {
        Self {
            subtype1,
            record_type,
            subtype2,
            subtype3,
        }
    }
}

impl fmt::Display for RecordTypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.subtype1, self.record_type, self.subtype2, self.subtype3
        )
    }
}

/// Registry of record schemas indexed by record type code.
#[derive(Debug, Clone, Default)]
pub struct RecordCatalog {
    schemas: BTreeMap<RecordTypeCode, Arc<RecordSchema>>,
}

impl RecordCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with every built-in record schema registered.
    pub fn standard() -> Result<Self> {
        let mut catalog = Self::new();
        catalog.register(
            RecordTypeCode::DATASET_SUMMARY,
            Arc::new(dataset_summary()?),
        );
        Ok(catalog)
    }

    /// Register a schema for a code, returning the schema it replaces.
    pub fn register(
        &mut self,
        code: RecordTypeCode,
        schema: Arc<RecordSchema>,
    ) -> Option<Arc<RecordSchema>> {
        self.schemas.insert(code, schema)
    }

    /// Schema registered for a code.
    #[must_use]
    pub fn get(&self, code: RecordTypeCode) -> Option<&Arc<RecordSchema>> {
        self.schemas.get(&code)
    }

    /// Schema registered for a code, or [`CeosError::UnknownRecordType`].
    pub fn resolve(&self, code: RecordTypeCode) -> Result<&Arc<RecordSchema>> {
        self.get(code)
            .ok_or(CeosError::UnknownRecordType { code })
    }

    /// Registered codes in ascending order.
    pub fn codes(&self) -> impl Iterator<Item = RecordTypeCode> + '_ {
        self.schemas.keys().copied()
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Returns true if no schemas are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
