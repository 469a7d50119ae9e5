//! Composite record schemas.
//!
//! A [`RecordSchema`] is an ordered list of [`FieldDescriptor`]s. Field order
//! fixes byte offsets: field *i* starts at the sum of the widths of fields
//! `0..i`. Schemas are immutable once built and compose by concatenation, so
//! a shared header is prepended with [`RecordSchema::extend`].

use std::collections::HashSet;
use std::ops::Range;

use crate::decode::decode;
use crate::error::{CeosError, Result};
use crate::types::{DecodedRecord, FieldDescriptor};

/// An immutable, ordered fixed-width record layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSchema {
    name: String,
    fields: Vec<FieldDescriptor>,
    offsets: Vec<usize>,
    width: usize,
}

impl RecordSchema {
    /// Build a schema from ordered field descriptors.
    ///
    /// # Errors
    ///
    /// Returns [`CeosError::DuplicateFieldName`] if a name repeats and
    /// [`CeosError::ZeroWidth`] if a field has width zero.
    pub fn new<I>(name: impl Into<String>, fields: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<FieldDescriptor>,
    {
        let fields: Vec<FieldDescriptor> = fields.into_iter().map(Into::into).collect();

        let mut seen = HashSet::with_capacity(fields.len());
        let mut offsets = Vec::with_capacity(fields.len());
        let mut width = 0usize;
        for field in &fields {
            if !seen.insert(field.name.as_str()) {
                return Err(CeosError::duplicate_field(&field.name));
            }
            if field.width() == 0 {
                return Err(CeosError::zero_width(&field.name));
            }
            offsets.push(width);
            width = width
                .checked_add(field.width())
                .ok_or(CeosError::LayoutOverflow)?;
        }

        Ok(Self {
            name: name.into(),
            fields,
            offsets,
            width,
        })
    }

    /// Build a new schema with this schema's fields followed by `additional`.
    ///
    /// Name uniqueness is checked across the whole composed schema.
    pub fn extend<I>(&self, name: impl Into<String>, additional: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<FieldDescriptor>,
    {
        let fields = self
            .fields
            .iter()
            .cloned()
            .chain(additional.into_iter().map(Into::into));
        Self::new(name, fields)
    }

    /// Schema name used in diagnostics.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total byte width (sum of field widths).
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Field descriptors in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the schema has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.position(name).map(|idx| &self.fields[idx])
    }

    /// Byte range occupied by a field.
    #[must_use]
    pub fn range_of(&self, name: &str) -> Option<Range<usize>> {
        self.position(name).map(|idx| self.range_at(idx))
    }

    /// Fields paired with their byte ranges, in order.
    pub fn layout(&self) -> impl Iterator<Item = (&FieldDescriptor, Range<usize>)> {
        self.fields
            .iter()
            .enumerate()
            .map(|(idx, field)| (field, self.range_at(idx)))
    }

    /// Decode `buffer` with this schema. See [`decode`].
    pub fn decode(&self, buffer: &[u8]) -> Result<DecodedRecord> {
        decode(self, buffer)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    fn range_at(&self, idx: usize) -> Range<usize> {
        let start = self.offsets[idx];
        start..start + self.fields[idx].width()
    }
}
