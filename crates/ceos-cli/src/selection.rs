//! Choosing which physical records a command decodes.

use std::sync::Arc;

use anyhow::{Result, anyhow};
use tracing::warn;

use ceos_codec::{PhysicalRecord, RecordCatalog, RecordSchema};

/// A record picked for decoding, with the schema that decodes it.
#[derive(Debug)]
pub struct Selected<'a> {
    /// 0-based record index in the file.
    pub index: usize,
    pub record: &'a PhysicalRecord,
    pub schema: &'a Arc<RecordSchema>,
}

/// Pick the records to decode.
///
/// With `wanted` set, exactly that record is selected, and an index past the
/// end or a type without a schema is an error. Otherwise every record whose
/// type is in the catalog is selected and the rest are skipped with a warning.
pub fn select_records<'a>(
    records: &'a [PhysicalRecord],
    catalog: &'a RecordCatalog,
    wanted: Option<usize>,
) -> Result<Vec<Selected<'a>>> {
    if let Some(index) = wanted {
        let record = records.get(index).ok_or_else(|| {
            anyhow!(
                "record {index} out of range: file has {} records",
                records.len()
            )
        })?;
        let code = record.header.code;
        let schema = catalog.get(code).ok_or_else(|| {
            anyhow!(
                "record {index} at offset {} has type {code}, which has no schema",
                record.offset
            )
        })?;
        return Ok(vec![Selected {
            index,
            record,
            schema,
        }]);
    }

    let mut selected = Vec::new();
    for (index, record) in records.iter().enumerate() {
        let code = record.header.code;
        match catalog.get(code) {
            Some(schema) => selected.push(Selected {
                index,
                record,
                schema,
            }),
            None => warn!(index, offset = record.offset, %code, "no schema for record type, skipping"),
        }
    }
    Ok(selected)
}
