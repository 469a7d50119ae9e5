//! Table and JSON rendering for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use ceos_codec::{DecodedRecord, PhysicalRecord, RecordCatalog, RecordSchema, Value};

/// One decoded record as written by `ceos decode --format json`.
#[derive(Debug, Serialize)]
pub struct DecodedEntry<'a> {
    /// 0-based record index in the file.
    pub index: usize,
    /// Byte offset of the record in the file.
    pub offset: u64,
    /// Record type code, e.g. `18-10-18-20`.
    pub code: String,
    /// Schema name.
    pub schema: &'a str,
    /// Decoded fields in schema order.
    pub fields: &'a DecodedRecord,
}

/// Render decoded entries as a pretty-printed JSON array.
pub fn render_json(entries: &[DecodedEntry<'_>]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(entries)
}

/// Table listing physical records and the schema each one resolves to.
pub fn records_table(records: &[PhysicalRecord], catalog: &RecordCatalog) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Offset"),
        header_cell("Sequence"),
        header_cell("Type"),
        header_cell("Length"),
        header_cell("Schema"),
    ]);
    apply_table_style(&mut table);
    for column in [0, 1, 2, 4] {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for (index, record) in records.iter().enumerate() {
        let schema = match catalog.get(record.header.code) {
            Some(schema) => Cell::new(schema.name()).fg(Color::Green),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(index),
            Cell::new(record.offset),
            Cell::new(record.header.sequence_number),
            Cell::new(record.header.code),
            Cell::new(record.header.length),
            schema,
        ]);
    }
    table
}

/// Table of one decoded record: field, byte range, kind and value.
pub fn record_table(schema: &RecordSchema, record: &DecodedRecord) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Bytes"),
        header_cell("Kind"),
        header_cell("Value"),
    ]);
    apply_table_style(&mut table);
    for ((field, range), (_, value)) in schema.layout().zip(record.iter()) {
        table.add_row(vec![
            Cell::new(&field.name),
            Cell::new(format!("{}..{}", range.start, range.end)),
            dim_cell(field.kind),
            value_cell(value),
        ]);
    }
    table
}

/// Table describing the layout of a schema.
pub fn schema_table(schema: &RecordSchema) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Offset"),
        header_cell("Width"),
        header_cell("Kind"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (field, range) in schema.layout() {
        table.add_row(vec![
            Cell::new(&field.name),
            Cell::new(range.start),
            Cell::new(field.width()),
            Cell::new(field.kind.name()),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn value_cell(value: &Value) -> Cell {
    if value.is_blank() {
        dim_cell(value)
    } else {
        Cell::new(value)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
