use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use ceos_cli::output::{DecodedEntry, record_table, records_table, render_json, schema_table};
use ceos_cli::selection::select_records;
use ceos_codec::schemas::{dataset_summary, record_header};
use ceos_codec::{DecodedRecord, PhysicalRecord, RecordCatalog, RecordScan, scan_records};

use crate::cli::{DecodeArgs, OutputFormatArg, RecordsArgs, SchemaArg, SchemaArgs};

pub fn run_records(args: &RecordsArgs) -> Result<()> {
    let span = info_span!("records", file = %args.file.display());
    let _guard = span.enter();

    let catalog = RecordCatalog::standard().context("build record catalog")?;
    let scan = load_records(&args.file)?;
    info!(count = scan.records.len(), "read physical records");

    // List what was readable before reporting a damaged tail.
    println!("{}", records_table(&scan.records, &catalog));
    match scan.error {
        Some(error) => Err(error).with_context(|| read_context(&args.file)),
        None => Ok(()),
    }
}

/// Decode records, returning true if every selected record decoded.
pub fn run_decode(args: &DecodeArgs) -> Result<bool> {
    let span = info_span!("decode", file = %args.file.display());
    let _guard = span.enter();

    let catalog = RecordCatalog::standard().context("build record catalog")?;
    let RecordScan { records, error } = load_records(&args.file)?;
    let mut all_ok = true;
    if let Some(error) = error {
        all_ok = false;
        eprintln!("error: {}: {error}", read_context(&args.file));
    }

    let mut decoded: Vec<(usize, &PhysicalRecord, DecodedRecord)> = Vec::new();
    for selected in select_records(&records, &catalog, args.record)? {
        let (index, record) = (selected.index, selected.record);
        debug!(index, schema = selected.schema.name(), "decoding record");
        match selected.schema.decode(&record.bytes) {
            Ok(fields) => decoded.push((index, record, fields)),
            Err(error) => {
                all_ok = false;
                eprintln!(
                    "error: record {index} at offset {} ({}): {error}",
                    record.offset, record.header.code
                );
            }
        }
    }
    info!(decoded = decoded.len(), "decoded records");

    match args.format {
        OutputFormatArg::Json => {
            let entries: Vec<DecodedEntry<'_>> = decoded
                .iter()
                .map(|(index, record, fields)| DecodedEntry {
                    index: *index,
                    offset: record.offset,
                    code: record.header.code.to_string(),
                    schema: fields.schema_name(),
                    fields,
                })
                .collect();
            println!("{}", render_json(&entries).context("serialize records")?);
        }
        OutputFormatArg::Table => {
            for (index, record, fields) in &decoded {
                let schema = catalog.resolve(record.header.code)?;
                println!(
                    "Record {index} ({}, offset {})",
                    schema.name(),
                    record.offset
                );
                println!("{}", record_table(schema, fields));
            }
        }
    }
    Ok(all_ok)
}

pub fn run_schema(args: &SchemaArgs) -> Result<()> {
    let schema = match args.name {
        SchemaArg::Header => record_header(),
        SchemaArg::DatasetSummary => dataset_summary(),
    }
    .context("build schema")?;

    println!(
        "Schema: {} ({} fields, {} bytes)",
        schema.name(),
        schema.len(),
        schema.width()
    );
    println!("{}", schema_table(&schema));
    Ok(())
}

fn load_records(path: &Path) -> Result<RecordScan> {
    scan_records(path).with_context(|| read_context(path))
}

fn read_context(path: &Path) -> String {
    format!("read records from {}", path.display())
}
