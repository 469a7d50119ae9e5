//! CEOS record schemas.
//!
//! This module defines the record layouts of the CEOS SAR format:
//! - Record header (common 12-byte prefix of every record)
//! - Dataset summary record

pub mod dataset_summary;
pub mod header;

pub use dataset_summary::{DATASET_SUMMARY, DATASET_SUMMARY_FIELDS, dataset_summary};
pub use header::{
    RECORD_HEADER, RECORD_HEADER_FIELDS, RECORD_HEADER_LEN, RecordHeader, record_header,
};
