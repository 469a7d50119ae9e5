//! Physical record reader.
//!
//! Splits a CEOS file into physical records using the length field of each
//! record header. Records are returned whole, header included, ready to be
//! decoded with the schema the [`RecordCatalog`] resolves for their code.

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use tracing::{debug, trace};

use crate::catalog::RecordCatalog;
use crate::error::{CeosError, Result};
use crate::schemas::{RECORD_HEADER_LEN, RecordHeader};
use crate::types::DecodedRecord;

/// One physical record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalRecord {
    /// Byte offset of the record in the stream.
    pub offset: u64,
    /// Parsed record header.
    pub header: RecordHeader,
    /// Record bytes, header included.
    pub bytes: Vec<u8>,
}

impl PhysicalRecord {
    /// Decode the record with the schema registered for its type code.
    pub fn decode(&self, catalog: &RecordCatalog) -> Result<DecodedRecord> {
        decode_physical(catalog, self)
    }
}

/// Decode a physical record with the schema `catalog` holds for its code.
///
/// # Errors
///
/// Returns [`CeosError::UnknownRecordType`] for unregistered codes, or any
/// decode error for the record bytes.
pub fn decode_physical(catalog: &RecordCatalog, record: &PhysicalRecord) -> Result<DecodedRecord> {
    catalog.resolve(record.header.code)?.decode(&record.bytes)
}

/// Records read from a stream, and the error that stopped the read, if any.
#[derive(Debug)]
pub struct RecordScan {
    /// Records read before the end of the stream or the error.
    pub records: Vec<PhysicalRecord>,
    /// Error that ended the read early.
    pub error: Option<CeosError>,
}

impl RecordScan {
    /// All records, or the error if the read stopped early.
    pub fn into_result(self) -> Result<Vec<PhysicalRecord>> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.records),
        }
    }
}

/// CEOS physical record reader.
pub struct RecordReader<R: Read> {
    reader: BufReader<R>,
    offset: u64,
    done: bool,
}

impl<R: Read> RecordReader<R> {
    /// Create a new record reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            offset: 0,
            done: false,
        }
    }

    /// Read the next physical record.
    ///
    /// Returns `Ok(None)` at a clean end of stream.
    ///
    /// # Errors
    ///
    /// - [`CeosError::TruncatedRecord`] if the stream ends inside a record.
    /// - [`CeosError::InvalidRecordLength`] if a header declares a length
    ///   shorter than the header itself.
    pub fn next_record(&mut self) -> Result<Option<PhysicalRecord>> {
        let offset = self.offset;
        let mut header_bytes = [0u8; RECORD_HEADER_LEN];
        let filled = self.fill(&mut header_bytes)?;
        if filled == 0 {
            debug!(offset, "end of record stream");
            return Ok(None);
        }
        if filled < RECORD_HEADER_LEN {
            return Err(CeosError::TruncatedRecord {
                offset,
                expected: RECORD_HEADER_LEN,
                actual: filled,
            });
        }

        let header = RecordHeader::parse(&header_bytes)?;
        let length = usize::try_from(header.length).map_err(|_| CeosError::InvalidRecordLength {
            offset,
            length: header.length,
        })?;
        if length < RECORD_HEADER_LEN {
            return Err(CeosError::InvalidRecordLength {
                offset,
                length: header.length,
            });
        }

        // Grow with the data actually present rather than the declared length.
        let mut bytes = header_bytes.to_vec();
        let body = self
            .reader
            .by_ref()
            .take((length - RECORD_HEADER_LEN) as u64)
            .read_to_end(&mut bytes)?;
        if body < length - RECORD_HEADER_LEN {
            return Err(CeosError::TruncatedRecord {
                offset,
                expected: length,
                actual: RECORD_HEADER_LEN + body,
            });
        }

        trace!(
            offset,
            sequence = header.sequence_number,
            code = %header.code,
            length,
            "read physical record"
        );
        self.offset += length as u64;
        Ok(Some(PhysicalRecord {
            offset,
            header,
            bytes,
        }))
    }

    /// Read records until the end of the stream or the first error, keeping
    /// every record read before the error.
    pub fn scan(mut self) -> RecordScan {
        let mut records = Vec::new();
        loop {
            match self.next_record() {
                Ok(Some(record)) => records.push(record),
                Ok(None) => return RecordScan { records, error: None },
                Err(error) => {
                    debug!(offset = self.offset, %error, "record scan stopped");
                    return RecordScan {
                        records,
                        error: Some(error),
                    };
                }
            }
        }
    }

    /// Byte offset of the next record.
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Read until `buf` is full or the stream ends, returning bytes read.
    fn fill(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(filled)
    }
}

impl RecordReader<File> {
    /// Open a CEOS file for reading.
    ///
    /// # Arguments
    /// * `path` - Path to the CEOS file
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                CeosError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                CeosError::Io(e)
            }
        })?;
        debug!(path = %path.display(), "opened CEOS file");
        Ok(Self::new(file))
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<PhysicalRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let next = self.next_record().transpose();
        if !matches!(next, Some(Ok(_))) {
            self.done = true;
        }
        next
    }
}

/// Read every physical record from a file.
///
/// Fails if any record is unreadable; use [`scan_records`] to keep the
/// records read before the failure.
pub fn read_records(path: &Path) -> Result<Vec<PhysicalRecord>> {
    scan_records(path)?.into_result()
}

/// Read physical records from a file up to the end or the first error.
///
/// # Errors
///
/// Only a failure to open the file is returned here; read errors are carried
/// in [`RecordScan::error`].
pub fn scan_records(path: &Path) -> Result<RecordScan> {
    Ok(RecordReader::open(path)?.scan())
}
