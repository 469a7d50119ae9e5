//! Integration tests for the dataset summary record.
//!
//! Records are assembled in memory the way a CEOS leader file lays them out:
//! a 12-byte binary header followed by space-padded ASCII fields inside a
//! 4096-byte physical record.

use std::io::Cursor;
use std::sync::Arc;
use std::thread;

use ceos_codec::schemas::dataset_summary;
use ceos_codec::{
    CeosError, RecordCatalog, RecordHeader, RecordReader, RecordSchema, RecordTypeCode, Value,
    encode,
};

const PHYSICAL_LEN: usize = 4096;

/// Build a blank-filled dataset summary physical record.
fn blank_record(schema: &RecordSchema, sequence: u32) -> Vec<u8> {
    let mut buf = vec![b' '; PHYSICAL_LEN];
    let header = RecordHeader {
        sequence_number: sequence,
        code: RecordTypeCode::DATASET_SUMMARY,
        length: PHYSICAL_LEN as u32,
    };
    buf[..12].copy_from_slice(&header.to_bytes());
    assert!(schema.width() <= PHYSICAL_LEN);
    buf
}

/// Write `text` right-justified into the field's byte range.
fn put(schema: &RecordSchema, buf: &mut [u8], name: &str, text: &str) {
    let range = schema.range_of(name).expect("field in schema");
    let start = range.end - text.len();
    buf[start..range.end].copy_from_slice(text.as_bytes());
}

/// Write `text` left-justified into the field's byte range.
fn put_left(schema: &RecordSchema, buf: &mut [u8], name: &str, text: &str) {
    let range = schema.range_of(name).expect("field in schema");
    buf[range.start..range.start + text.len()].copy_from_slice(text.as_bytes());
}

fn sample_record(schema: &RecordSchema) -> Vec<u8> {
    let mut buf = blank_record(schema, 2);
    put(schema, &mut buf, "DSRecordSequenceNumber", "1");
    put_left(schema, &mut buf, "SARChannelIndicator", "   1");
    put_left(schema, &mut buf, "SceneIdentifier", "ALPSRP000000000");
    put_left(schema, &mut buf, "InputSceneCenterTime", "20070101123456789");
    put_left(schema, &mut buf, "EllipsoidDesignator", "GRS80");
    put(schema, &mut buf, "EllipsoidSemiMajorAxisInKm", "6378.1370000");
    put(schema, &mut buf, "EllipsoidSemiMinorAxisInKm", "6356.7523141");
    put(schema, &mut buf, "EllipsoidJ2Parameter", "1.0826300D-03");
    put(schema, &mut buf, "SceneCenterLineNumber", "9216");
    put(schema, &mut buf, "NumberOfSARChannels", "1");
    put_left(schema, &mut buf, "SensorPlatformMissionIdentifier", "ALOS");
    put(schema, &mut buf, "RadarWavelengthInm", "0.236057010");
    put(schema, &mut buf, "SamplingRateInMHz", "32.0000000");
    put(schema, &mut buf, "NominalPRFInmHz", "2155172.414");
    put(schema, &mut buf, "AlongTrackDopplerConstantTermInHz", "-121.5");
    put_left(schema, &mut buf, "TimeDirectionIndicatorAlongPixel", "INCREASE");
    put(schema, &mut buf, "PixelSpacingInm", "4.684");
    // reserved region holding garbage is still accepted
    put_left(schema, &mut buf, "blanks4", "\x01\x02?!");
    buf
}

#[test]
fn decodes_dataset_summary() {
    let schema = dataset_summary().unwrap();
    let buf = sample_record(&schema);
    let record = schema.decode(&buf).unwrap();

    assert_eq!(record.len(), 124);
    assert_eq!(record.get("RecordSequenceNumber"), Some(&Value::Binary(vec![0, 0, 0, 2])));
    assert_eq!(record.get("RecordType"), Some(&Value::Binary(vec![10])));
    assert_eq!(record.integer("DSRecordSequenceNumber"), Some(1));
    assert_eq!(record.text("SARChannelIndicator"), Some("1"));
    assert_eq!(record.text("SceneIdentifier"), Some("ALPSRP000000000"));
    assert_eq!(record.text("EllipsoidDesignator"), Some("GRS80"));
    assert_eq!(record.float("EllipsoidSemiMajorAxisInKm"), Some(6378.137));
    assert_eq!(record.float("EllipsoidJ2Parameter"), Some(1.08263e-3));
    assert_eq!(record.integer("SceneCenterLineNumber"), Some(9216));
    assert_eq!(record.text("SensorPlatformMissionIdentifier"), Some("ALOS"));
    assert_eq!(record.float("RadarWavelengthInm"), Some(0.23605701));
    assert_eq!(record.float("AlongTrackDopplerConstantTermInHz"), Some(-121.5));
    assert_eq!(record.text("TimeDirectionIndicatorAlongPixel"), Some("INCREASE"));
    assert_eq!(
        record.get("blanks4"),
        Some(&Value::Blank(b"\x01\x02?!".to_vec()))
    );
}

#[test]
fn unset_numeric_fields_decode_to_blank() {
    let schema = dataset_summary().unwrap();
    let record = schema.decode(&sample_record(&schema)).unwrap();

    assert_eq!(record.get("OrbitNumber"), Some(&Value::Integer(None)));
    assert_eq!(record.get("EarthMassIn1024Kg"), Some(&Value::Float(None)));
    assert_eq!(record.text("ProductLevelCode"), Some(""));
    assert!(record.get("SceneCenterLatitude").is_some_and(Value::is_blank));
}

#[test]
fn field_order_starts_with_header() {
    let schema = dataset_summary().unwrap();
    let record = schema.decode(&sample_record(&schema)).unwrap();

    let names: Vec<_> = record.names().take(8).collect();
    assert_eq!(
        names,
        [
            "RecordSequenceNumber",
            "RecordSubtype1",
            "RecordType",
            "RecordSubtype2",
            "RecordSubtype3",
            "RecordLength",
            "DSRecordSequenceNumber",
            "SARChannelIndicator",
        ]
    );
    assert_eq!(record.names().last(), Some("blanks13"));
    let schema_names: Vec<_> = schema.fields().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(record.names().collect::<Vec<_>>(), schema_names);
}

#[test]
fn malformed_field_names_byte_range() {
    let schema = dataset_summary().unwrap();
    let mut buf = sample_record(&schema);
    put(&schema, &mut buf, "OrbitNumber", "12O45");

    let err = schema.decode(&buf).unwrap_err();
    let range = schema.range_of("OrbitNumber").unwrap();
    match &err {
        CeosError::MalformedNumber {
            field,
            offset,
            width,
            ..
        } => {
            assert_eq!(field, "OrbitNumber");
            assert_eq!(*offset, range.start);
            assert_eq!(*width, 8);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("OrbitNumber"));
}

#[test]
fn short_buffer_is_rejected() {
    let schema = dataset_summary().unwrap();
    let buf = sample_record(&schema);
    let err = schema.decode(&buf[..1000]).unwrap_err();
    assert!(matches!(
        err,
        CeosError::BufferTooShort {
            required: 1766,
            actual: 1000
        }
    ));
}

#[test]
fn reads_and_decodes_via_catalog() {
    let schema = dataset_summary().unwrap();
    let mut file = Vec::new();
    // file descriptor record, not in the catalog
    let fdr = RecordHeader {
        sequence_number: 1,
        code: RecordTypeCode::new(11, 192, 18, 18),
        length: 720,
    };
    file.extend_from_slice(&fdr.to_bytes());
    file.resize(720, b' ');
    file.extend(sample_record(&schema));

    let catalog = RecordCatalog::standard().unwrap();
    let records: Vec<_> = RecordReader::new(Cursor::new(file))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(records.len(), 2);
    assert!(catalog.get(records[0].header.code).is_none());

    let decoded = records[1].decode(&catalog).unwrap();
    assert_eq!(decoded.schema_name(), "dataset summary");
    assert_eq!(decoded.text("SceneIdentifier"), Some("ALPSRP000000000"));
}

#[test]
fn encode_reproduces_decoded_record() {
    let schema = dataset_summary().unwrap();
    let record = schema.decode(&sample_record(&schema)).unwrap();

    let bytes = encode(&schema, &record).unwrap();
    assert_eq!(bytes.len(), schema.width());
    assert_eq!(schema.decode(&bytes).unwrap(), record);
}

#[test]
fn shared_schema_decodes_concurrently() {
    let schema = Arc::new(dataset_summary().unwrap());
    let buf = Arc::new(sample_record(&schema));
    let expected = schema.decode(&buf).unwrap();

    let results: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let schema = Arc::clone(&schema);
                let buf = Arc::clone(&buf);
                scope.spawn(move || schema.decode(&buf).unwrap())
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    for record in results {
        assert_eq!(record, expected);
    }
}
