//! End-to-end test: record declaration -> bytes -> hex -> read back
//!
//! Usage:
//!   cargo test --test serialization_test

use std::io::Read;
use std::thread;

use binlayout::{
    from_hex, BinarySerializable, ByteBuffer, Endian, Error, ErrorKind, FieldDescriptor,
    FieldReader, FieldValue, HexCase, HexFormat, NumericType, RecordShape, Result, TextEncoding,
};

/// Header frame (fixed 6 bytes)
static HEADER_FIELDS: [FieldDescriptor; 2] = [
    FieldDescriptor::numeric(2, "version", NumericType::U16, Endian::Little),
    FieldDescriptor::numeric(1, "magic", NumericType::U32, Endian::Big),
];
static HEADER: RecordShape = RecordShape::new("FrameHeader", &HEADER_FIELDS);

#[derive(Clone)]
struct FrameHeader {
    magic: u32,
    version: u16,
}

impl BinarySerializable for FrameHeader {
    fn shape(&self) -> &RecordShape {
        &HEADER
    }

    fn field_value(&self, field: &FieldDescriptor) -> Result<FieldValue<'_>> {
        match field.name {
            "magic" => Ok(self.magic.into()),
            "version" => Ok(self.version.into()),
            _ => Err(Error::not_implemented(self.shape(), field)),
        }
    }
}

/// Sensor frame, deklarasi sengaja tidak urut
static FRAME_FIELDS: [FieldDescriptor; 6] = [
    FieldDescriptor::raw(40, "payload", None),
    FieldDescriptor::text(30, "label", TextEncoding::Utf16, true),
    FieldDescriptor::nested(0, "header", &HEADER),
    FieldDescriptor::numeric(10, "sensor_id", NumericType::I64, Endian::Big),
    FieldDescriptor::char(25, "unit"),
    FieldDescriptor::numeric(20, "reading", NumericType::F32, Endian::Little),
];
static FRAME: RecordShape = RecordShape::new("SensorFrame", &FRAME_FIELDS);

struct SensorFrame {
    header: FrameHeader,
    sensor_id: i64,
    reading: f32,
    unit: char,
    label: Option<String>,
    payload: Vec<u8>,
}

impl BinarySerializable for SensorFrame {
    fn shape(&self) -> &RecordShape {
        &FRAME
    }

    fn field_value(&self, field: &FieldDescriptor) -> Result<FieldValue<'_>> {
        match field.position {
            0 => Ok(FieldValue::Nested(Some(&self.header))),
            10 => Ok(self.sensor_id.into()),
            20 => Ok(self.reading.into()),
            25 => Ok(self.unit.into()),
            30 => Ok(self.label.as_deref().into()),
            40 => Ok(self.payload.as_slice().into()),
            _ => Err(Error::not_implemented(self.shape(), field)),
        }
    }
}

fn sample_frame() -> SensorFrame {
    SensorFrame {
        header: FrameHeader {
            magic: 0x48524D53,
            version: 2,
        },
        sensor_id: -2,
        reading: 1.5,
        unit: 'C',
        label: Some("T1".to_string()),
        payload: vec![0xDE, 0xAD, 0xBE, 0xEF],
    }
}

#[test]
fn test_output_follows_position_order() {
    let bytes = sample_frame().to_bytes().unwrap();

    let mut expected = Vec::new();
    expected.extend_from_slice(&[0x48, 0x52, 0x4D, 0x53]); // magic BE
    expected.extend_from_slice(&[0x02, 0x00]); // version LE
    expected.extend_from_slice(&[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE]); // -2 BE
    expected.extend_from_slice(&1.5f32.to_le_bytes());
    expected.extend_from_slice(&0x0043u16.to_ne_bytes()); // 'C' native
    expected.extend_from_slice(&[0xFF, 0xFE, b'T', 0x00, b'1', 0x00]); // BOM + UTF-16LE
    expected.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);

    assert_eq!(bytes.as_slice(), expected.as_slice());
}

#[test]
fn test_length_is_sum_of_fields() {
    let frame = sample_frame();
    let bytes = frame.to_bytes().unwrap();
    // header 6 + i64 8 + f32 4 + char 2 + text 6 + raw 4
    assert_eq!(bytes.len(), 6 + 8 + 4 + 2 + 6 + 4);
    assert_eq!(frame.header.to_bytes().unwrap().len(), 6);
}

#[test]
fn test_deterministic_output() {
    let a = sample_frame().to_bytes().unwrap();
    let b = sample_frame().to_bytes().unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_hex_is_reversible() {
    let frame = sample_frame();
    let hex = frame.to_hex().unwrap();
    assert!(hex.starts_with("48_52_4D_53_02_00"));
    assert!(!hex.starts_with('_') && !hex.ends_with('_'));

    let parsed = from_hex(&hex, Some('_')).unwrap();
    assert_eq!(parsed, frame.to_bytes().unwrap());

    let lower = frame
        .to_hex_with(&HexFormat {
            separator: None,
            case: HexCase::Lower,
        })
        .unwrap();
    assert!(lower.starts_with("48524d530200"));
}

#[test]
fn test_read_back_with_field_reader() {
    let bytes = sample_frame().to_bytes().unwrap();
    let mut reader = FieldReader::new(bytes.as_slice());

    assert_eq!(reader.read::<u32>(Endian::Big).unwrap(), 0x48524D53);
    assert_eq!(reader.read::<u16>(Endian::Little).unwrap(), 2);
    assert_eq!(reader.read::<i64>(Endian::Big).unwrap(), -2);
    assert_eq!(reader.read::<f32>(Endian::Little).unwrap(), 1.5);
    assert_eq!(reader.read_char().unwrap(), 'C');
    assert_eq!(
        reader.read_text(6, TextEncoding::Utf16, true).unwrap(),
        "T1"
    );
    assert_eq!(reader.read_raw(4).unwrap(), &[0xDE, 0xAD, 0xBE, 0xEF]);
    assert_eq!(reader.remaining(), 0);
}

#[test]
fn test_absent_label_is_invalid_input() {
    let mut frame = sample_frame();
    frame.label = None;

    let mut out = ByteBuffer::from_slice(b"keep");
    let err = frame.write_to(&mut out).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert_eq!(out, *b"keep");
}

#[test]
fn test_write_to_appends_on_success() {
    let frame = sample_frame();
    let mut out = ByteBuffer::from_slice(&[0x00]);
    frame.write_to(&mut out).unwrap();
    assert_eq!(out.len(), 1 + 30);
    assert_eq!(out.slice(1..).unwrap(), frame.to_bytes().unwrap());
}

#[test]
fn test_stream_snapshot_of_output() {
    let mut bytes = sample_frame().to_bytes().unwrap();
    let mut stream = bytes.as_stream();
    bytes.clear();

    let mut copy = Vec::new();
    stream.read_to_end(&mut copy).unwrap();
    assert_eq!(copy.len(), 30);
}

#[test]
fn test_describe_report() {
    let report = sample_frame().describe().unwrap();
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines[0], "SensorFrame (6 fields, variable size)");
    // Nested header muncul sebelum sensor_id dan di-indent
    assert!(lines[2].contains("header") && lines[2].contains("shape=FrameHeader"));
    assert!(lines[3].starts_with("    1     magic"));
    assert!(lines[4].starts_with("    2     version"));
    assert!(lines[5].contains("sensor_id"));
    assert!(report.contains("encoding=utf-16le bom=true"));
    assert!(report.contains("len=variable"));
}

#[test]
fn test_duplicate_position_fails_before_encoding() {
    let shape = RecordShape::builder("Broken")
        .numeric(1, "a", NumericType::U8, Endian::Big)
        .numeric(1, "b", NumericType::U8, Endian::Big)
        .build();

    struct Broken<'s>(&'s RecordShape);
    impl BinarySerializable for Broken<'_> {
        fn shape(&self) -> &RecordShape {
            self.0
        }
        fn field_value(&self, _field: &FieldDescriptor) -> Result<FieldValue<'_>> {
            panic!("field values must not be read for a conflicting layout");
        }
    }

    let entity = Broken(&shape);
    assert_eq!(entity.to_bytes().unwrap_err().kind(), ErrorKind::LayoutConflict);
    assert_eq!(entity.describe().unwrap_err().kind(), ErrorKind::LayoutConflict);
}

#[test]
fn test_layout_shared_across_threads() {
    let first = FRAME.layout().unwrap() as *const _ as usize;

    let addrs: Vec<usize> = thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                s.spawn(|| {
                    let frame = sample_frame();
                    assert_eq!(frame.to_bytes().unwrap().len(), 30);
                    frame.layout().unwrap() as *const _ as usize
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(addrs.iter().all(|&a| a == first));
}
