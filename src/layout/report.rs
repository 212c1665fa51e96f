//! Human-readable layout report
//!
//! Hanya diturunkan dari RecordLayout, tidak pernah dari nilai field.
//! Bukan format stabil, hanya untuk diagnostik.

use std::fmt::{self, Write};

use super::descriptor::FieldKind;
use super::resolver::RecordLayout;

const INDENT: &str = "    ";

/// Render laporan field-by-field untuk `layout`
pub fn describe(layout: &RecordLayout) -> String {
    let mut out = String::new();
    // Menulis ke String tidak pernah gagal
    let _ = write_layout(&mut out, layout, 0);
    out
}

fn write_layout(out: &mut String, layout: &RecordLayout, depth: usize) -> fmt::Result {
    let pad = INDENT.repeat(depth);

    if depth == 0 {
        let size = match layout.fixed_size() {
            Some(n) => format!("{n} bytes"),
            None => "variable size".to_owned(),
        };
        writeln!(out, "{} ({} fields, {})", layout.shape_name(), layout.len(), size)?;
        writeln!(out, "{pad}{:<6}{:<16}{:<8}options", "pos", "name", "kind")?;
    }

    for field in layout {
        let (kind, options) = kind_columns(&field.kind);
        writeln!(
            out,
            "{pad}{:<6}{:<16}{:<8}{}",
            field.position, field.name, kind, options
        )?;

        if let FieldKind::Nested(shape) = field.kind {
            if let Ok(child) = shape.layout() {
                write_layout(out, child, depth + 1)?;
            }
        }
    }
    Ok(())
}

fn kind_columns(kind: &FieldKind) -> (&'static str, String) {
    match kind {
        FieldKind::Numeric { ty, endian } => (ty.as_str(), format!("endian={}", endian.as_str())),
        FieldKind::Char => ("char", "utf-16 native".to_owned()),
        FieldKind::Text { encoding, with_bom } => {
            ("text", format!("encoding={} bom={}", encoding.as_str(), with_bom))
        }
        FieldKind::Raw { len: Some(n) } => ("raw", format!("len={n}")),
        FieldKind::Raw { len: None } => ("raw", "len=variable".to_owned()),
        FieldKind::Nested(shape) => ("nested", format!("shape={}", shape.name())),
    }
}

impl fmt::Display for RecordLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&describe(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{Endian, TextEncoding};
    use crate::layout::{resolve, FieldDescriptor, NumericType, RecordShape};

    static INNER_FIELDS: [FieldDescriptor; 1] =
        [FieldDescriptor::numeric(1, "crc", NumericType::U32, Endian::Little)];
    static INNER: RecordShape = RecordShape::new("Trailer", &INNER_FIELDS);

    #[test]
    fn test_describe_table() {
        let layout = resolve(
            "Packet",
            &[
                FieldDescriptor::text(2, "name", TextEncoding::Utf16, true),
                FieldDescriptor::numeric(1, "id", NumericType::I32, Endian::Big),
                FieldDescriptor::nested(3, "trailer", &INNER),
            ],
        )
        .unwrap();

        let report = describe(&layout);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "Packet (3 fields, variable size)");
        assert!(lines[1].starts_with("pos"));
        assert!(lines[2].starts_with("1     id") && lines[2].ends_with("endian=big"));
        assert!(lines[3].contains("encoding=utf-16le bom=true"));
        assert!(lines[4].contains("shape=Trailer"));
        assert!(lines[5].starts_with("    1     crc"));
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_describe_fixed_size() {
        let layout = resolve(
            "Fixed",
            &[
                FieldDescriptor::raw(1, "blob", Some(3)),
                FieldDescriptor::char(2, "tag"),
            ],
        )
        .unwrap();
        assert!(describe(&layout).starts_with("Fixed (2 fields, 5 bytes)"));
        assert_eq!(layout.to_string(), describe(&layout));
    }

    #[test]
    fn test_describe_overflowing_size() {
        let layout = resolve(
            "Huge",
            &[
                FieldDescriptor::raw(1, "blob", Some(usize::MAX)),
                FieldDescriptor::char(2, "tag"),
            ],
        )
        .unwrap();
        assert!(describe(&layout).starts_with("Huge (2 fields, variable size)"));
    }
}
