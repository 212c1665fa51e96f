//! Serializable Entity Contract
//!
//! Entity cukup menyediakan `shape()` dan `field_value()`. Sisanya
//! (bytes, hex, describe) diturunkan dari RecordLayout:
//!
//! ```text
//! RecordLayout ──> field_value() ──> Endian/Text codec ──> ByteBuffer
//!  (urut pos)       (per field)       (atau nested)        (satu per call)
//! ```
//!
//! Encoding all-or-nothing: jika satu field gagal, buffer yang sedang
//! dibangun dibuang dan tidak pernah terlihat oleh caller.

use std::ptr;

use super::value::FieldValue;
use crate::codec::{endian, text, to_hex, HexFormat};
use crate::core::ByteBuffer;
use crate::error::{Error, Result};
use crate::layout::{self, FieldDescriptor, FieldKind, NumericType, RecordLayout, RecordShape};

/// Entity yang bisa menghasilkan bentuk byte, hex, dan laporan layout-nya
pub trait BinarySerializable {
    /// Shape (tabel descriptor) milik entity ini
    fn shape(&self) -> &RecordShape;

    /// Nilai field saat ini untuk `field`
    ///
    /// Default: belum di-wire, selalu `NotImplemented`.
    fn field_value(&self, field: &FieldDescriptor) -> Result<FieldValue<'_>> {
        Err(Error::not_implemented(self.shape(), field))
    }

    /// Layout ter-resolve (di-cache per shape)
    fn layout(&self) -> Result<&RecordLayout> {
        self.shape().layout()
    }

    /// Encode semua field ke buffer baru
    fn to_bytes(&self) -> Result<ByteBuffer> {
        let mut buffer = ByteBuffer::new();
        encode_entity(self, &mut buffer)?;
        tracing::trace!(shape = self.shape().name(), bytes = buffer.len(), "encoded entity");
        Ok(buffer)
    }

    /// Encode dan append ke `buffer`
    ///
    /// Jika gagal, `buffer` tidak berubah sama sekali.
    fn write_to(&self, buffer: &mut ByteBuffer) -> Result<()> {
        let bytes = self.to_bytes()?;
        buffer.append_all(bytes.as_slice());
        Ok(())
    }

    /// Hex dengan format default (`_` separator, huruf besar)
    fn to_hex(&self) -> Result<String> {
        self.to_hex_with(&HexFormat::default())
    }

    fn to_hex_with(&self, format: &HexFormat) -> Result<String> {
        let bytes = self.to_bytes()?;
        Ok(to_hex(bytes.as_slice(), format))
    }

    /// Laporan layout field-by-field (tidak bergantung pada nilai field)
    fn describe(&self) -> Result<String> {
        self.layout().map(layout::describe)
    }
}

impl Error {
    /// Error untuk descriptor yang belum di-wire oleh entity
    pub fn not_implemented(shape: &RecordShape, field: &FieldDescriptor) -> Self {
        Error::NotImplemented {
            shape: shape.name().to_owned(),
            position: field.position,
            field: field.name,
        }
    }
}

/// Replay layout entity ke `out`, field demi field
fn encode_entity<E>(entity: &E, out: &mut ByteBuffer) -> Result<()>
where
    E: BinarySerializable + ?Sized,
{
    let layout = entity.layout()?;
    for field in layout {
        let value = entity.field_value(field)?;
        encode_field(field, value, out)?;
    }
    Ok(())
}

fn encode_field(field: &FieldDescriptor, value: FieldValue<'_>, out: &mut ByteBuffer) -> Result<()> {
    match field.kind {
        FieldKind::Numeric { ty, endian } => encode_numeric(field, ty, endian, value, out),
        FieldKind::Char => match value {
            FieldValue::Char(c) => {
                out.append_all(&endian::encode_char(c)?);
                Ok(())
            }
            other => Err(mismatch(field, "char", &other)),
        },
        FieldKind::Text { encoding, with_bom } => match value {
            FieldValue::Text(Some(s)) => {
                out.append_all(&text::encode(s, encoding, with_bom));
                Ok(())
            }
            FieldValue::Text(None) => Err(absent(field)),
            other => Err(mismatch(field, "text", &other)),
        },
        FieldKind::Raw { len } => match value {
            FieldValue::Raw(Some(bytes)) => {
                if let Some(expected) = len {
                    if bytes.len() != expected {
                        return Err(Error::invalid_input(
                            "value",
                            format!(
                                "field `{}` expects {} raw bytes, got {}",
                                field.name,
                                expected,
                                bytes.len()
                            ),
                        ));
                    }
                }
                out.append_all(bytes);
                Ok(())
            }
            FieldValue::Raw(None) => Err(absent(field)),
            other => Err(mismatch(field, "raw", &other)),
        },
        FieldKind::Nested(shape) => match value {
            FieldValue::Nested(Some(entity)) => {
                if !ptr::eq(entity.shape(), shape) {
                    return Err(Error::invalid_input(
                        "value",
                        format!(
                            "field `{}` expects shape `{}`, got `{}`",
                            field.name,
                            shape.name(),
                            entity.shape().name()
                        ),
                    ));
                }
                encode_entity(entity, out)
            }
            FieldValue::Nested(None) => Err(absent(field)),
            other => Err(mismatch(field, "nested", &other)),
        },
    }
}

fn encode_numeric(
    field: &FieldDescriptor,
    ty: NumericType,
    order: endian::Endian,
    value: FieldValue<'_>,
    out: &mut ByteBuffer,
) -> Result<()> {
    match (ty, value) {
        (NumericType::U8, FieldValue::U8(v)) => out.append_all(&endian::encode(v, order)),
        (NumericType::I8, FieldValue::I8(v)) => out.append_all(&endian::encode(v, order)),
        (NumericType::U16, FieldValue::U16(v)) => out.append_all(&endian::encode(v, order)),
        (NumericType::I16, FieldValue::I16(v)) => out.append_all(&endian::encode(v, order)),
        (NumericType::U32, FieldValue::U32(v)) => out.append_all(&endian::encode(v, order)),
        (NumericType::I32, FieldValue::I32(v)) => out.append_all(&endian::encode(v, order)),
        (NumericType::U64, FieldValue::U64(v)) => out.append_all(&endian::encode(v, order)),
        (NumericType::I64, FieldValue::I64(v)) => out.append_all(&endian::encode(v, order)),
        (NumericType::F32, FieldValue::F32(v)) => out.append_all(&endian::encode(v, order)),
        (NumericType::F64, FieldValue::F64(v)) => out.append_all(&endian::encode(v, order)),
        (ty, other) => return Err(mismatch(field, ty.as_str(), &other)),
    }
    Ok(())
}

fn mismatch(field: &FieldDescriptor, expected: &str, got: &FieldValue<'_>) -> Error {
    Error::invalid_input(
        "value",
        format!(
            "field `{}` expects {}, got {}",
            field.name,
            expected,
            got.type_name()
        ),
    )
}

fn absent(field: &FieldDescriptor) -> Error {
    Error::invalid_input("value", format!("field `{}` is absent", field.name))
}
