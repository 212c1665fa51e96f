//! Nilai field saat serialisasi

use super::BinarySerializable;

/// Nilai satu field milik sebuah entity
///
/// Nilai yang "absent" (text/raw/nested) diwakili `None` dan ditolak
/// dengan `InvalidInput` saat encode.
#[derive(Clone, Copy)]
pub enum FieldValue<'a> {
    U8(u8),
    I8(i8),
    U16(u16),
    I16(i16),
    U32(u32),
    I32(i32),
    U64(u64),
    I64(i64),
    F32(f32),
    F64(f64),
    Char(char),
    Text(Option<&'a str>),
    Raw(Option<&'a [u8]>),
    Nested(Option<&'a dyn BinarySerializable>),
}

impl FieldValue<'_> {
    /// Nama jenis nilai, untuk pesan error
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::U8(_) => "u8",
            FieldValue::I8(_) => "i8",
            FieldValue::U16(_) => "u16",
            FieldValue::I16(_) => "i16",
            FieldValue::U32(_) => "u32",
            FieldValue::I32(_) => "i32",
            FieldValue::U64(_) => "u64",
            FieldValue::I64(_) => "i64",
            FieldValue::F32(_) => "f32",
            FieldValue::F64(_) => "f64",
            FieldValue::Char(_) => "char",
            FieldValue::Text(_) => "text",
            FieldValue::Raw(_) => "raw",
            FieldValue::Nested(_) => "nested",
        }
    }
}

impl std::fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::U8(v) => write!(f, "U8({v})"),
            FieldValue::I8(v) => write!(f, "I8({v})"),
            FieldValue::U16(v) => write!(f, "U16({v})"),
            FieldValue::I16(v) => write!(f, "I16({v})"),
            FieldValue::U32(v) => write!(f, "U32({v})"),
            FieldValue::I32(v) => write!(f, "I32({v})"),
            FieldValue::U64(v) => write!(f, "U64({v})"),
            FieldValue::I64(v) => write!(f, "I64({v})"),
            FieldValue::F32(v) => write!(f, "F32({v})"),
            FieldValue::F64(v) => write!(f, "F64({v})"),
            FieldValue::Char(v) => write!(f, "Char({v:?})"),
            FieldValue::Text(v) => write!(f, "Text({v:?})"),
            FieldValue::Raw(v) => write!(f, "Raw({v:?})"),
            FieldValue::Nested(Some(entity)) => write!(f, "Nested({})", entity.shape().name()),
            FieldValue::Nested(None) => f.write_str("Nested(None)"),
        }
    }
}

macro_rules! impl_from_numeric {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for FieldValue<'_> {
                #[inline(always)]
                fn from(v: $ty) -> Self {
                    FieldValue::$variant(v)
                }
            }
        )*
    };
}

impl_from_numeric! {
    u8 => U8,
    i8 => I8,
    u16 => U16,
    i16 => I16,
    u32 => U32,
    i32 => I32,
    u64 => U64,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    char => Char,
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(v: &'a str) -> Self {
        FieldValue::Text(Some(v))
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(v: &'a String) -> Self {
        FieldValue::Text(Some(v.as_str()))
    }
}

impl<'a> From<Option<&'a str>> for FieldValue<'a> {
    fn from(v: Option<&'a str>) -> Self {
        FieldValue::Text(v)
    }
}

impl<'a> From<&'a [u8]> for FieldValue<'a> {
    fn from(v: &'a [u8]) -> Self {
        FieldValue::Raw(Some(v))
    }
}

impl<'a> From<Option<&'a [u8]>> for FieldValue<'a> {
    fn from(v: Option<&'a [u8]>) -> Self {
        FieldValue::Raw(v)
    }
}
