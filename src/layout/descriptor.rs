//! Field Descriptor dan Record Shape
//!
//! Tabel descriptor dibangun eksplisit (statis atau lewat builder), bukan
//! hasil discovery. Position hanya kunci urutan, bukan byte offset:
//!
//! ```text
//! Descriptors (acak)          RecordLayout (urut position)
//! ┌──────────────────┐        ┌──────────────────────────┐
//! │ pos 7: name      │        │ pos 1: id     i32 BE     │
//! │ pos 1: id        │  ───>  │ pos 3: flags  u16 LE     │
//! │ pos 3: flags     │        │ pos 7: name   utf-8      │
//! └──────────────────┘        └──────────────────────────┘
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::OnceLock;

use super::resolver;
use super::RecordLayout;
use crate::codec::{Endian, TextEncoding};
use crate::error::Result;

/// Tipe numerik fixed-width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericType {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    F32,
    F64,
}

impl NumericType {
    /// Lebar dalam bytes
    pub const fn width(self) -> usize {
        match self {
            NumericType::U8 | NumericType::I8 => 1,
            NumericType::U16 | NumericType::I16 => 2,
            NumericType::U32 | NumericType::I32 | NumericType::F32 => 4,
            NumericType::U64 | NumericType::I64 | NumericType::F64 => 8,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            NumericType::U8 => "u8",
            NumericType::I8 => "i8",
            NumericType::U16 => "u16",
            NumericType::I16 => "i16",
            NumericType::U32 => "u32",
            NumericType::I32 => "i32",
            NumericType::U64 => "u64",
            NumericType::I64 => "i64",
            NumericType::F32 => "f32",
            NumericType::F64 => "f64",
        }
    }
}

/// Jenis nilai dan opsi encoding sebuah field
#[derive(Clone, Copy)]
pub enum FieldKind {
    Numeric { ty: NumericType, endian: Endian },
    /// UTF-16 code unit, selalu native order
    Char,
    Text { encoding: TextEncoding, with_bom: bool },
    /// Byte raw, `len` tetap jika `Some`
    Raw { len: Option<usize> },
    /// Entity lain yang serializable
    Nested(&'static RecordShape),
}

impl FieldKind {
    /// Lebar encoding jika tetap (text dan raw tanpa `len` tidak tetap)
    pub fn fixed_width(&self) -> Option<usize> {
        match self {
            FieldKind::Numeric { ty, .. } => Some(ty.width()),
            FieldKind::Char => Some(2),
            FieldKind::Text { .. } => None,
            FieldKind::Raw { len } => *len,
            FieldKind::Nested(shape) => shape.layout().ok()?.fixed_size(),
        }
    }
}

impl PartialEq for FieldKind {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                FieldKind::Numeric { ty: a, endian: ea },
                FieldKind::Numeric { ty: b, endian: eb },
            ) => a == b && ea == eb,
            (FieldKind::Char, FieldKind::Char) => true,
            (
                FieldKind::Text { encoding: a, with_bom: ba },
                FieldKind::Text { encoding: b, with_bom: bb },
            ) => a == b && ba == bb,
            (FieldKind::Raw { len: a }, FieldKind::Raw { len: b }) => a == b,
            // Identitas shape, bukan isi
            (FieldKind::Nested(a), FieldKind::Nested(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }
}

impl Eq for FieldKind {}

impl fmt::Debug for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Numeric { ty, endian } => write!(f, "Numeric({}, {})", ty.as_str(), endian.as_str()),
            FieldKind::Char => f.write_str("Char"),
            FieldKind::Text { encoding, with_bom } => {
                write!(f, "Text({}, bom={})", encoding.as_str(), with_bom)
            }
            FieldKind::Raw { len } => write!(f, "Raw({len:?})"),
            // Hanya nama, shape bisa saja siklik
            FieldKind::Nested(shape) => write!(f, "Nested({})", shape.name()),
        }
    }
}

/// Metadata serialisasi satu field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub position: u32,
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub const fn new(position: u32, name: &'static str, kind: FieldKind) -> Self {
        Self { position, name, kind }
    }

    pub const fn numeric(position: u32, name: &'static str, ty: NumericType, endian: Endian) -> Self {
        Self::new(position, name, FieldKind::Numeric { ty, endian })
    }

    pub const fn char(position: u32, name: &'static str) -> Self {
        Self::new(position, name, FieldKind::Char)
    }

    pub const fn text(position: u32, name: &'static str, encoding: TextEncoding, with_bom: bool) -> Self {
        Self::new(position, name, FieldKind::Text { encoding, with_bom })
    }

    pub const fn raw(position: u32, name: &'static str, len: Option<usize>) -> Self {
        Self::new(position, name, FieldKind::Raw { len })
    }

    pub const fn nested(position: u32, name: &'static str, shape: &'static RecordShape) -> Self {
        Self::new(position, name, FieldKind::Nested(shape))
    }
}

/// Deklarasi shape sebuah record: nama + tabel descriptor
///
/// Layout di-resolve sekali saat pertama diminta lalu di-cache di dalam
/// shape itu sendiri. Tidak ada cache global.
pub struct RecordShape {
    name: Cow<'static, str>,
    fields: Cow<'static, [FieldDescriptor]>,
    layout: OnceLock<Result<RecordLayout>>,
}

impl RecordShape {
    /// Shape statis, bisa dipakai di `static`
    pub const fn new(name: &'static str, fields: &'static [FieldDescriptor]) -> Self {
        Self {
            name: Cow::Borrowed(name),
            fields: Cow::Borrowed(fields),
            layout: OnceLock::new(),
        }
    }

    /// Builder untuk shape yang dibangun saat runtime
    pub fn builder(name: impl Into<Cow<'static, str>>) -> ShapeBuilder {
        ShapeBuilder {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Descriptor dalam urutan deklarasi
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Layout ter-resolve untuk shape ini (di-cache)
    ///
    /// Konflik position dan siklus nesting dikembalikan sebagai
    /// `LayoutConflict`, setiap kali dipanggil.
    pub fn layout(&self) -> Result<&RecordLayout> {
        self.layout
            .get_or_init(|| resolver::resolve_shape(self))
            .as_ref()
            .map_err(Clone::clone)
    }
}

impl fmt::Debug for RecordShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordShape")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .finish()
    }
}

/// Builder untuk [`RecordShape`]
#[derive(Debug)]
pub struct ShapeBuilder {
    name: Cow<'static, str>,
    fields: Vec<FieldDescriptor>,
}

impl ShapeBuilder {
    pub fn field(mut self, descriptor: FieldDescriptor) -> Self {
        self.fields.push(descriptor);
        self
    }

    pub fn numeric(self, position: u32, name: &'static str, ty: NumericType, endian: Endian) -> Self {
        self.field(FieldDescriptor::numeric(position, name, ty, endian))
    }

    pub fn char(self, position: u32, name: &'static str) -> Self {
        self.field(FieldDescriptor::char(position, name))
    }

    pub fn text(self, position: u32, name: &'static str, encoding: TextEncoding, with_bom: bool) -> Self {
        self.field(FieldDescriptor::text(position, name, encoding, with_bom))
    }

    pub fn raw(self, position: u32, name: &'static str, len: Option<usize>) -> Self {
        self.field(FieldDescriptor::raw(position, name, len))
    }

    pub fn nested(self, position: u32, name: &'static str, shape: &'static RecordShape) -> Self {
        self.field(FieldDescriptor::nested(position, name, shape))
    }

    pub fn build(self) -> RecordShape {
        RecordShape {
            name: self.name,
            fields: Cow::Owned(self.fields),
            layout: OnceLock::new(),
        }
    }
}
