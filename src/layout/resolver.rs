//! Layout Resolver
//!
//! Descriptor acak -> RecordLayout urut position. Semua konflik (position
//! duplikat, siklus nesting) dideteksi di sini, sebelum satu byte pun
//! di-encode.

use std::collections::HashSet;
use std::ptr;

use super::descriptor::{FieldDescriptor, FieldKind, RecordShape};
use crate::error::{LayoutConflict, Result};

/// Urutan encode kanonik untuk satu record shape
///
/// Hanya berisi shape, tidak ada data instance. Immutable setelah
/// di-resolve sehingga aman dibaca bersamaan oleh banyak entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLayout {
    shape: String,
    fields: Vec<FieldDescriptor>,
}

impl RecordLayout {
    pub fn shape_name(&self) -> &str {
        &self.shape
    }

    /// Descriptor urut position ascending
    #[inline(always)]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldDescriptor> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn positions(&self) -> Vec<u32> {
        self.fields.iter().map(|f| f.position).collect()
    }

    /// Cari descriptor berdasarkan position
    pub fn get(&self, position: u32) -> Option<&FieldDescriptor> {
        self.fields
            .binary_search_by_key(&position, |f| f.position)
            .ok()
            .map(|i| &self.fields[i])
    }

    /// Total ukuran encode jika semua field fixed-width
    ///
    /// Total yang melewati `usize::MAX` dianggap variable size.
    pub fn fixed_size(&self) -> Option<usize> {
        self.fields
            .iter()
            .try_fold(0usize, |total, f| total.checked_add(f.kind.fixed_width()?))
    }
}

impl<'a> IntoIterator for &'a RecordLayout {
    type Item = &'a FieldDescriptor;
    type IntoIter = std::slice::Iter<'a, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// Resolve descriptor menjadi RecordLayout
///
/// Pure: set descriptor yang sama selalu menghasilkan urutan yang sama.
/// Gap pada position diperbolehkan dan tidak menambah padding.
pub fn resolve(shape: &str, descriptors: &[FieldDescriptor]) -> Result<RecordLayout> {
    let mut fields = descriptors.to_vec();
    // Stable sort: pada duplikat, urutan deklarasi menentukan first/second
    fields.sort_by_key(|f| f.position);

    for pair in fields.windows(2) {
        if pair[0].position == pair[1].position {
            tracing::warn!(
                shape,
                position = pair[0].position,
                "duplicate field position"
            );
            return Err(LayoutConflict::DuplicatePosition {
                shape: shape.to_owned(),
                position: pair[0].position,
                first: pair[0].name,
                second: pair[1].name,
            }
            .into());
        }
    }

    for field in &fields {
        if let FieldKind::Nested(child) = field.kind {
            check_acyclic(child)?;
            // Child acyclic, aman me-resolve (dan meng-cache) layout-nya
            child.layout()?;
        }
    }

    tracing::debug!(shape, fields = fields.len(), "resolved record layout");

    Ok(RecordLayout {
        shape: shape.to_owned(),
        fields,
    })
}

/// Resolve layout milik `shape`, termasuk cek siklus lewat shape itu sendiri
pub(crate) fn resolve_shape(shape: &RecordShape) -> Result<RecordLayout> {
    check_acyclic(shape)?;
    resolve(shape.name(), shape.fields())
}

/// Tolak graph nesting yang siklik
///
/// Tidak memanggil `layout()` sama sekali, jadi aman dijalankan
/// saat cache layout sedang diinisialisasi.
pub fn check_acyclic(root: &RecordShape) -> Result<()> {
    let mut path = Vec::new();
    let mut finished = HashSet::new();
    visit(root, &mut path, &mut finished)
}

fn visit<'s>(
    shape: &'s RecordShape,
    path: &mut Vec<&'s RecordShape>,
    finished: &mut HashSet<*const RecordShape>,
) -> Result<()> {
    if let Some(start) = path.iter().position(|s| ptr::eq(*s, shape)) {
        let mut names: Vec<String> = path[start..].iter().map(|s| s.name().to_owned()).collect();
        names.push(shape.name().to_owned());
        tracing::warn!(cycle = %names.join(" -> "), "nesting cycle");
        return Err(LayoutConflict::NestingCycle { path: names }.into());
    }
    if finished.contains(&(shape as *const RecordShape)) {
        return Ok(());
    }

    path.push(shape);
    for field in shape.fields() {
        if let FieldKind::Nested(child) = field.kind {
            visit(child, path, finished)?;
        }
    }
    path.pop();
    finished.insert(shape as *const RecordShape);
    Ok(())
}
