//! Growable Byte Buffer
//!
//! Substrate tempat semua codec menulis. Indeks selalu kontigu `0..len`.
//! Slice dan stream selalu berupa copy independen, tidak pernah berbagi
//! storage dengan buffer sumber.

use std::ops::{Bound, Range, RangeBounds};

use super::stream::ByteStream;
use crate::error::{Error, Result};

/// Owned, mutable byte sequence
///
/// Tidak ada locking internal. Jika satu instance dipakai lintas thread,
/// caller yang harus men-serialisasi operasi mutasi.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ByteBuffer {
    bytes: Vec<u8>,
}

impl ByteBuffer {
    /// Membuat buffer kosong
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Membuat buffer kosong dengan kapasitas awal
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    /// Membuat buffer dari copy `bytes`
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }

    /// Jumlah byte dalam buffer
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Cek apakah buffer kosong
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Append satu byte
    #[inline(always)]
    pub fn push(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    /// Append sequence byte ke akhir buffer
    #[inline(always)]
    pub fn append_all(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// Insert satu byte pada `index`
    ///
    /// `index == len` valid (sama dengan append).
    pub fn insert(&mut self, index: usize, byte: u8) -> Result<()> {
        self.check_insert(index)?;
        self.bytes.insert(index, byte);
        Ok(())
    }

    /// Insert sequence byte mulai dari `index`
    pub fn insert_all(&mut self, index: usize, bytes: &[u8]) -> Result<()> {
        self.check_insert(index)?;
        self.bytes.splice(index..index, bytes.iter().copied());
        Ok(())
    }

    /// Hapus byte pada `index` dan kembalikan nilainya
    pub fn remove_at(&mut self, index: usize) -> Result<u8> {
        self.check_index(index)?;
        Ok(self.bytes.remove(index))
    }

    /// Hapus kemunculan pertama `byte`
    ///
    /// Returns `true` jika ada byte yang dihapus.
    pub fn remove(&mut self, byte: u8) -> bool {
        match self.index_of(byte) {
            Some(index) => {
                self.bytes.remove(index);
                true
            }
            None => false,
        }
    }

    /// Kosongkan buffer
    #[inline(always)]
    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    /// Ambil byte pada `index`
    #[inline(always)]
    pub fn get(&self, index: usize) -> Result<u8> {
        self.check_index(index)?;
        Ok(self.bytes[index])
    }

    /// Ganti byte pada `index`
    #[inline(always)]
    pub fn set(&mut self, index: usize, byte: u8) -> Result<()> {
        self.check_index(index)?;
        self.bytes[index] = byte;
        Ok(())
    }

    pub fn contains(&self, byte: u8) -> bool {
        self.bytes.contains(&byte)
    }

    pub fn index_of(&self, byte: u8) -> Option<usize> {
        self.bytes.iter().position(|&b| b == byte)
    }

    /// Copy seluruh isi buffer ke `target` mulai dari `offset`
    pub fn copy_to(&self, target: &mut [u8], offset: usize) -> Result<()> {
        let end = offset.saturating_add(self.bytes.len());
        if end > target.len() {
            return Err(Error::out_of_range(offset..end, target.len()));
        }
        target[offset..end].copy_from_slice(&self.bytes);
        Ok(())
    }

    /// Copy independen dari sub-range
    ///
    /// Buffer kosong selalu `OutOfRange`, selain itu wajib
    /// `start <= end <= len`.
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Result<ByteBuffer> {
        let range = self.resolve_range(range)?;
        Ok(Self::from_slice(&self.bytes[range]))
    }

    /// Snapshot read-only dari isi buffer saat ini
    ///
    /// Mutasi buffer setelah ini tidak terlihat lewat stream.
    pub fn as_stream(&self) -> ByteStream {
        ByteStream::new(self.bytes.clone().into_boxed_slice())
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u8> {
        self.bytes.iter()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }

    #[inline(always)]
    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.bytes.len() {
            return Err(Error::out_of_range(index..index.saturating_add(1), self.bytes.len()));
        }
        Ok(())
    }

    #[inline(always)]
    fn check_insert(&self, index: usize) -> Result<()> {
        if index > self.bytes.len() {
            return Err(Error::out_of_range(index..index, self.bytes.len()));
        }
        Ok(())
    }

    fn resolve_range<R: RangeBounds<usize>>(&self, range: R) -> Result<Range<usize>> {
        let count = self.bytes.len();
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => count,
        };

        if count == 0 || start > end || end > count {
            return Err(Error::out_of_range(start..end, count));
        }
        Ok(start..end)
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self::from_slice(bytes)
    }
}

impl From<ByteBuffer> for Vec<u8> {
    fn from(buffer: ByteBuffer) -> Self {
        buffer.bytes
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl PartialEq<[u8]> for ByteBuffer {
    fn eq(&self, other: &[u8]) -> bool {
        self.bytes == other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for ByteBuffer {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.bytes == other
    }
}

impl Extend<u8> for ByteBuffer {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        self.bytes.extend(iter);
    }
}

impl FromIterator<u8> for ByteBuffer {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self {
            bytes: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ByteBuffer {
    type Item = u8;
    type IntoIter = std::vec::IntoIter<u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.bytes.into_iter()
    }
}

impl<'a> IntoIterator for &'a ByteBuffer {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.bytes.iter()
    }
}
