//! Sequential Field Reader
//!
//! Membaca kembali output `to_bytes` field demi field, langsung dari
//! slice tanpa copy untuk data raw.

use super::endian::{self, Endian, Primitive};
use super::text::{self, TextEncoding};
use crate::error::{Error, Result};

/// Zero-copy reader di atas byte slice
pub struct FieldReader<'a> {
    buffer: &'a [u8],
    read_pos: usize,
}

impl<'a> FieldReader<'a> {
    /// Membuat reader dari buffer
    #[inline(always)]
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            read_pos: 0,
        }
    }

    /// Baca satu nilai numerik dengan byte order `endian`
    #[inline(always)]
    pub fn read<T: Primitive>(&mut self, endian: Endian) -> Result<T> {
        let bytes = self.take(T::WIDTH)?;
        endian::decode(bytes, endian)
    }

    /// Baca UTF-16 code unit native order
    pub fn read_char(&mut self) -> Result<char> {
        let bytes = self.take(2)?;
        endian::decode_char(bytes)
    }

    /// Baca `len` byte raw (zero-copy)
    #[inline(always)]
    pub fn read_raw(&mut self, len: usize) -> Result<&'a [u8]> {
        self.take(len)
    }

    /// Baca `len` byte dan decode sebagai text
    pub fn read_text(&mut self, len: usize, encoding: TextEncoding, with_bom: bool) -> Result<String> {
        let bytes = self.take(len)?;
        text::decode(bytes, encoding, with_bom)
    }

    /// Sisa byte yang belum dibaca
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.read_pos)
    }

    #[inline(always)]
    pub fn position(&self) -> usize {
        self.read_pos
    }

    #[inline(always)]
    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self.read_pos.saturating_add(len);
        if end > self.buffer.len() {
            return Err(Error::out_of_range(self.read_pos..end, self.buffer.len()));
        }
        let bytes = &self.buffer[self.read_pos..end];
        self.read_pos = end;
        Ok(bytes)
    }
}
