//! Read-only snapshot stream dari ByteBuffer

use std::io::{self, BufRead, Cursor, Read, Seek, SeekFrom};

/// Stream read-only, posisi awal di byte pertama
///
/// Memiliki copy sendiri dari data, jadi mutasi buffer asal
/// setelah stream dibuat tidak pernah terlihat.
#[derive(Debug, Clone)]
pub struct ByteStream {
    cursor: Cursor<Box<[u8]>>,
}

impl ByteStream {
    pub(crate) fn new(bytes: Box<[u8]>) -> Self {
        Self {
            cursor: Cursor::new(bytes),
        }
    }

    /// Total panjang snapshot
    pub fn len(&self) -> usize {
        self.cursor.get_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Posisi baca saat ini
    pub fn position(&self) -> u64 {
        self.cursor.position()
    }

    /// Sisa byte yang belum dibaca
    pub fn remaining(&self) -> usize {
        (self.len() as u64).saturating_sub(self.cursor.position()) as usize
    }
}

impl Read for ByteStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.cursor.read(buf)
    }
}

impl BufRead for ByteStream {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.cursor.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.cursor.consume(amt)
    }
}

impl Seek for ByteStream {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.cursor.seek(pos)
    }
}
