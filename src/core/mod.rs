//! Core module: Byte Buffer substrate
//!
//! Prinsip desain:
//! - Owned: Setiap buffer dimiliki satu pemilik, tidak ada shared storage
//! - Copy-on-slice: Slice dan stream selalu copy independen
//! - Bounds-checked: Semua akses index mengembalikan `Result`, tidak panic

mod byte_buffer;
mod stream;

pub use byte_buffer::ByteBuffer;
pub use stream::ByteStream;
