//! Codec Layer: Primitive, Text dan Hex Encoding
//!
//! Prinsip desain:
//! - Host-independent: Byte order dihitung terhadap native order saat encode
//! - Deterministik: Input sama selalu menghasilkan byte yang sama
//! - Pure: Tidak ada state, hanya fungsi input -> bytes

mod append;
pub mod endian;
pub mod hex;
mod reader;
pub mod text;

pub use endian::{needs_reverse, Endian, Primitive};
pub use self::hex::{from_hex, to_hex, HexCase, HexFormat};
pub use reader::FieldReader;
pub use text::TextEncoding;
