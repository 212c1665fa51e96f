//! Chainable append helpers di atas ByteBuffer

use super::endian::{self, Endian};
use super::text::{self, TextEncoding};
use crate::core::ByteBuffer;
use crate::error::Result;

macro_rules! put_numeric {
    ($($name:ident => $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("Append `", stringify!($ty), "` dengan byte order `endian`")]
            #[inline(always)]
            pub fn $name(&mut self, value: $ty, endian: Endian) -> &mut Self {
                self.append_all(&endian::encode(value, endian));
                self
            }
        )*
    };
}

impl ByteBuffer {
    put_numeric! {
        put_u8 => u8,
        put_i8 => i8,
        put_u16 => u16,
        put_i16 => i16,
        put_u32 => u32,
        put_i32 => i32,
        put_u64 => u64,
        put_i64 => i64,
        put_f32 => f32,
        put_f64 => f64,
    }

    /// Append UTF-16 code unit dalam native order
    pub fn put_char(&mut self, value: char) -> Result<&mut Self> {
        let bytes = endian::encode_char(value)?;
        self.append_all(&bytes);
        Ok(self)
    }

    /// Append text dengan encoding dan optional BOM
    pub fn put_text(&mut self, value: &str, encoding: TextEncoding, with_bom: bool) -> &mut Self {
        self.append_all(&text::encode(value, encoding, with_bom));
        self
    }

    pub fn put_utf8(&mut self, value: &str) -> &mut Self {
        self.put_text(value, TextEncoding::Utf8, false)
    }

    pub fn put_utf16(&mut self, value: &str) -> &mut Self {
        self.put_text(value, TextEncoding::Utf16, false)
    }

    pub fn put_utf32(&mut self, value: &str) -> &mut Self {
        self.put_text(value, TextEncoding::Utf32, false)
    }

    pub fn put_ascii(&mut self, value: &str) -> &mut Self {
        self.put_text(value, TextEncoding::Ascii, false)
    }
}
