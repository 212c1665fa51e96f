//! Text Codec dengan optional Byte-Order-Mark
//!
//! Preamble yang dipakai:
//! ┌──────────┬───────────────┬──────────────────────────┐
//! │ Encoding │ Preamble      │ Code unit                │
//! ├──────────┼───────────────┼──────────────────────────┤
//! │ UTF-8    │ EF BB BF      │ 8-bit                    │
//! │ UTF-16   │ FF FE         │ 16-bit little-endian     │
//! │ UTF-32   │ FF FE 00 00   │ 32-bit little-endian     │
//! │ ASCII    │ (kosong)      │ 7-bit, non-ASCII -> '?'  │
//! └──────────┴───────────────┴──────────────────────────┘

use crate::error::{Error, Result};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_BOM: &[u8] = &[0xFF, 0xFE];
const UTF32_BOM: &[u8] = &[0xFF, 0xFE, 0x00, 0x00];
const ASCII_REPLACEMENT: u8 = b'?';

/// Text encoding yang didukung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextEncoding {
    Utf8,
    /// Alias "Unicode": UTF-16 little-endian
    Utf16,
    Utf32,
    Ascii,
}

impl TextEncoding {
    /// Preamble standar encoding ini (kosong untuk ASCII)
    pub const fn preamble(self) -> &'static [u8] {
        match self {
            TextEncoding::Utf8 => UTF8_BOM,
            TextEncoding::Utf16 => UTF16_BOM,
            TextEncoding::Utf32 => UTF32_BOM,
            TextEncoding::Ascii => &[],
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Utf16 => "utf-16le",
            TextEncoding::Utf32 => "utf-32le",
            TextEncoding::Ascii => "ascii",
        }
    }

    /// Jumlah byte konten untuk `value` (tanpa preamble)
    pub fn content_len(self, value: &str) -> usize {
        match self {
            TextEncoding::Utf8 => value.len(),
            TextEncoding::Utf16 => value.encode_utf16().count() * 2,
            TextEncoding::Utf32 => value.chars().count() * 4,
            TextEncoding::Ascii => value.chars().count(),
        }
    }
}

/// Encode `value` dengan `encoding`, prepend preamble jika `with_bom`
pub fn encode(value: &str, encoding: TextEncoding, with_bom: bool) -> Vec<u8> {
    let preamble = if with_bom { encoding.preamble() } else { &[] };
    let mut out = Vec::with_capacity(preamble.len() + encoding.content_len(value));
    out.extend_from_slice(preamble);
    encode_into(value, encoding, &mut out);
    out
}

/// Encode ke `out` tanpa preamble
pub fn encode_into(value: &str, encoding: TextEncoding, out: &mut Vec<u8>) {
    match encoding {
        TextEncoding::Utf8 => out.extend_from_slice(value.as_bytes()),
        TextEncoding::Utf16 => {
            for unit in value.encode_utf16() {
                out.extend_from_slice(&unit.to_le_bytes());
            }
        }
        TextEncoding::Utf32 => {
            for c in value.chars() {
                out.extend_from_slice(&u32::from(c).to_le_bytes());
            }
        }
        TextEncoding::Ascii => out.extend(value.chars().map(|c| {
            if c.is_ascii() {
                c as u8
            } else {
                ASCII_REPLACEMENT
            }
        })),
    }
}

#[inline(always)]
pub fn encode_utf8(value: &str) -> Vec<u8> {
    encode(value, TextEncoding::Utf8, false)
}

/// UTF-16 little-endian tanpa BOM
#[inline(always)]
pub fn encode_utf16(value: &str) -> Vec<u8> {
    encode(value, TextEncoding::Utf16, false)
}

#[inline(always)]
pub fn encode_utf32(value: &str) -> Vec<u8> {
    encode(value, TextEncoding::Utf32, false)
}

#[inline(always)]
pub fn encode_ascii(value: &str) -> Vec<u8> {
    encode(value, TextEncoding::Ascii, false)
}

/// Decode `bytes` dengan `encoding`
///
/// Jika `expect_bom`, preamble wajib ada di awal dan dibuang.
pub fn decode(bytes: &[u8], encoding: TextEncoding, expect_bom: bool) -> Result<String> {
    let content = if expect_bom {
        bytes.strip_prefix(encoding.preamble()).ok_or_else(|| {
            Error::invalid_input("bytes", format!("missing {} preamble", encoding.as_str()))
        })?
    } else {
        bytes
    };

    match encoding {
        TextEncoding::Utf8 => String::from_utf8(content.to_vec())
            .map_err(|e| Error::invalid_input("bytes", e.to_string())),
        TextEncoding::Utf16 => {
            if content.len() % 2 != 0 {
                return Err(Error::invalid_input("bytes", "odd length for utf-16"));
            }
            let units = content
                .chunks_exact(2)
                .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
            char::decode_utf16(units)
                .collect::<std::result::Result<String, _>>()
                .map_err(|e| Error::invalid_input("bytes", e.to_string()))
        }
        TextEncoding::Utf32 => {
            if content.len() % 4 != 0 {
                return Err(Error::invalid_input("bytes", "length not a multiple of 4 for utf-32"));
            }
            content
                .chunks_exact(4)
                .map(|quad| {
                    let scalar = u32::from_le_bytes([quad[0], quad[1], quad[2], quad[3]]);
                    char::from_u32(scalar).ok_or_else(|| {
                        Error::invalid_input("bytes", format!("{scalar:#x} is not a scalar value"))
                    })
                })
                .collect()
        }
        TextEncoding::Ascii => Ok(content
            .iter()
            .map(|&b| if b.is_ascii() { b as char } else { '?' })
            .collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_ascii_subset() {
        assert_eq!(encode_ascii("ABC"), vec![0x41, 0x42, 0x43]);
        assert_eq!(encode_utf8("ABC"), vec![0x41, 0x42, 0x43]);
    }

    #[test]
    fn test_ascii_replacement() {
        assert_eq!(encode_ascii("aé"), vec![b'a', b'?']);
        assert_eq!(decode(&[b'a', 0xE9], TextEncoding::Ascii, false).unwrap(), "a?");
    }

    #[test]
    fn test_utf8_with_bom() {
        let bytes = encode("Test", TextEncoding::Utf8, true);
        assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);
        assert_eq!(&bytes[3..], b"Test");
    }

    #[test]
    fn test_utf16_little_endian_units() {
        assert_eq!(encode_utf16("Hi"), vec![b'H', 0, b'i', 0]);
        assert_eq!(
            encode("A", TextEncoding::Utf16, true),
            vec![0xFF, 0xFE, 0x41, 0x00]
        );
        // Surrogate pair
        assert_eq!(encode_utf16("😀"), vec![0x3D, 0xD8, 0x00, 0xDE]);
    }

    #[test]
    fn test_utf32() {
        assert_eq!(encode_utf32("A"), vec![0x41, 0, 0, 0]);
        assert_eq!(
            encode("A", TextEncoding::Utf32, true),
            vec![0xFF, 0xFE, 0, 0, 0x41, 0, 0, 0]
        );
    }

    #[test]
    fn test_ascii_bom_is_noop() {
        assert_eq!(encode("AB", TextEncoding::Ascii, true), encode_ascii("AB"));
    }

    #[test]
    fn test_without_bom_has_no_preamble() {
        assert_eq!(encode("Привет", TextEncoding::Utf8, false), "Привет".as_bytes());
    }

    #[test]
    fn test_content_len_matches_encoding() {
        for encoding in [
            TextEncoding::Utf8,
            TextEncoding::Utf16,
            TextEncoding::Utf32,
            TextEncoding::Ascii,
        ] {
            let text = "héllo 😀";
            assert_eq!(encode(text, encoding, false).len(), encoding.content_len(text));
        }
    }

    #[test]
    fn test_decode_with_bom() {
        for encoding in [TextEncoding::Utf8, TextEncoding::Utf16, TextEncoding::Utf32] {
            let bytes = encode("Привет", encoding, true);
            assert_eq!(decode(&bytes, encoding, true).unwrap(), "Привет");
        }

        let err = decode(b"plain", TextEncoding::Utf8, true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!(decode(&[0xFF], TextEncoding::Utf8, false).is_err());
        assert!(decode(&[0x41], TextEncoding::Utf16, false).is_err());
        assert!(decode(&[0x00, 0xD8], TextEncoding::Utf16, false).is_err());
        assert!(decode(&[0, 0, 0x11, 0], TextEncoding::Utf32, false).is_err());
    }
}
