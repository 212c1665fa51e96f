//! Hexadecimal text form
//!
//! Format tetap: dua digit per byte, separator hanya DI ANTARA pasangan
//! (tidak pernah di awal/akhir). Buffer kosong menghasilkan string kosong.
//! Contoh: `[0x12, 0xAB]` -> `"12_AB"`.

use crate::core::ByteBuffer;
use crate::error::{Error, Result};

/// Huruf digit hex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HexCase {
    #[default]
    Upper,
    Lower,
}

/// Konfigurasi rendering hex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexFormat {
    /// Separator antar pasangan, `None` untuk output rapat
    pub separator: Option<char>,
    pub case: HexCase,
}

impl Default for HexFormat {
    fn default() -> Self {
        Self {
            separator: Some('_'),
            case: HexCase::Upper,
        }
    }
}

impl HexFormat {
    pub const fn with_separator(separator: char) -> Self {
        Self {
            separator: Some(separator),
            case: HexCase::Upper,
        }
    }
}

/// Render `bytes` sebagai hex dengan `format`
pub fn to_hex(bytes: &[u8], format: &HexFormat) -> String {
    let digits = match format.case {
        HexCase::Upper => ::hex::encode_upper(bytes),
        HexCase::Lower => ::hex::encode(bytes),
    };

    let Some(separator) = format.separator else {
        return digits;
    };

    let mut out = String::with_capacity(digits.len() + bytes.len().saturating_sub(1) * separator.len_utf8());
    for (i, pair) in digits.as_bytes().chunks(2).enumerate() {
        if i > 0 {
            out.push(separator);
        }
        // hex crate hanya menghasilkan ASCII
        out.push(pair[0] as char);
        out.push(pair[1] as char);
    }
    out
}

/// Parse hex text kembali ke ByteBuffer
///
/// Digit huruf besar dan kecil diterima. Jika `separator` diberikan,
/// separator wajib ada tepat di antara setiap pasangan.
pub fn from_hex(text: &str, separator: Option<char>) -> Result<ByteBuffer> {
    let digits: String = match separator {
        None => text.to_owned(),
        Some(sep) => {
            let mut digits = String::with_capacity(text.len());
            for (i, pair) in text.split(sep).enumerate() {
                if pair.len() != 2 && !(i == 0 && pair.is_empty() && text.is_empty()) {
                    return Err(Error::invalid_input(
                        "text",
                        format!("malformed hex pair {pair:?} at index {i}"),
                    ));
                }
                digits.push_str(pair);
            }
            digits
        }
    };

    ::hex::decode(&digits)
        .map(ByteBuffer::from)
        .map_err(|e| Error::invalid_input("text", e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_default_format() {
        let format = HexFormat::default();
        assert_eq!(to_hex(&[0x12, 0xAB, 0x00], &format), "12_AB_00");
        assert_eq!(to_hex(&[0x7F], &format), "7F");
        assert_eq!(to_hex(&[], &format), "");
    }

    #[test]
    fn test_custom_format() {
        let lower = HexFormat {
            separator: None,
            case: HexCase::Lower,
        };
        assert_eq!(to_hex(&[0xDE, 0xAD], &lower), "dead");
        assert_eq!(to_hex(&[0xDE, 0xAD], &HexFormat::with_separator(' ')), "DE AD");
        assert_eq!(to_hex(&[0x01, 0x02], &HexFormat::with_separator('·')), "01·02");
    }

    #[test]
    fn test_parse_back() {
        assert_eq!(from_hex("12_AB_00", Some('_')).unwrap(), [0x12, 0xAB, 0x00]);
        assert_eq!(from_hex("dead", None).unwrap(), [0xDE, 0xAD]);
        assert!(from_hex("", Some('_')).unwrap().is_empty());

        let bytes = [0x00, 0x7F, 0x80, 0xFF];
        let parsed = from_hex(&to_hex(&bytes, &HexFormat::default()), Some('_')).unwrap();
        assert_eq!(parsed, bytes);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(from_hex("_12", Some('_')).unwrap_err().kind(), ErrorKind::InvalidInput);
        assert_eq!(from_hex("12_", Some('_')).unwrap_err().kind(), ErrorKind::InvalidInput);
        assert_eq!(from_hex("123", None).unwrap_err().kind(), ErrorKind::InvalidInput);
        assert_eq!(from_hex("ZZ", None).unwrap_err().kind(), ErrorKind::InvalidInput);
    }
}
