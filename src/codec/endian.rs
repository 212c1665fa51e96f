//! Endian Codec: Host-Independent Byte Order
//!
//! Nilai selalu dikonversi dulu ke representasi native mesin, lalu di-reverse
//! HANYA jika byte order yang diminta berbeda dengan native order mesin yang
//! sedang menjalankan kode. Tidak ada asumsi "Big berarti reverse".

use crate::error::{Error, Result};

/// Byte order yang ingin dihasilkan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Endian {
    /// Most significant byte first
    Big,
    /// Least significant byte first
    #[default]
    Little,
}

impl Endian {
    /// Native byte order dari mesin yang mengeksekusi kode ini
    #[inline(always)]
    pub const fn native() -> Self {
        if cfg!(target_endian = "little") {
            Endian::Little
        } else {
            Endian::Big
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Endian::Big => "big",
            Endian::Little => "little",
        }
    }
}

/// Apakah byte native perlu di-reverse untuk menghasilkan `requested`
#[inline(always)]
pub const fn needs_reverse(requested: Endian, native: Endian) -> bool {
    !matches!(
        (requested, native),
        (Endian::Big, Endian::Big) | (Endian::Little, Endian::Little)
    )
}

/// Tipe numerik fixed-width yang bisa di-encode
pub trait Primitive: Copy + sealed::Sealed {
    /// Lebar dalam bytes
    const WIDTH: usize;

    /// Array byte dengan lebar `WIDTH`
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default + Copy;

    fn to_native_bytes(self) -> Self::Bytes;
    fn from_native_bytes(bytes: Self::Bytes) -> Self;
}

mod sealed {
    pub trait Sealed {}
}

macro_rules! impl_primitive {
    ($($ty:ty => $width:expr),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Primitive for $ty {
                const WIDTH: usize = $width;
                type Bytes = [u8; $width];

                #[inline(always)]
                fn to_native_bytes(self) -> Self::Bytes {
                    self.to_ne_bytes()
                }

                #[inline(always)]
                fn from_native_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_ne_bytes(bytes)
                }
            }
        )*
    };
}

impl_primitive! {
    u8 => 1,
    i8 => 1,
    u16 => 2,
    i16 => 2,
    u32 => 4,
    i32 => 4,
    u64 => 8,
    i64 => 8,
    f32 => 4,
    f64 => 8,
}

/// Encode `value` ke byte order `endian`
#[inline(always)]
pub fn encode<T: Primitive>(value: T, endian: Endian) -> T::Bytes {
    encode_with_native(value, endian, Endian::native())
}

/// Encode dengan native order eksplisit
///
/// Dipakai untuk mensimulasikan mesin big-endian di mesin little-endian
/// (dan sebaliknya).
#[inline(always)]
pub(crate) fn encode_with_native<T: Primitive>(value: T, endian: Endian, native: Endian) -> T::Bytes {
    let mut bytes = value.to_native_bytes();
    if needs_reverse(endian, native) {
        bytes.as_mut().reverse();
    }
    bytes
}

/// Decode `T` dari awal `bytes` yang ditulis dengan byte order `endian`
///
/// Byte setelah `T::WIDTH` diabaikan.
#[inline(always)]
pub fn decode<T: Primitive>(bytes: &[u8], endian: Endian) -> Result<T> {
    if bytes.len() < T::WIDTH {
        return Err(Error::out_of_range(0..T::WIDTH, bytes.len()));
    }

    let mut raw = T::Bytes::default();
    raw.as_mut().copy_from_slice(&bytes[..T::WIDTH]);
    if needs_reverse(endian, Endian::native()) {
        raw.as_mut().reverse();
    }
    Ok(T::from_native_bytes(raw))
}

/// Encode UTF-16 code unit dalam native order mesin
///
/// Tidak menerima parameter endian. Karakter di luar Basic Multilingual
/// Plane tidak muat dalam satu code unit dan ditolak.
pub fn encode_char(value: char) -> Result<[u8; 2]> {
    let mut units = [0u16; 2];
    match value.encode_utf16(&mut units) {
        [unit] => Ok(unit.to_ne_bytes()),
        _ => Err(Error::invalid_input(
            "value",
            format!("{value:?} is outside the basic multilingual plane"),
        )),
    }
}

/// Decode UTF-16 code unit native order
pub fn decode_char(bytes: &[u8]) -> Result<char> {
    let unit: u16 = decode(bytes, Endian::native())?;
    char::from_u32(u32::from(unit))
        .ok_or_else(|| Error::invalid_input("bytes", format!("{unit:#06x} is a lone surrogate")))
}
