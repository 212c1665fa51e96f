//! Error types untuk seluruh crate
//!
//! Semua kegagalan dideteksi di titik pemanggilan dan langsung dikembalikan
//! ke caller. Tidak ada retry, tidak ada error yang ditelan.

use std::ops::Range;

use thiserror::Error;

/// Result alias untuk operasi binlayout
pub type Result<T> = std::result::Result<T, Error>;

/// Klasifikasi kasar dari [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    OutOfRange,
    LayoutConflict,
    NotImplemented,
}

/// Error utama binlayout
///
/// `Clone` karena hasil resolusi layout (termasuk kegagalannya) di-cache
/// per shape dan dikembalikan ke setiap caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Argumen wajib tidak ada atau tidak cocok dengan descriptor
    #[error("invalid input `{argument}`: {reason}")]
    InvalidInput {
        argument: &'static str,
        reason: String,
    },

    /// Index atau range di luar `0..count`
    #[error("range {range:?} out of bounds for {count} bytes")]
    OutOfRange { range: Range<usize>, count: usize },

    /// Konflik pada record shape, dideteksi sebelum byte apapun ditulis
    #[error(transparent)]
    LayoutConflict(#[from] LayoutConflict),

    /// Entity belum menyediakan nilai untuk descriptor ini
    #[error("field `{field}` at position {position} of `{shape}` is not implemented")]
    NotImplemented {
        shape: String,
        position: u32,
        field: &'static str,
    },
}

/// Detail konflik layout
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutConflict {
    /// Dua descriptor berbagi position yang sama
    #[error("`{shape}`: fields `{first}` and `{second}` share position {position}")]
    DuplicatePosition {
        shape: String,
        position: u32,
        first: &'static str,
        second: &'static str,
    },

    /// Shape me-nest dirinya sendiri, langsung atau transitif
    #[error("nesting cycle: {}", path.join(" -> "))]
    NestingCycle { path: Vec<String> },
}

impl Error {
    /// Klasifikasi error ini
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidInput { .. } => ErrorKind::InvalidInput,
            Error::OutOfRange { .. } => ErrorKind::OutOfRange,
            Error::LayoutConflict(_) => ErrorKind::LayoutConflict,
            Error::NotImplemented { .. } => ErrorKind::NotImplemented,
        }
    }

    pub(crate) fn invalid_input(argument: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            argument,
            reason: reason.into(),
        }
    }

    pub(crate) fn out_of_range(range: Range<usize>, count: usize) -> Self {
        Error::OutOfRange { range, count }
    }
}
