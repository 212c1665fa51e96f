//! Layout Layer: Field Descriptor -> RecordLayout
//!
//! Prinsip desain:
//! - Eksplisit: Tabel descriptor dideklarasikan langsung, tanpa reflection
//! - Resolve sekali: Layout di-cache per shape, immutable setelahnya
//! - Fail early: Konflik terdeteksi sebelum ada byte yang ditulis

mod descriptor;
mod report;
mod resolver;

pub use descriptor::{FieldDescriptor, FieldKind, NumericType, RecordShape, ShapeBuilder};
pub use report::describe;
pub use resolver::{check_acyclic, resolve, RecordLayout};
