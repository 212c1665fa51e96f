//! Entity Layer: Serializable Record Contract
//!
//! Prinsip desain:
//! - Shape statis: Setiap tipe record menunjuk satu RecordShape
//! - Satu buffer per call: `to_bytes` tidak pernah berbagi buffer
//! - All-or-nothing: Kegagalan di tengah encode tidak pernah terekspos

mod serializable;
mod value;

pub use serializable::BinarySerializable;
pub use value::FieldValue;
