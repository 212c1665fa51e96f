//! binlayout - Declarative Binary Layout Serialization
//!
//! Arsitektur:
//! - Core: ByteBuffer owned dengan slice/stream yang selalu di-copy
//! - Codec: Endian codec host-independent, text codec dengan optional BOM
//! - Layout: Field descriptor -> RecordLayout urut position, cek konflik
//! - Entity: Kontrak `BinarySerializable` (bytes, hex, describe)
//!
//! Alur data satu arah:
//! `RecordLayout -> codec -> ByteBuffer -> bytes | hex | stream`
//!
//! ```
//! use binlayout::{
//!     BinarySerializable, Endian, Error, FieldDescriptor, FieldValue, NumericType,
//!     RecordShape, Result, TextEncoding,
//! };
//!
//! static PACKET_FIELDS: [FieldDescriptor; 2] = [
//!     FieldDescriptor::text(2, "name", TextEncoding::Ascii, false),
//!     FieldDescriptor::numeric(1, "id", NumericType::U16, Endian::Big),
//! ];
//! static PACKET: RecordShape = RecordShape::new("Packet", &PACKET_FIELDS);
//!
//! struct Packet {
//!     id: u16,
//!     name: String,
//! }
//!
//! impl BinarySerializable for Packet {
//!     fn shape(&self) -> &RecordShape {
//!         &PACKET
//!     }
//!
//!     fn field_value(&self, field: &FieldDescriptor) -> Result<FieldValue<'_>> {
//!         match field.position {
//!             1 => Ok(self.id.into()),
//!             2 => Ok((&self.name).into()),
//!             _ => Err(Error::not_implemented(self.shape(), field)),
//!         }
//!     }
//! }
//!
//! let packet = Packet { id: 0x0102, name: "OK".into() };
//! assert_eq!(packet.to_hex().unwrap(), "01_02_4F_4B");
//! ```

pub mod codec;
pub mod core;
pub mod entity;
pub mod error;
pub mod layout;

pub use codec::{from_hex, to_hex, Endian, FieldReader, HexCase, HexFormat, TextEncoding};
pub use crate::core::{ByteBuffer, ByteStream};
pub use entity::{BinarySerializable, FieldValue};
pub use error::{Error, ErrorKind, LayoutConflict, Result};
pub use layout::{FieldDescriptor, FieldKind, NumericType, RecordLayout, RecordShape};
