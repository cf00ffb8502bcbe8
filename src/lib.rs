//! # gi-marshal
//!
//! Marshals values between a dynamic host runtime and the 8-byte slots of a
//! native call described by a GObject-Introspection-style type system.
//!
//! ## Quick Start
//!
//! ```
//! use gi_marshal::{ByteOrder, Introspection, InterfaceMarshaler, MarshalResult};
//! use gi_marshal::{Marshaller, StringArena, TypeTag, Value};
//!
//! // Descriptors that are simply their tag.
//! struct Tags;
//!
//! impl Introspection for Tags {
//!     type Info = TypeTag;
//!     fn tag(&self, info: &TypeTag) -> TypeTag { *info }
//!     fn interface(&self, info: &TypeTag) -> TypeTag { *info }
//!     fn release(&self, _info: TypeTag) {}
//! }
//!
//! struct NoInterfaces;
//!
//! impl InterfaceMarshaler<Tags> for NoInterfaces {
//!     fn value_to_native(&self, _: &TypeTag, _: &Value) -> MarshalResult<u64> { Ok(0) }
//!     fn native_to_value(&self, _: &TypeTag, _: u64) -> MarshalResult<Value> { Ok(Value::NIL) }
//! }
//!
//! let marshaller = Marshaller::new(&Tags, NoInterfaces);
//! let mut arena = StringArena::new();
//! let slot = marshaller.encode_arg(&TypeTag::Int32, &Value::int(-7), &mut arena).unwrap();
//! assert_eq!(slot.read_i32(ByteOrder::NATIVE), -7);
//!
//! let back = unsafe { marshaller.decode_ret(&TypeTag::Int32, &slot) }.unwrap();
//! assert_eq!(back, Some(Value::int(-7)));
//! ```
//!
//! ## Architecture
//!
//! 1. **Introspection** - the caller's type repository reports tags and
//!    nested interface descriptors
//! 2. **Marshaller** - encodes arguments, decodes return slots and
//!    out-parameters
//! 3. **InterfaceMarshaler** - the caller's converter for compound kinds

pub mod config;
pub mod error;
pub mod ffi;
pub mod value;

pub use config::{MarshalConfig, UnknownTagPolicy};
pub use error::{Direction, MarshalError, MarshalResult};
pub use ffi::interface::InterfaceMarshaler;
pub use ffi::introspection::{Introspection, NestedInfo};
pub use ffi::marshal::{ByteOrder, Marshaller, Slot};
pub use ffi::memory::{read_c_string, StringArena};
pub use ffi::types::TypeTag;
pub use value::{ObjectHandle, Value};
