//! Raw return slots back into host values.

use super::{Marshaller, Slot};
use crate::error::{Direction, MarshalResult};
use crate::ffi::interface::InterfaceMarshaler;
use crate::ffi::introspection::{Introspection, NestedInfo};
use crate::ffi::memory::read_c_string;
use crate::ffi::types::TypeTag;
use crate::value::Value;

impl<I: Introspection, M: InterfaceMarshaler<I>> Marshaller<'_, I, M> {
    /// Decode the raw return slot of a native call returning `info`.
    ///
    /// Returns `None` for `void`, which is distinct from `Some(Value::Nil)`
    /// (a null string or object). Arrays and unknown tags come back as the
    /// raw 64-bit slot value for the caller to interpret.
    ///
    /// # Safety
    /// For string tags a non-zero slot must hold the address of a valid
    /// NUL-terminated string. For interface tags the address must be valid
    /// for the interface marshaler.
    pub unsafe fn decode_ret(&self, info: &I::Info, slot: &Slot) -> MarshalResult<Option<Value>> {
        let order = self.config.byte_order;
        let tag = self.repo.tag(info);
        let ptr = slot.read_u64(order);
        tracing::trace!(%tag, ?slot, "decoding return value");

        let value = match tag {
            TypeTag::Void => return Ok(None),
            TypeTag::Boolean => Value::bool(slot.read_i32(order) != 0),
            TypeTag::Int8 => Value::int(slot.read_i8(order)),
            TypeTag::UInt8 => Value::int(slot.read_u8(order)),
            TypeTag::Int16 => Value::int(slot.read_i16(order)),
            TypeTag::UInt16 => Value::int(slot.read_u16(order)),
            TypeTag::Int32 => Value::int(slot.read_i32(order)),
            TypeTag::UInt32 => Value::int(slot.read_u32(order)),
            TypeTag::Int64 => Value::int(slot.read_i64(order)),
            TypeTag::UInt64 => Value::int(slot.read_u64(order)),
            TypeTag::Float32 => Value::float(slot.read_f32(order) as f64),
            TypeTag::Float64 => Value::float(slot.read_f64(order)),
            TypeTag::Utf8 | TypeTag::Filename => {
                if ptr == 0 {
                    Value::NIL
                } else {
                    // SAFETY: non-null, validity is the caller's contract.
                    Value::string(unsafe { read_c_string(ptr, tag) }?)
                }
            }
            TypeTag::Interface => {
                if ptr == 0 {
                    Value::NIL
                } else {
                    let nested = NestedInfo::acquire(self.repo, info);
                    self.interfaces.native_to_value(&nested, ptr)?
                }
            }
            TypeTag::Array => Value::int(ptr),
            TypeTag::Other(_) => {
                self.unsupported(tag, Direction::Return)?;
                Value::int(ptr)
            }
        };
        Ok(Some(value))
    }
}
