//! Host values into argument slots.

use super::conversions::{to_address, to_f32, to_f64, to_gboolean, to_integer};
use super::{Marshaller, Slot};
use crate::error::{Direction, MarshalError, MarshalResult};
use crate::ffi::interface::InterfaceMarshaler;
use crate::ffi::introspection::{Introspection, NestedInfo};
use crate::ffi::memory::StringArena;
use crate::ffi::types::TypeTag;
use crate::value::Value;

impl<I: Introspection, M: InterfaceMarshaler<I>> Marshaller<'_, I, M> {
    /// Encode `value` as the argument slot for a parameter of type `info`.
    ///
    /// Falsy values (nil, false, zero, the empty string, the null pointer)
    /// become a zero slot without looking at the tag. Strings are copied into
    /// `arena`, which must outlive the native call.
    pub fn encode_arg(
        &self,
        info: &I::Info,
        value: &Value,
        arena: &mut StringArena,
    ) -> MarshalResult<Slot> {
        if !value.is_truthy() {
            tracing::trace!(?value, "falsy argument, zero slot");
            return Ok(Slot::ZERO);
        }

        let tag = self.repo.tag(info);
        let order = self.config.byte_order;
        tracing::trace!(%tag, "encoding argument");

        let mut slot = Slot::ZERO;
        match tag {
            TypeTag::Boolean => slot.write_i32(order, to_gboolean(value)?),
            TypeTag::Int8 => slot.write_i8(order, to_integer(value, tag)? as i8),
            TypeTag::UInt8 => slot.write_u8(order, to_integer(value, tag)? as u8),
            TypeTag::Int16 => slot.write_i16(order, to_integer(value, tag)? as i16),
            TypeTag::UInt16 => slot.write_u16(order, to_integer(value, tag)? as u16),
            TypeTag::Int32 => slot.write_i32(order, to_integer(value, tag)? as i32),
            TypeTag::UInt32 => slot.write_u32(order, to_integer(value, tag)? as u32),
            TypeTag::Int64 => slot.write_i64(order, to_integer(value, tag)? as i64),
            TypeTag::UInt64 => slot.write_u64(order, to_integer(value, tag)? as u64),
            TypeTag::Float32 => slot.write_f32(order, to_f32(value)?),
            TypeTag::Float64 => slot.write_f64(order, to_f64(value)?),
            TypeTag::Utf8 | TypeTag::Filename => {
                let s = value
                    .as_str()
                    .ok_or_else(|| MarshalError::mismatch(tag, value.type_name()))?;
                slot = Slot::from_u64(order, arena.alloc(s)?);
            }
            TypeTag::Array => match value {
                // The buffer is passed as-is; its layout is the caller's job.
                Value::Buffer(_) | Value::Pointer(_) => {
                    slot = Slot::from_u64(order, to_address(value, tag)?);
                }
                _ => return Err(MarshalError::mismatch(tag, value.type_name())),
            },
            TypeTag::Interface => {
                let nested = NestedInfo::acquire(self.repo, info);
                let native = self.interfaces.value_to_native(&nested, value)?;
                slot = Slot::from_u64(order, native);
            }
            TypeTag::Void | TypeTag::Other(_) => self.unsupported(tag, Direction::Argument)?,
        }
        Ok(slot)
    }

    /// Encode the full argument list of one native call.
    pub fn encode_args(
        &self,
        infos: &[I::Info],
        values: &[Value],
        arena: &mut StringArena,
    ) -> MarshalResult<Vec<Slot>> {
        if infos.len() != values.len() {
            return Err(MarshalError::ArityMismatch {
                expected: infos.len(),
                got: values.len(),
            });
        }
        infos
            .iter()
            .zip(values)
            .map(|(info, value)| self.encode_arg(info, value, arena))
            .collect()
    }
}
