//! Dereferenced out-parameters back into host values.

use super::conversions::to_address;
use super::Marshaller;
use crate::error::{Direction, MarshalResult};
use crate::ffi::interface::InterfaceMarshaler;
use crate::ffi::introspection::{Introspection, NestedInfo};
use crate::ffi::memory::read_c_string;
use crate::ffi::types::TypeTag;
use crate::value::Value;

impl<I: Introspection, M: InterfaceMarshaler<I>> Marshaller<'_, I, M> {
    /// Decode an out-parameter that the invoker has already dereferenced.
    ///
    /// Unlike [`Marshaller::decode_ret`] there is no null shortcut: a zero
    /// address for a string is reported as `MarshalError::NullPointer` and a
    /// zero address for an interface is handed to the interface marshaler.
    /// Scalars are returned unchanged.
    ///
    /// # Safety
    /// For string and interface tags, `raw` must carry an address that is
    /// valid for reading the string or for the interface marshaler.
    pub unsafe fn decode_param(&self, info: &I::Info, raw: Value) -> MarshalResult<Value> {
        let tag = self.repo.tag(info);
        tracing::trace!(%tag, ?raw, "decoding out-parameter");

        match tag {
            TypeTag::Boolean => Ok(Value::bool(raw.is_truthy())),
            TypeTag::Utf8 | TypeTag::Filename => {
                let addr = to_address(&raw, tag)?;
                // SAFETY: validity is the caller's contract; null is refused.
                let s = unsafe { read_c_string(addr, tag) }?;
                Ok(Value::string(s))
            }
            TypeTag::Interface => {
                let addr = to_address(&raw, tag)?;
                let nested = NestedInfo::acquire(self.repo, info);
                let value = self.interfaces.native_to_value(&nested, addr)?;
                Ok(value)
            }
            TypeTag::Other(_) => {
                self.unsupported(tag, Direction::Param)?;
                Ok(raw)
            }
            _ => Ok(raw),
        }
    }
}
