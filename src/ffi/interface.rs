//! Interface (compound type) marshaling seam.
//!
//! Structs, objects, boxed types and enums are resolved to a nested
//! descriptor and then handed to an [`InterfaceMarshaler`]. This crate only
//! does the resolution and the descriptor bookkeeping.

use super::introspection::Introspection;
use crate::error::MarshalResult;
use crate::value::Value;

/// Converts interface-kind values once their nested descriptor is known.
pub trait InterfaceMarshaler<I: Introspection> {
    /// Convert a host value into the 64-bit slot value passed to native code.
    fn value_to_native(&self, info: &I::Info, value: &Value) -> MarshalResult<u64>;

    /// Wrap the native instance at `ptr` as a host value.
    fn native_to_value(&self, info: &I::Info, ptr: u64) -> MarshalResult<Value>;
}

impl<I, M> InterfaceMarshaler<I> for &M
where
    I: Introspection,
    M: InterfaceMarshaler<I> + ?Sized,
{
    fn value_to_native(&self, info: &I::Info, value: &Value) -> MarshalResult<u64> {
        (**self).value_to_native(info, value)
    }

    fn native_to_value(&self, info: &I::Info, ptr: u64) -> MarshalResult<Value> {
        (**self).native_to_value(info, ptr)
    }
}
