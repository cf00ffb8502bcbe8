//! Checked conversions from host values to native scalars.
//!
//! One function per target kind. Each accepts only the value shapes that
//! convert without loss and reports anything else as a [`MarshalError`].

use super::super::types::TypeTag;
use crate::error::{MarshalError, MarshalResult};
use crate::value::Value;

/// Boolean as the 32-bit integer native code expects.
pub fn to_gboolean(value: &Value) -> MarshalResult<i32> {
    match value {
        Value::Bool(b) => Ok(*b as i32),
        Value::Int(n) => Ok((*n != 0) as i32),
        _ => Err(MarshalError::mismatch(TypeTag::Boolean, value.type_name())),
    }
}

/// Integer checked against the width and signedness of `tag`.
pub fn to_integer(value: &Value, tag: TypeTag) -> MarshalResult<i128> {
    let Some((min, max)) = tag.int_range() else {
        return Err(MarshalError::mismatch(tag, value.type_name()));
    };
    match value {
        Value::Int(n) if (min..=max).contains(n) => Ok(*n),
        Value::Int(n) => Err(MarshalError::overflow(tag, n)),
        _ => Err(MarshalError::mismatch(tag, value.type_name())),
    }
}

pub fn to_f32(value: &Value) -> MarshalResult<f32> {
    match value {
        Value::Float(f) => {
            if f.is_finite() && f.abs() > f32::MAX as f64 {
                Err(MarshalError::overflow(TypeTag::Float32, f))
            } else {
                Ok(*f as f32)
            }
        }
        Value::Int(n) => {
            // `as` saturates, so i128::MAX rounds up to 2^127 and casts back
            // unchanged; that bound is out of range for i128.
            let f = *n as f32;
            if f < 2f32.powi(127) && f as i128 == *n {
                Ok(f)
            } else {
                Err(MarshalError::InexactFloat {
                    tag: TypeTag::Float32,
                    value: *n,
                })
            }
        }
        _ => Err(MarshalError::mismatch(TypeTag::Float32, value.type_name())),
    }
}

pub fn to_f64(value: &Value) -> MarshalResult<f64> {
    match value {
        Value::Float(f) => Ok(*f),
        Value::Int(n) => {
            let f = *n as f64;
            if f < 2f64.powi(127) && f as i128 == *n {
                Ok(f)
            } else {
                Err(MarshalError::InexactFloat {
                    tag: TypeTag::Float64,
                    value: *n,
                })
            }
        }
        _ => Err(MarshalError::mismatch(TypeTag::Float64, value.type_name())),
    }
}

/// Native address carried by `value`.
///
/// Buffers yield the address of their first byte; `nil` is the null address.
pub fn to_address(value: &Value, tag: TypeTag) -> MarshalResult<u64> {
    match value {
        Value::Pointer(p) => Ok(*p),
        Value::Buffer(bytes) => Ok(bytes.as_ptr() as u64),
        Value::Nil => Ok(0),
        Value::Int(n) => u64::try_from(*n).map_err(|_| MarshalError::overflow(tag, n)),
        _ => Err(MarshalError::mismatch(tag, value.type_name())),
    }
}
