//! Type tags reported by the introspection layer.
//!
//! A [`TypeTag`] is the logical kind of a native type. Scalar tags have a
//! fixed inline width; string, array and interface tags are pointer-bearing
//! and always travel as an address.

use std::fmt;

/// Logical kind of a native type.
///
/// Numeric values of [`TypeTag::from_raw`] follow the `GITypeTag`
/// enumeration. Tags this crate has no conversion for are kept as
/// [`TypeTag::Other`] with their raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Void,
    Boolean,
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float32,
    Float64,
    Utf8,
    Filename,
    Array,
    Interface,
    Other(u32),
}

impl TypeTag {
    /// Map a raw `GITypeTag` value.
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => TypeTag::Void,
            1 => TypeTag::Boolean,
            2 => TypeTag::Int8,
            3 => TypeTag::UInt8,
            4 => TypeTag::Int16,
            5 => TypeTag::UInt16,
            6 => TypeTag::Int32,
            7 => TypeTag::UInt32,
            8 => TypeTag::Int64,
            9 => TypeTag::UInt64,
            10 => TypeTag::Float32,
            11 => TypeTag::Float64,
            // 12 is GTYPE, which has no conversion here
            13 => TypeTag::Utf8,
            14 => TypeTag::Filename,
            15 => TypeTag::Array,
            16 => TypeTag::Interface,
            other => TypeTag::Other(other),
        }
    }

    /// Inclusive integer range accepted for this tag.
    pub(crate) fn int_range(self) -> Option<(i128, i128)> {
        match self {
            TypeTag::Int8 => Some((i8::MIN as i128, i8::MAX as i128)),
            TypeTag::UInt8 => Some((0, u8::MAX as i128)),
            TypeTag::Int16 => Some((i16::MIN as i128, i16::MAX as i128)),
            TypeTag::UInt16 => Some((0, u16::MAX as i128)),
            TypeTag::Int32 => Some((i32::MIN as i128, i32::MAX as i128)),
            TypeTag::UInt32 => Some((0, u32::MAX as i128)),
            TypeTag::Int64 => Some((i64::MIN as i128, i64::MAX as i128)),
            TypeTag::UInt64 => Some((0, u64::MAX as i128)),
            _ => None,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Void => write!(f, "void"),
            TypeTag::Boolean => write!(f, "gboolean"),
            TypeTag::Int8 => write!(f, "gint8"),
            TypeTag::UInt8 => write!(f, "guint8"),
            TypeTag::Int16 => write!(f, "gint16"),
            TypeTag::UInt16 => write!(f, "guint16"),
            TypeTag::Int32 => write!(f, "gint32"),
            TypeTag::UInt32 => write!(f, "guint32"),
            TypeTag::Int64 => write!(f, "gint64"),
            TypeTag::UInt64 => write!(f, "guint64"),
            TypeTag::Float32 => write!(f, "gfloat"),
            TypeTag::Float64 => write!(f, "gdouble"),
            TypeTag::Utf8 => write!(f, "utf8"),
            TypeTag::Filename => write!(f, "filename"),
            TypeTag::Array => write!(f, "array"),
            TypeTag::Interface => write!(f, "interface"),
            TypeTag::Other(raw) => write!(f, "other({})", raw),
        }
    }
}
