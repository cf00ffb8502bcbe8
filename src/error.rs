//! Error types for value marshaling.
//!
//! Every conversion returns a [`MarshalResult`]. Errors carry the type tag
//! that was being marshaled so callers can report which argument or return
//! value went wrong.

use crate::ffi::types::TypeTag;
use thiserror::Error;

/// Which way a value was travelling when marshaling failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Host value into a native argument slot
    Argument,
    /// Native return slot back into a host value
    Return,
    /// Dereferenced out-parameter back into a host value
    Param,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Argument => write!(f, "argument"),
            Direction::Return => write!(f, "return"),
            Direction::Param => write!(f, "param"),
        }
    }
}

/// Typed marshaling error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarshalError {
    /// The host value has a shape the tag cannot accept.
    #[error("cannot convert {got} to {tag}")]
    TypeMismatch { tag: TypeTag, got: String },

    /// An integer does not fit in the tag's width or signedness.
    #[error("value {value} out of range for {tag}")]
    Overflow { tag: TypeTag, value: String },

    /// An integer cannot be represented exactly as the requested float.
    #[error("integer {value} is not exactly representable as {tag}")]
    InexactFloat { tag: TypeTag, value: i128 },

    /// A string passed to native code contains a NUL byte.
    #[error("string contains interior NUL at byte {position}")]
    InteriorNul { position: usize },

    /// A native UTF-8 string was not valid UTF-8.
    #[error("invalid UTF-8 in native string at {addr:#x}")]
    InvalidUtf8 { addr: u64 },

    /// A null address reached a conversion that must dereference it.
    #[error("null pointer for {tag}")]
    NullPointer { tag: TypeTag },

    /// The tag has no conversion and the configured policy rejects it.
    #[error("unsupported type tag {tag} for {direction}")]
    UnsupportedTag { tag: TypeTag, direction: Direction },

    /// Argument list length does not match the callable's parameters.
    #[error("expected {expected} arguments, got {got}")]
    ArityMismatch { expected: usize, got: usize },

    /// Raised by an interface marshaler.
    #[error("interface marshaling failed: {message}")]
    Interface { message: String },
}

impl MarshalError {
    pub fn mismatch(tag: TypeTag, got: impl Into<String>) -> Self {
        MarshalError::TypeMismatch {
            tag,
            got: got.into(),
        }
    }

    pub fn overflow(tag: TypeTag, value: impl ToString) -> Self {
        MarshalError::Overflow {
            tag,
            value: value.to_string(),
        }
    }

    pub fn interface(message: impl Into<String>) -> Self {
        MarshalError::Interface {
            message: message.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type MarshalResult<T> = Result<T, MarshalError>;
