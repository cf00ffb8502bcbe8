//! Host runtime values.
//!
//! [`Value`] is the closed set of shapes the marshaling layer accepts from,
//! and hands back to, the host runtime. `Nil` is the absence sentinel.

use std::fmt;
use std::rc::Rc;

/// Handle to a native object produced by an interface marshaler.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectHandle {
    /// Address of the native instance
    pub ptr: u64,
    /// Name of the interface type (e.g. `GtkWindow`)
    pub type_name: Rc<str>,
}

impl ObjectHandle {
    pub fn new(ptr: u64, type_name: impl Into<Rc<str>>) -> Self {
        ObjectHandle {
            ptr,
            type_name: type_name.into(),
        }
    }
}

/// A dynamically typed host value.
#[derive(Clone, PartialEq)]
pub enum Value {
    Nil,
    Bool(bool),
    /// Wide enough for any signed or unsigned 64-bit input.
    Int(i128),
    Float(f64),
    String(Rc<str>),
    /// A native buffer the host has already laid out.
    Buffer(Rc<[u8]>),
    /// A raw native address.
    Pointer(u64),
    Object(ObjectHandle),
}

impl Value {
    pub const NIL: Value = Value::Nil;

    pub fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    pub fn int(n: impl Into<i128>) -> Self {
        Value::Int(n.into())
    }

    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    pub fn string(s: impl Into<Rc<str>>) -> Self {
        Value::String(s.into())
    }

    pub fn buffer(bytes: impl Into<Rc<[u8]>>) -> Self {
        Value::Buffer(bytes.into())
    }

    pub fn pointer(addr: u64) -> Self {
        Value::Pointer(addr)
    }

    /// Host truthiness: nil, false, zero, NaN, the empty string and the null
    /// pointer are falsy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Nil => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(f) => *f != 0.0 && !f.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Pointer(p) => *p != 0,
            Value::Buffer(_) | Value::Object(_) => true,
        }
    }

    pub fn as_int(&self) -> Option<i128> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_pointer(&self) -> Option<u64> {
        match self {
            Value::Pointer(p) => Some(*p),
            _ => None,
        }
    }

    /// Short name of the value's shape, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Buffer(_) => "buffer",
            Value::Pointer(_) => "pointer",
            Value::Object(_) => "object",
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Buffer(bytes) => write!(f, "<buffer {} bytes>", bytes.len()),
            Value::Pointer(p) => write!(f, "<pointer {:#x}>", p),
            Value::Object(obj) => write!(f, "<{} {:#x}>", obj.type_name, obj.ptr),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            _ => write!(f, "{:?}", self),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}
