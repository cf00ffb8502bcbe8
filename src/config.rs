//! Marshaling configuration
//!
//! Settings are fixed when a [`Marshaller`](crate::ffi::marshal::Marshaller)
//! is built and threaded through every conversion.

use crate::ffi::marshal::ByteOrder;

/// What to do with a type tag that has no conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownTagPolicy {
    /// Encode a zero slot; decode to the raw slot value.
    #[default]
    Passthrough,
    /// Fail with `MarshalError::UnsupportedTag`.
    Reject,
}

/// Marshaling configuration
#[derive(Debug, Clone)]
pub struct MarshalConfig {
    /// Byte order for every slot read and write (default: target CPU order)
    pub byte_order: ByteOrder,
    /// Handling of tags without a conversion (default: passthrough)
    pub unknown_tags: UnknownTagPolicy,
}

impl MarshalConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self {
            byte_order: ByteOrder::NATIVE,
            unknown_tags: UnknownTagPolicy::Passthrough,
        }
    }

    /// Set the slot byte order
    pub fn with_byte_order(mut self, order: ByteOrder) -> Self {
        self.byte_order = order;
        self
    }

    /// Set the unknown tag policy
    pub fn with_unknown_tags(mut self, policy: UnknownTagPolicy) -> Self {
        self.unknown_tags = policy;
        self
    }
}

impl Default for MarshalConfig {
    fn default() -> Self {
        Self::new()
    }
}
