//! Value marshaling between host values and native call slots.
//!
//! A [`Marshaller`] is used at three points of one native call:
//!
//! 1. [`Marshaller::encode_arg`] once per argument, before the call
//! 2. [`Marshaller::decode_ret`] on the raw return slot, after the call
//! 3. [`Marshaller::decode_param`] once per dereferenced out-parameter
//!
//! Every operation asks the [`Introspection`] layer for the descriptor's
//! tag and hands interface kinds to the [`InterfaceMarshaler`] with a nested
//! descriptor that is released before the operation returns.

mod arg;
mod conversions;
mod param;
mod ret;
mod slot;


pub use conversions::{to_address, to_f32, to_f64, to_gboolean, to_integer};
pub use slot::{ByteOrder, Slot};

use super::interface::InterfaceMarshaler;
use super::introspection::Introspection;
use super::types::TypeTag;
use crate::config::{MarshalConfig, UnknownTagPolicy};
use crate::error::{Direction, MarshalError, MarshalResult};

/// Converts values for native calls described by an introspection layer.
pub struct Marshaller<'a, I: Introspection, M: InterfaceMarshaler<I>> {
    repo: &'a I,
    interfaces: M,
    config: MarshalConfig,
}

impl<'a, I: Introspection, M: InterfaceMarshaler<I>> Marshaller<'a, I, M> {
    /// Create a marshaller with the default configuration.
    pub fn new(repo: &'a I, interfaces: M) -> Self {
        Self::with_config(repo, interfaces, MarshalConfig::default())
    }

    pub fn with_config(repo: &'a I, interfaces: M, config: MarshalConfig) -> Self {
        Marshaller {
            repo,
            interfaces,
            config,
        }
    }

    pub fn config(&self) -> &MarshalConfig {
        &self.config
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.config.byte_order
    }

    /// Apply the unknown tag policy to a tag with no conversion.
    fn unsupported(&self, tag: TypeTag, direction: Direction) -> MarshalResult<()> {
        match self.config.unknown_tags {
            UnknownTagPolicy::Passthrough => {
                tracing::debug!(%tag, %direction, "no conversion for tag, passing through");
                Ok(())
            }
            UnknownTagPolicy::Reject => Err(MarshalError::UnsupportedTag { tag, direction }),
        }
    }
}
