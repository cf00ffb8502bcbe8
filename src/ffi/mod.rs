//! Native side of the marshaling layer.
//!
//! - [`types`]: type tags reported by introspection
//! - [`introspection`]: descriptor source and the nested descriptor guard
//! - [`interface`]: seam for compound (interface) kinds
//! - [`memory`]: string buffers handed to native code
//! - [`marshal`]: the argument encoder and the return/param decoders

pub mod interface;
pub mod introspection;
pub mod marshal;
pub mod memory;
pub mod types;
