//! Introspection layer interface.
//!
//! The marshaler never owns type descriptors. It asks an [`Introspection`]
//! implementation for a descriptor's tag and, for interface kinds, borrows a
//! nested descriptor through [`NestedInfo`], which releases it on drop.

use super::types::TypeTag;
use std::fmt;
use std::ops::Deref;

/// Source of type descriptors.
///
/// Implementations wrap a real introspection repository (for example
/// `g_type_info_get_tag`, `g_type_info_get_interface` and
/// `g_base_info_unref`).
pub trait Introspection {
    /// Opaque descriptor handle.
    type Info;

    /// Logical kind of `info`.
    fn tag(&self, info: &Self::Info) -> TypeTag;

    /// Acquire the nested descriptor of an interface-tagged `info`.
    ///
    /// Every returned descriptor must be passed to [`Introspection::release`]
    /// exactly once.
    fn interface(&self, info: &Self::Info) -> Self::Info;

    /// Drop one reference to a descriptor obtained from `interface`.
    fn release(&self, info: Self::Info);
}

/// A nested descriptor that is released when the guard goes out of scope.
pub struct NestedInfo<'a, I: Introspection> {
    repo: &'a I,
    info: Option<I::Info>,
}

impl<'a, I: Introspection> NestedInfo<'a, I> {
    /// Acquire the nested descriptor of `info`.
    pub fn acquire(repo: &'a I, info: &I::Info) -> Self {
        NestedInfo {
            repo,
            info: Some(repo.interface(info)),
        }
    }
}

impl<I: Introspection> Deref for NestedInfo<'_, I> {
    type Target = I::Info;

    fn deref(&self) -> &I::Info {
        // Only Drop takes the descriptor out.
        match &self.info {
            Some(info) => info,
            None => unreachable!("nested descriptor used after release"),
        }
    }
}

impl<I: Introspection> Drop for NestedInfo<'_, I> {
    fn drop(&mut self) {
        if let Some(info) = self.info.take() {
            self.repo.release(info);
        }
    }
}

impl<I: Introspection> fmt::Debug for NestedInfo<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NestedInfo")
            .field("held", &self.info.is_some())
            .finish()
    }
}
