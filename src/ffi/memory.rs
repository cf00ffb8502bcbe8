//! Native string memory.
//!
//! Strings passed to native code are copied into NUL-terminated buffers
//! owned by a [`StringArena`]. The arena belongs to one native call: the
//! invoker keeps it alive until the call returns, and dropping it frees every
//! buffer it handed out.

use super::types::TypeTag;
use crate::error::{MarshalError, MarshalResult};
use smallvec::SmallVec;
use std::ffi::{c_char, CStr, CString};

/// Owner of the string buffers allocated for one native call.
#[derive(Debug, Default)]
pub struct StringArena {
    strings: SmallVec<[CString; 4]>,
}

impl StringArena {
    pub fn new() -> Self {
        StringArena {
            strings: SmallVec::new(),
        }
    }

    /// Copy `s` into a NUL-terminated buffer and return its address.
    ///
    /// The address stays valid until the arena is dropped or cleared.
    pub fn alloc(&mut self, s: &str) -> MarshalResult<u64> {
        let owned = CString::new(s).map_err(|e| MarshalError::InteriorNul {
            position: e.nul_position(),
        })?;
        let addr = owned.as_ptr() as u64;
        self.strings.push(owned);
        Ok(addr)
    }

    /// Number of live allocations
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Bytes held, terminators included
    pub fn total_bytes(&self) -> usize {
        self.strings
            .iter()
            .map(|s| s.as_bytes_with_nul().len())
            .sum()
    }

    /// Free every allocation. Addresses handed out earlier become dangling.
    pub fn clear(&mut self) {
        self.strings.clear();
    }
}

/// Read the NUL-terminated string at `addr`.
///
/// `Filename` strings are decoded lossily since file names need not be
/// UTF-8; `Utf8` strings must be valid UTF-8.
///
/// # Safety
/// A non-zero `addr` must point to a readable, NUL-terminated byte sequence
/// that stays valid for the duration of the call.
pub unsafe fn read_c_string(addr: u64, tag: TypeTag) -> MarshalResult<String> {
    if addr == 0 {
        return Err(MarshalError::NullPointer { tag });
    }
    // SAFETY: non-null, and the caller guarantees a valid C string.
    let cstr = unsafe { CStr::from_ptr(addr as usize as *const c_char) };
    match tag {
        TypeTag::Filename => Ok(cstr.to_string_lossy().into_owned()),
        _ => cstr
            .to_str()
            .map(str::to_owned)
            .map_err(|_| MarshalError::InvalidUtf8 { addr }),
    }
}
