//! Fixed 8-byte argument/return slots.
//!
//! A [`Slot`] is one native register's worth of bytes. Values narrower than
//! eight bytes occupy bytes `0..width` in the configured [`ByteOrder`]; the
//! remaining bytes stay zero.

use std::fmt;

/// Byte order used for every width-specific read and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    Little,
    Big,
}

impl ByteOrder {
    /// Byte order of the target CPU.
    #[cfg(target_endian = "little")]
    pub const NATIVE: ByteOrder = ByteOrder::Little;
    #[cfg(target_endian = "big")]
    pub const NATIVE: ByteOrder = ByteOrder::Big;
}

impl Default for ByteOrder {
    fn default() -> Self {
        ByteOrder::NATIVE
    }
}

macro_rules! slot_accessors {
    ($($write:ident, $read:ident, $ty:ty);* $(;)?) => {
        $(
            pub fn $write(&mut self, order: ByteOrder, value: $ty) {
                let bytes = match order {
                    ByteOrder::Little => value.to_le_bytes(),
                    ByteOrder::Big => value.to_be_bytes(),
                };
                self.0[..bytes.len()].copy_from_slice(&bytes);
            }

            pub fn $read(&self, order: ByteOrder) -> $ty {
                let mut bytes = [0u8; std::mem::size_of::<$ty>()];
                bytes.copy_from_slice(&self.0[..std::mem::size_of::<$ty>()]);
                match order {
                    ByteOrder::Little => <$ty>::from_le_bytes(bytes),
                    ByteOrder::Big => <$ty>::from_be_bytes(bytes),
                }
            }
        )*
    };
}

/// One encoded argument or raw return value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Slot([u8; 8]);

impl Slot {
    pub const ZERO: Slot = Slot([0; 8]);

    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Slot(bytes)
    }

    /// A slot holding a full 64-bit value, typically an address.
    pub fn from_u64(order: ByteOrder, value: u64) -> Self {
        let mut slot = Slot::ZERO;
        slot.write_u64(order, value);
        slot
    }

    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0; 8]
    }

    slot_accessors! {
        write_i8, read_i8, i8;
        write_u8, read_u8, u8;
        write_i16, read_i16, i16;
        write_u16, read_u16, u16;
        write_i32, read_i32, i32;
        write_u32, read_u32, u32;
        write_i64, read_i64, i64;
        write_u64, read_u64, u64;
        write_f32, read_f32, f32;
        write_f64, read_f64, f64;
    }
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slot[")?;
        for (i, b) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:02X}", b)?;
        }
        write!(f, "]")
    }
}
