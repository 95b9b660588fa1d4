//! Arithmetic, bitwise and alignment traits for the address newtypes.
//!
//! Lets `Ppn`, `Vpn`, `Paddr` and `Vaddr` be computed with like plain `u64`
//! while staying distinct types.

use crate::config::PAGE_SIZE;
use core::ops::{Add, AddAssign, BitAnd, BitOr, Shl, Shr, Sub, SubAssign};

/// Conversion to and from the raw `u64` value.
pub trait U64Convert: Copy + Clone + PartialEq + PartialOrd + Eq + Ord {
    fn as_u64(&self) -> u64;
    fn from_u64(value: u64) -> Self;
}

/// Operations every address or page number supports.
pub trait CalcOps:
    U64Convert
    + Add<u64, Output = Self>
    + AddAssign<u64>
    + Sub<u64, Output = Self>
    + Sub<Self, Output = u64>
    + SubAssign<u64>
    + BitAnd<u64, Output = Self>
    + BitOr<u64, Output = Self>
    + Shl<usize, Output = Self>
    + Shr<usize, Output = Self>
{
}

/// Implements [`CalcOps`] for a [`U64Convert`] type by round-tripping
/// through `u64`.
#[macro_export]
macro_rules! impl_calc_ops {
    ($type:ty) => {
        impl core::ops::Add<u64> for $type {
            type Output = Self;
            fn add(self, rhs: u64) -> Self::Output {
                $crate::mm::address::U64Convert::from_u64(self.as_u64() + rhs)
            }
        }
        impl core::ops::AddAssign<u64> for $type {
            fn add_assign(&mut self, rhs: u64) {
                *self = $crate::mm::address::U64Convert::from_u64(self.as_u64() + rhs)
            }
        }
        impl core::ops::Sub<u64> for $type {
            type Output = Self;
            fn sub(self, rhs: u64) -> Self::Output {
                $crate::mm::address::U64Convert::from_u64(self.as_u64() - rhs)
            }
        }
        // distance between two values
        impl core::ops::Sub<Self> for $type {
            type Output = u64;
            fn sub(self, rhs: Self) -> Self::Output {
                self.as_u64() - rhs.as_u64()
            }
        }
        impl core::ops::SubAssign<u64> for $type {
            fn sub_assign(&mut self, rhs: u64) {
                *self = $crate::mm::address::U64Convert::from_u64(self.as_u64() - rhs)
            }
        }
        impl core::ops::BitAnd<u64> for $type {
            type Output = Self;
            fn bitand(self, rhs: u64) -> Self::Output {
                $crate::mm::address::U64Convert::from_u64(self.as_u64() & rhs)
            }
        }
        impl core::ops::BitOr<u64> for $type {
            type Output = Self;
            fn bitor(self, rhs: u64) -> Self::Output {
                $crate::mm::address::U64Convert::from_u64(self.as_u64() | rhs)
            }
        }
        impl core::ops::Shl<usize> for $type {
            type Output = Self;
            fn shl(self, rhs: usize) -> Self::Output {
                $crate::mm::address::U64Convert::from_u64(self.as_u64() << rhs)
            }
        }
        impl core::ops::Shr<usize> for $type {
            type Output = Self;
            fn shr(self, rhs: usize) -> Self::Output {
                $crate::mm::address::U64Convert::from_u64(self.as_u64() >> rhs)
            }
        }
        impl $crate::mm::address::CalcOps for $type {}
    };
}

/// Alignment checks and rounding.
///
/// All `alignment` arguments must be powers of two.
pub trait AlignOps: U64Convert {
    fn is_aligned(self, alignment: u64) -> bool {
        debug_assert!(
            alignment.is_power_of_two(),
            "alignment must be a power of two"
        );
        self.as_u64() & (alignment - 1) == 0
    }

    fn is_page_aligned(self) -> bool {
        self.is_aligned(PAGE_SIZE as u64)
    }

    fn align_up(self, alignment: u64) -> Self {
        debug_assert!(
            alignment.is_power_of_two(),
            "alignment must be a power of two"
        );
        let mask = alignment - 1;
        Self::from_u64((self.as_u64() + mask) & !mask)
    }

    fn align_down(self, alignment: u64) -> Self {
        debug_assert!(
            alignment.is_power_of_two(),
            "alignment must be a power of two"
        );
        Self::from_u64(self.as_u64() & !(alignment - 1))
    }

    fn align_up_to_page(self) -> Self {
        self.align_up(PAGE_SIZE as u64)
    }

    fn align_down_to_page(self) -> Self {
        self.align_down(PAGE_SIZE as u64)
    }
}
