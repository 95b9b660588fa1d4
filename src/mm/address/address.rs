use crate::config::PAGE_SIZE;
use crate::mm::address::operations::{AlignOps, CalcOps, U64Convert};

/// A byte address, physical or virtual.
pub trait Address: CalcOps + AlignOps + U64Convert {
    /// Offset within the containing frame.
    fn page_offset(self) -> u64 {
        self.as_u64() & (PAGE_SIZE as u64 - 1)
    }

    fn add_by(self, offset: u64) -> Self {
        Self::from_u64(self.as_u64() + offset)
    }
}

#[macro_export]
macro_rules! impl_address {
    ($type:ty) => {
        impl $crate::mm::address::U64Convert for $type {
            fn as_u64(&self) -> u64 {
                self.0
            }
            fn from_u64(value: u64) -> Self {
                Self(value)
            }
        }

        $crate::impl_calc_ops!($type);
        impl $crate::mm::address::AlignOps for $type {}

        impl $crate::mm::address::Address for $type {}

        impl core::fmt::Debug for $type {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, concat!(stringify!($type), "({:#x})"), self.0)
            }
        }
    };
}

/// Physical byte address.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Paddr(pub u64);
impl_address!(Paddr);

/// Virtual byte address.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vaddr(pub u64);
impl_address!(Vaddr);
