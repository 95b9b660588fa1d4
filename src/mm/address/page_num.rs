use crate::config::{PAGE_OFFSET_BITS, PPN_MASK, VPN_MASK};
use crate::mm::address::address::{Address, Paddr, Vaddr};
use crate::mm::address::operations::{CalcOps, U64Convert};

/// A page number: a byte address shifted right by the offset width.
pub trait PageNum: CalcOps + U64Convert + Copy + Clone + PartialEq + PartialOrd + Eq + Ord {
    type TAddress: Address;

    /// Widest value this kind of page number may take.
    const MAX: u64;

    fn step(&mut self) {
        self.step_by(1);
    }

    fn step_by(&mut self, offset: u64) {
        *self = Self::from_u64(self.as_u64() + offset);
    }

    fn from_addr_floor(addr: Self::TAddress) -> Self {
        Self::from_u64(addr.as_u64() >> PAGE_OFFSET_BITS)
    }

    fn from_addr_ceil(addr: Self::TAddress) -> Self {
        Self::from_u64(addr.as_u64().div_ceil(1 << PAGE_OFFSET_BITS))
    }

    /// First byte of the page: `self << 12`.
    fn start_addr(self) -> Self::TAddress {
        Self::TAddress::from_u64(self.as_u64() << PAGE_OFFSET_BITS)
    }

    fn end_addr(self) -> Self::TAddress {
        Self::TAddress::from_u64((self.as_u64() + 1) << PAGE_OFFSET_BITS)
    }

    /// Whether the value fits in the bits this page number may use.
    fn in_range(self) -> bool {
        self.as_u64() <= Self::MAX
    }
}

#[macro_export]
macro_rules! impl_page_num {
    ($type:ty, $addr_type:ty, $max:expr) => {
        impl $crate::mm::address::U64Convert for $type {
            fn as_u64(&self) -> u64 {
                self.0
            }

            fn from_u64(value: u64) -> Self {
                Self(value)
            }
        }

        $crate::impl_calc_ops!($type);

        impl $crate::mm::address::PageNum for $type {
            type TAddress = $addr_type;
            const MAX: u64 = $max;
        }
    };
}

/// Physical page number
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Ppn(pub u64);
impl_page_num!(Ppn, Paddr, PPN_MASK);

/// Virtual page number, the 45-bit trie key
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Vpn(pub u64);
impl_page_num!(Vpn, Vaddr, VPN_MASK);

#[cfg(test)]
mod address_tests {
    use super::*;
    use crate::mm::address::AlignOps;
    use crate::{kassert, test_case};

    test_case!(test_ppn_start_addr_shifts_by_offset, {
        kassert!(Ppn(7).start_addr() == Paddr(0x7000));
        kassert!(Ppn(7).end_addr() == Paddr(0x8000));
        kassert!(Ppn::from_addr_floor(Paddr(0x7fff)) == Ppn(7));
        kassert!(Ppn::from_addr_ceil(Paddr(0x7001)) == Ppn(8));
    });

    test_case!(test_vaddr_splits_into_vpn_and_offset, {
        let va = Vaddr(0x1234_5678);
        kassert!(Vpn::from_addr_floor(va) == Vpn(0x1_2345));
        kassert!(va.page_offset() == 0x678);
    });

    test_case!(test_range_limits, {
        kassert!(Vpn((1 << 45) - 1).in_range());
        kassert!(!Vpn(1 << 45).in_range());
        kassert!(Ppn((1 << 52) - 1).in_range());
        kassert!(!Ppn(u64::MAX).in_range());
    });

    test_case!(test_alignment_helpers, {
        kassert!(Paddr(0x3000).is_page_aligned());
        kassert!(!Paddr(0x3001).is_page_aligned());
        kassert!(Paddr(0x3001).align_down_to_page() == Paddr(0x3000));
        kassert!(Paddr(0x3001).align_up_to_page() == Paddr(0x4000));
    });

    test_case!(test_calc_ops, {
        let mut ppn = Ppn(10);
        ppn.step();
        kassert!(ppn == Ppn(11));
        kassert!(ppn + 4 == Ppn(15));
        kassert!(Ppn(15) - Ppn(11) == 4);
        kassert!((Vpn(0x1ff) << 9) == Vpn(0x3_fe00));
    });
}
