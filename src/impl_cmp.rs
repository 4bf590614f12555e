//! Implementation of comparison operations
//!
//! Total order on signed integers: sign first, then magnitude, with the
//! magnitude comparison reversed when both operands are negative.

use crate::*;

use stdlib::cmp::Ordering;

impl PartialEq for BigInt {
    #[inline]
    fn eq(&self, rhs: &BigInt) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &BigInt) -> Ordering {
        let scmp = self.sign().cmp(&other.sign());
        if scmp != Ordering::Equal {
            return scmp;
        }

        match self.sign() {
            Sign::NoSign => Ordering::Equal,
            Sign::Plus => arithmetic::cmp_slice(self.magnitude(), other.magnitude()),
            Sign::Minus => arithmetic::cmp_slice(self.magnitude(), other.magnitude()).reverse(),
        }
    }
}
