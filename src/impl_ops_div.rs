//! Division operator trait implementation
//!
//! Truncated division toward zero, matching C's `/`. The quotient and
//! remainder come from the same long-division pass (see `BigInt::div_rem`);
//! `/` simply discards the remainder half.

use crate::*;

use crate::stdlib::ops::{Div, DivAssign};

impl<'a, 'b> Div<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    /// Panics when `rhs` is zero
    #[inline]
    fn div(self, rhs: &BigInt) -> BigInt {
        BigInt::div_rem(self, rhs).0
    }
}

forward_all_binop_to_ref_ref!(impl Div for BigInt, div);

impl<'a> DivAssign<&'a BigInt> for BigInt {
    #[inline]
    fn div_assign(&mut self, rhs: &BigInt) {
        *self = &*self / rhs;
    }
}

forward_val_assignop!(impl DivAssign for BigInt, div_assign);
