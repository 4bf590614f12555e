//! Remainder operator trait implementation
//!
//! The remainder keeps the dividend's sign (truncated division, matching
//! C's `%`), so `a == (a / b)·b + (a % b)` holds for every non-zero `b`.

use crate::*;

use crate::stdlib::ops::{Rem, RemAssign};

impl<'a, 'b> Rem<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    /// Panics when `rhs` is zero
    #[inline]
    fn rem(self, rhs: &BigInt) -> BigInt {
        BigInt::div_rem(self, rhs).1
    }
}

forward_all_binop_to_ref_ref!(impl Rem for BigInt, rem);

impl<'a> RemAssign<&'a BigInt> for BigInt {
    #[inline]
    fn rem_assign(&mut self, rhs: &BigInt) {
        *self = &*self % rhs;
    }
}

forward_val_assignop!(impl RemAssign for BigInt, rem_assign);
