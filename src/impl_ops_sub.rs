//! Subtraction operator trait implementation
//!

use crate::*;

use crate::stdlib::ops::{Neg, Sub, SubAssign};

impl<'a, 'b> Sub<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    /// a - b == a + (-b); negation is a sign flip on a shared buffer
    #[inline]
    fn sub(self, rhs: &BigInt) -> BigInt {
        self + &rhs.neg()
    }
}

forward_all_binop_to_ref_ref!(impl Sub for BigInt, sub);

impl<'a> SubAssign<&'a BigInt> for BigInt {
    #[inline]
    fn sub_assign(&mut self, rhs: &BigInt) {
        *self = &*self - rhs;
    }
}

forward_val_assignop!(impl SubAssign for BigInt, sub_assign);

macro_rules! impl_sub_for_primitive {
    ($t:ty) => {
        impl Sub<$t> for BigInt {
            type Output = BigInt;

            #[inline]
            fn sub(self, rhs: $t) -> BigInt {
                &self - &BigInt::from(rhs)
            }
        }

        impl Sub<$t> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn sub(self, rhs: $t) -> BigInt {
                self - &BigInt::from(rhs)
            }
        }

        impl Sub<BigInt> for $t {
            type Output = BigInt;

            #[inline]
            fn sub(self, rhs: BigInt) -> BigInt {
                BigInt::from(self) - rhs
            }
        }

        impl Sub<&BigInt> for $t {
            type Output = BigInt;

            #[inline]
            fn sub(self, rhs: &BigInt) -> BigInt {
                &BigInt::from(self) - rhs
            }
        }

        impl SubAssign<$t> for BigInt {
            #[inline]
            fn sub_assign(&mut self, rhs: $t) {
                *self = &*self - rhs;
            }
        }
    };
}

impl_sub_for_primitive!(i32);
impl_sub_for_primitive!(u32);
impl_sub_for_primitive!(i64);
impl_sub_for_primitive!(u64);
