//! Addition operator trait implementation
//!

use crate::*;

use crate::stdlib::ops::{Add, AddAssign};
use crate::stdlib::cmp::Ordering;

use crate::arithmetic::{addition, subtraction, cmp_slice};

impl<'a, 'b> Add<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        match (self.sign(), rhs.sign()) {
            (Sign::NoSign, _) => rhs.clone(),
            (_, Sign::NoSign) => self.clone(),

            // same sign: magnitudes accumulate
            (a_sign, b_sign) if a_sign == b_sign => BigInt::from_limbs(
                a_sign,
                addition::add_slices(self.magnitude(), rhs.magnitude()),
            ),

            // opposite signs: subtract the smaller magnitude from the
            // larger; the larger operand decides the sign
            (a_sign, b_sign) => match cmp_slice(self.magnitude(), rhs.magnitude()) {
                Ordering::Equal => BigInt::zero(),
                Ordering::Greater => BigInt::from_limbs(
                    a_sign,
                    subtraction::sub_slices(self.magnitude(), rhs.magnitude()),
                ),
                Ordering::Less => BigInt::from_limbs(
                    b_sign,
                    subtraction::sub_slices(rhs.magnitude(), self.magnitude()),
                ),
            },
        }
    }
}

forward_all_binop_to_ref_ref!(impl Add for BigInt, add);

impl<'a> AddAssign<&'a BigInt> for BigInt {
    #[inline]
    fn add_assign(&mut self, rhs: &BigInt) {
        *self = &*self + rhs;
    }
}

forward_val_assignop!(impl AddAssign for BigInt, add_assign);

macro_rules! impl_add_for_primitive {
    ($t:ty) => {
        impl Add<$t> for BigInt {
            type Output = BigInt;

            #[inline]
            fn add(self, rhs: $t) -> BigInt {
                &self + &BigInt::from(rhs)
            }
        }

        impl Add<$t> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn add(self, rhs: $t) -> BigInt {
                self + &BigInt::from(rhs)
            }
        }

        impl Add<BigInt> for $t {
            type Output = BigInt;

            #[inline]
            fn add(self, rhs: BigInt) -> BigInt {
                rhs + self
            }
        }

        impl Add<&BigInt> for $t {
            type Output = BigInt;

            #[inline]
            fn add(self, rhs: &BigInt) -> BigInt {
                rhs + self
            }
        }

        impl AddAssign<$t> for BigInt {
            #[inline]
            fn add_assign(&mut self, rhs: $t) {
                *self = &*self + rhs;
            }
        }
    };
}

impl_add_for_primitive!(i32);
impl_add_for_primitive!(u32);
impl_add_for_primitive!(i64);
impl_add_for_primitive!(u64);

#[cfg(test)]
mod test {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $a:literal + $b:literal == $expected:literal) => {
            #[test]
            fn $name() {
                let a: BigInt = $a.parse().unwrap();
                let b: BigInt = $b.parse().unwrap();
                let expected: BigInt = $expected.parse().unwrap();

                assert_eq!(&a + &b, expected);
                assert_eq!(&b + &a, expected);
                assert_eq!(a + b, expected);
            }
        };
    }

    impl_case!(case_simple: "12" + "34" == "46");
    impl_case!(case_zero_identity: "-98765432109876543210" + "0" == "-98765432109876543210");
    impl_case!(case_carry_across_limbs: "4294967295" + "1" == "4294967296");
    impl_case!(case_both_negative: "-5" + "-6" == "-11");
    impl_case!(case_mixed_negative_wins: "-50" + "20" == "-30");
    impl_case!(case_mixed_positive_wins: "50" + "-20" == "30");
    impl_case!(case_cancellation: "123456789123456789" + "-123456789123456789" == "0");
    impl_case!(case_big: "999999999999999999999999999999" + "1" == "1000000000000000000000000000000");

    #[test]
    fn test_add_assign() {
        let mut x: BigInt = "999999999999999999".parse().unwrap();
        x += BigInt::one();
        assert_eq!(x, "1000000000000000000".parse().unwrap());
    }

    #[test]
    fn test_add_primitive() {
        let x = BigInt::from(10);
        assert_eq!(&x + 5, BigInt::from(15));
        assert_eq!(&x + (-25), BigInt::from(-15));
        assert_eq!(7 + &x, BigInt::from(17));
        assert_eq!(3u64 + x, BigInt::from(13));
    }

    #[test]
    fn test_cancellation_normalizes_to_nonnegative_zero() {
        let a: BigInt = "-4294967296".parse().unwrap();
        let b: BigInt = "4294967296".parse().unwrap();
        let sum = a + b;

        assert!(sum.is_zero());
        assert_eq!(sum.sign(), Sign::NoSign);
        assert_eq!(sum.limb_count(), 0);
    }
}
