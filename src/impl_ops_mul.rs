//! Multiplication operator trait implementation
//!

use crate::*;

use crate::stdlib::ops::{Mul, MulAssign};

use crate::arithmetic::multiplication;

impl<'a, 'b> Mul<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    /// Schoolbook product; result sign is the sign product, and a zero
    /// magnitude normalizes back to non-negative
    #[inline]
    fn mul(self, rhs: &BigInt) -> BigInt {
        BigInt::from_limbs(
            self.sign() * rhs.sign(),
            multiplication::mul_slices(self.magnitude(), rhs.magnitude()),
        )
    }
}

forward_all_binop_to_ref_ref!(impl Mul for BigInt, mul);

impl<'a> MulAssign<&'a BigInt> for BigInt {
    #[inline]
    fn mul_assign(&mut self, rhs: &BigInt) {
        *self = &*self * rhs;
    }
}

forward_val_assignop!(impl MulAssign for BigInt, mul_assign);

macro_rules! impl_mul_for_primitive {
    ($t:ty) => {
        impl Mul<$t> for BigInt {
            type Output = BigInt;

            #[inline]
            fn mul(self, rhs: $t) -> BigInt {
                &self * &BigInt::from(rhs)
            }
        }

        impl Mul<$t> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn mul(self, rhs: $t) -> BigInt {
                self * &BigInt::from(rhs)
            }
        }

        impl Mul<BigInt> for $t {
            type Output = BigInt;

            #[inline]
            fn mul(self, rhs: BigInt) -> BigInt {
                rhs * self
            }
        }

        impl Mul<&BigInt> for $t {
            type Output = BigInt;

            #[inline]
            fn mul(self, rhs: &BigInt) -> BigInt {
                rhs * self
            }
        }

        impl MulAssign<$t> for BigInt {
            #[inline]
            fn mul_assign(&mut self, rhs: $t) {
                *self = &*self * rhs;
            }
        }
    };
}

impl_mul_for_primitive!(i32);
impl_mul_for_primitive!(u32);
impl_mul_for_primitive!(i64);
impl_mul_for_primitive!(u64);

#[cfg(test)]
mod test {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $a:literal * $b:literal == $expected:literal) => {
            #[test]
            fn $name() {
                let a: BigInt = $a.parse().unwrap();
                let b: BigInt = $b.parse().unwrap();
                let expected: BigInt = $expected.parse().unwrap();

                assert_eq!(&a * &b, expected);
                assert_eq!(&b * &a, expected);
                assert_eq!(a * b, expected);
            }
        };
    }

    impl_case!(case_simple: "7" * "6" == "42");
    impl_case!(case_zero_absorbs: "-123456789012345678901234567890" * "0" == "0");
    impl_case!(case_one_identity: "123456789012345678901234567890" * "1" == "123456789012345678901234567890");
    impl_case!(case_sign_mixed: "-4" * "25" == "-100");
    impl_case!(case_sign_both_negative: "-4" * "-25" == "100");
    impl_case!(case_limb_overflow: "4294967295" * "4294967295" == "18446744065119617025");
    impl_case!(case_twenty_digits: "99999999999999999999" * "99999999999999999999" == "9999999999999999999800000000000000000001");

    #[test]
    fn test_zero_product_is_nonnegative() {
        let product = BigInt::from(-7) * BigInt::zero();
        assert_eq!(product.sign(), Sign::NoSign);
    }

    #[test]
    fn test_mul_assign_and_primitive() {
        let mut x = BigInt::from(12);
        x *= BigInt::from(-12);
        assert_eq!(x, BigInt::from(-144));

        x *= -1;
        assert_eq!(x, BigInt::from(144));
        assert_eq!(&x * 2u64, BigInt::from(288));
        assert_eq!(3 * x, BigInt::from(432));
    }
}
