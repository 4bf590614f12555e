//! Code for num_traits and num_integer

use num_integer::Integer;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub};
use num_traits::{FromPrimitive, Num, One, Pow, Signed, ToPrimitive, Zero};

use crate::stdlib;
use stdlib::cmp::Ordering;

use crate::{BigInt, ParseBigIntError, Sign};

impl Zero for BigInt {
    #[inline]
    fn zero() -> BigInt {
        BigInt::from_limbs(Sign::NoSign, stdlib::Vec::new())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.magnitude().is_empty()
    }
}

impl One for BigInt {
    #[inline]
    fn one() -> BigInt {
        BigInt::from_limbs(Sign::Plus, vec![1])
    }
}

impl Num for BigInt {
    type FromStrRadixErr = ParseBigIntError;

    /// Parse a string in the given radix (2 to 36)
    #[inline]
    fn from_str_radix(s: &str, radix: u32) -> Result<BigInt, ParseBigIntError> {
        BigInt::from_str_radix(s, radix)
    }
}

impl Signed for BigInt {
    /// Absolute value; shares the magnitude buffer with `self`
    #[inline]
    fn abs(&self) -> BigInt {
        match self.sign() {
            Sign::Minus => self.with_sign(Sign::Plus),
            _ => self.clone(),
        }
    }

    #[inline]
    fn abs_sub(&self, other: &BigInt) -> BigInt {
        if self <= other {
            Zero::zero()
        } else {
            self - other
        }
    }

    #[inline]
    fn signum(&self) -> BigInt {
        BigInt::from(self.sign())
    }

    #[inline]
    fn is_positive(&self) -> bool {
        self.sign() == Sign::Plus
    }

    #[inline]
    fn is_negative(&self) -> bool {
        self.sign() == Sign::Minus
    }
}

impl ToPrimitive for BigInt {
    fn to_i64(&self) -> Option<i64> {
        match self.sign() {
            Sign::NoSign => Some(0),
            Sign::Plus => self.magnitude_to_u128().and_then(|m| {
                if m <= i64::MAX as u128 {
                    Some(m as i64)
                } else {
                    None
                }
            }),
            Sign::Minus => self.magnitude_to_u128().and_then(|m| {
                match m.cmp(&(i64::MAX as u128 + 1)) {
                    Ordering::Less => Some(-(m as i64)),
                    Ordering::Equal => Some(i64::MIN),
                    Ordering::Greater => None,
                }
            }),
        }
    }

    fn to_i128(&self) -> Option<i128> {
        match self.sign() {
            Sign::NoSign => Some(0),
            Sign::Plus => self.magnitude_to_u128().and_then(|m| {
                if m <= i128::MAX as u128 {
                    Some(m as i128)
                } else {
                    None
                }
            }),
            Sign::Minus => self.magnitude_to_u128().and_then(|m| {
                match m.cmp(&(i128::MAX as u128 + 1)) {
                    Ordering::Less => Some(-(m as i128)),
                    Ordering::Equal => Some(i128::MIN),
                    Ordering::Greater => None,
                }
            }),
        }
    }

    fn to_u64(&self) -> Option<u64> {
        match self.sign() {
            Sign::NoSign => Some(0),
            Sign::Minus => None,
            Sign::Plus => self.magnitude_to_u128().and_then(|m| {
                if m <= u64::MAX as u128 {
                    Some(m as u64)
                } else {
                    None
                }
            }),
        }
    }

    fn to_u128(&self) -> Option<u128> {
        match self.sign() {
            Sign::NoSign => Some(0),
            Sign::Minus => None,
            Sign::Plus => self.magnitude_to_u128(),
        }
    }

    /// Accumulate limbs from least to most significant against a running
    /// power of the limb radix. No rounding promises beyond IEEE 754
    /// double accumulation.
    fn to_f64(&self) -> Option<f64> {
        let mut result = 0.0;
        let mut base = 1.0;

        for &limb_val in self.magnitude() {
            result += limb_val as f64 * base;
            base *= crate::limb::BASE as f64;
        }

        match self.sign() {
            Sign::Minus => Some(-result),
            _ => Some(result),
        }
    }

    fn to_f32(&self) -> Option<f32> {
        self.to_f64().map(|v| v as f32)
    }
}

impl FromPrimitive for BigInt {
    #[inline]
    fn from_i64(n: i64) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_i128(n: i128) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_u128(n: u128) -> Option<BigInt> {
        Some(BigInt::from(n))
    }
}

impl CheckedAdd for BigInt {
    #[inline]
    fn checked_add(&self, v: &BigInt) -> Option<BigInt> {
        Some(self + v)
    }
}

impl CheckedSub for BigInt {
    #[inline]
    fn checked_sub(&self, v: &BigInt) -> Option<BigInt> {
        Some(self - v)
    }
}

impl CheckedMul for BigInt {
    #[inline]
    fn checked_mul(&self, v: &BigInt) -> Option<BigInt> {
        Some(self * v)
    }
}

impl CheckedDiv for BigInt {
    /// The recoverable division: `None` on a zero divisor
    #[inline]
    fn checked_div(&self, v: &BigInt) -> Option<BigInt> {
        if v.is_zero() {
            return None;
        }
        Some(self / v)
    }
}

impl Pow<u32> for BigInt {
    type Output = BigInt;

    #[inline]
    fn pow(self, exp: u32) -> BigInt {
        BigInt::pow(&self, exp)
    }
}

impl Pow<u32> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn pow(self, exp: u32) -> BigInt {
        BigInt::pow(self, exp)
    }
}

impl Integer for BigInt {
    /// Truncated quotient and remainder from one division pass
    #[inline]
    fn div_rem(&self, other: &BigInt) -> (BigInt, BigInt) {
        BigInt::div_rem(self, other)
    }

    #[inline]
    fn div_floor(&self, other: &BigInt) -> BigInt {
        self.div_mod_floor(other).0
    }

    #[inline]
    fn mod_floor(&self, other: &BigInt) -> BigInt {
        self.div_mod_floor(other).1
    }

    /// Floored division, derived from the truncated pair by pulling the
    /// quotient back one step whenever a non-zero remainder disagrees with
    /// the divisor in sign.
    fn div_mod_floor(&self, other: &BigInt) -> (BigInt, BigInt) {
        let (d, r) = BigInt::div_rem(self, other);
        if !r.is_zero() && r.sign() != other.sign() {
            (d - 1, r + other)
        } else {
            (d, r)
        }
    }

    #[inline]
    fn gcd(&self, other: &BigInt) -> BigInt {
        BigInt::gcd(self, other)
    }

    #[inline]
    fn lcm(&self, other: &BigInt) -> BigInt {
        BigInt::lcm(self, other)
    }

    #[inline]
    fn is_multiple_of(&self, other: &BigInt) -> bool {
        if other.is_zero() {
            return self.is_zero();
        }
        (self % other).is_zero()
    }

    #[inline]
    fn is_even(&self) -> bool {
        BigInt::is_even(self)
    }

    #[inline]
    fn is_odd(&self) -> bool {
        BigInt::is_odd(self)
    }
}
