//! Code for converting to and from fixed-width machine integers

use crate::*;
use crate::stdlib::convert::TryFrom;

/// Build a limb vector from any unsigned value, least significant limb first
pub(crate) fn limbs_from_u128(mut value: u128) -> stdlib::Vec<limb::Limb> {
    let mut limbs = stdlib::Vec::new();
    while value != 0 {
        limbs.push((value & limb::MAX as u128) as limb::Limb);
        value >>= limb::BITS;
    }
    limbs
}

macro_rules! impl_from_unsigned_primitive {
    ($t:ty) => {
        impl From<$t> for BigInt {
            fn from(n: $t) -> Self {
                BigInt::from_limbs(Sign::Plus, limbs_from_u128(n as u128))
            }
        }

        impl From<&$t> for BigInt {
            fn from(n: &$t) -> Self {
                BigInt::from(*n)
            }
        }
    };
}

macro_rules! impl_from_signed_primitive {
    ($t:ty) => {
        impl From<$t> for BigInt {
            fn from(n: $t) -> Self {
                // unsigned_abs is exact for the most-negative value
                let sign = if n < 0 { Sign::Minus } else { Sign::Plus };
                BigInt::from_limbs(sign, limbs_from_u128(n.unsigned_abs() as u128))
            }
        }

        impl From<&$t> for BigInt {
            fn from(n: &$t) -> Self {
                BigInt::from(*n)
            }
        }
    };
}

impl_from_unsigned_primitive!(u8);
impl_from_unsigned_primitive!(u16);
impl_from_unsigned_primitive!(u32);
impl_from_unsigned_primitive!(u64);
impl_from_unsigned_primitive!(u128);
impl_from_unsigned_primitive!(usize);
impl_from_signed_primitive!(i8);
impl_from_signed_primitive!(i16);
impl_from_signed_primitive!(i32);
impl_from_signed_primitive!(i64);
impl_from_signed_primitive!(i128);
impl_from_signed_primitive!(isize);

impl From<Sign> for BigInt {
    /// The signum value: -1, 0, or +1
    fn from(sign: Sign) -> Self {
        match sign {
            Sign::Minus => -BigInt::one(),
            Sign::NoSign => BigInt::zero(),
            Sign::Plus => BigInt::one(),
        }
    }
}

/// Error returned by `TryFrom<&BigInt>` when the value does not fit
/// the requested machine integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TryFromBigIntError {
    _private: (),
}

impl TryFromBigIntError {
    pub(crate) fn new() -> Self {
        TryFromBigIntError { _private: () }
    }
}

impl stdlib::fmt::Display for TryFromBigIntError {
    fn fmt(&self, f: &mut stdlib::fmt::Formatter) -> stdlib::fmt::Result {
        "BigInt value out of range for requested integer width".fmt(f)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TryFromBigIntError {}

macro_rules! impl_try_from_bigint {
    ($t:ty, $to:ident) => {
        impl TryFrom<&BigInt> for $t {
            type Error = TryFromBigIntError;

            #[inline]
            fn try_from(value: &BigInt) -> Result<$t, TryFromBigIntError> {
                value.$to().ok_or_else(TryFromBigIntError::new)
            }
        }

        impl TryFrom<BigInt> for $t {
            type Error = TryFromBigIntError;

            #[inline]
            fn try_from(value: BigInt) -> Result<$t, TryFromBigIntError> {
                <$t>::try_from(&value)
            }
        }
    };
}

impl_try_from_bigint!(u8, to_u8);
impl_try_from_bigint!(u16, to_u16);
impl_try_from_bigint!(u32, to_u32);
impl_try_from_bigint!(u64, to_u64);
impl_try_from_bigint!(u128, to_u128);
impl_try_from_bigint!(usize, to_usize);
impl_try_from_bigint!(i8, to_i8);
impl_try_from_bigint!(i16, to_i16);
impl_try_from_bigint!(i32, to_i32);
impl_try_from_bigint!(i64, to_i64);
impl_try_from_bigint!(i128, to_i128);
impl_try_from_bigint!(isize, to_isize);
