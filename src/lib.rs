// Copyright 2024 Andrew Kubera
// See the COPYRIGHT file at the top-level directory of this
// distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Arbitrary precision signed integers
//!
//! `BigInt` stores a sign alongside a little-endian sequence of machine
//! word "limbs", and grows as far as memory allows. Values are immutable:
//! every operation returns a fresh result, and cloning a value only bumps a
//! reference count on the shared limb buffer, so results can be handed
//! around as cheaply as machine integers.
//!
//! The crate is `no_std`-capable (with `alloc`) for use on embedded
//! targets, where it pairs with the [`overflow`] helpers to promote native
//! arithmetic to arbitrary precision only once it overflows.
//!
//! # Example
//!
//! ```
//! use bigint::BigInt;
//!
//! let a: BigInt = "999999999999999999".parse().unwrap();
//! let b = BigInt::from(888888888888888888u64);
//!
//! let product = &a * &b;
//! assert_eq!(product.to_string(), "888888888888888887111111111111111112");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::style)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::needless_return)]
#![allow(clippy::redundant_field_names)]
#![allow(unused_imports)]


pub extern crate num_traits;
extern crate num_integer;

#[cfg(test)]
extern crate paste;

#[cfg(any(feature = "rand", test))]
extern crate rand;

#[cfg(feature = "serde")]
extern crate serde as serde_crate;

#[cfg(all(test, feature = "serde"))]
extern crate serde_test;

#[cfg(all(test, feature = "serde"))]
extern crate serde_json;

#[cfg(feature = "std")]
include!("./with_std.rs");

#[cfg(not(feature = "std"))]
include!("./without_std.rs");

// make available some standard items
use self::stdlib::cmp::Ordering;
use self::stdlib::convert::TryFrom;
use self::stdlib::default::Default;
use self::stdlib::hash::{Hash, Hasher};
use self::stdlib::fmt;
use self::stdlib::Rc;
use self::stdlib::String;
use self::stdlib::Vec;

use num_integer::Integer as IntegerTrait;
pub use num_traits::{FromPrimitive, Num, One, Pow, Signed, ToPrimitive, Zero};

#[macro_use]
mod macros;

// limb type and single-word carry kernels
pub mod limb;

// "low level" functions on limb slices
mod arithmetic;

// From<T>, TryFrom<T> impls
mod impl_convert;
mod impl_trait_from_str;

// Add<T>, Sub<T>, etc...
mod impl_ops;
mod impl_ops_add;
mod impl_ops_sub;
mod impl_ops_mul;
mod impl_ops_div;
mod impl_ops_rem;

// PartialEq, Ord
mod impl_cmp;

// Implementations of num_traits and num_integer
mod impl_num;

// Implementations of std::fmt traits and stringification routines
mod impl_fmt;

// Implementations for deserializations and serializations
#[cfg(feature = "serde")]
pub mod impl_serde;

// construct BigInts from strings
mod parsing;

// fixed-width helpers that promote to BigInt on overflow
pub mod overflow;

// random value generation
#[cfg(any(feature = "rand", test))]
mod random;
#[cfg(any(feature = "rand", test))]
pub use random::RandBigInt;

pub use impl_convert::TryFromBigIntError;

use limb::Limb;


/// The sign of a [`BigInt`]: zero is its own sign, so a negative zero
/// cannot be represented.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    Minus,
    NoSign,
    Plus,
}

impl stdlib::ops::Neg for Sign {
    type Output = Sign;

    #[inline]
    fn neg(self) -> Sign {
        match self {
            Sign::Minus => Sign::Plus,
            Sign::NoSign => Sign::NoSign,
            Sign::Plus => Sign::Minus,
        }
    }
}

impl stdlib::ops::Mul for Sign {
    type Output = Sign;

    #[inline]
    fn mul(self, rhs: Sign) -> Sign {
        match (self, rhs) {
            (Sign::NoSign, _) | (_, Sign::NoSign) => Sign::NoSign,
            (a, b) if a == b => Sign::Plus,
            _ => Sign::Minus,
        }
    }
}

/// A signed arbitrary-precision integer.
///
/// Sign-magnitude representation: the magnitude is a normalized
/// little-endian limb vector (no trailing zero limbs; empty means zero)
/// behind a reference count. `clone` shares the buffer, [`deep_copy`]
/// duplicates it, and dropping the last owner frees it.
///
/// [`deep_copy`]: BigInt::deep_copy
#[derive(Clone)]
pub struct BigInt {
    sign: Sign,
    mag: Rc<Vec<Limb>>,
}

impl BigInt {
    /// The canonicalizing constructor every operation funnels through:
    /// trims trailing zero limbs and pins the sign of zero to `NoSign`.
    pub(crate) fn from_limbs(sign: Sign, mut limbs: Vec<Limb>) -> BigInt {
        arithmetic::trim(&mut limbs);

        let sign = if limbs.is_empty() { Sign::NoSign } else { sign };
        debug_assert!(sign != Sign::NoSign || limbs.is_empty());

        BigInt {
            sign: sign,
            mag: Rc::new(limbs),
        }
    }

    /// Same magnitude buffer, different sign; the cheap path behind
    /// negation and absolute value
    pub(crate) fn with_sign(&self, sign: Sign) -> BigInt {
        debug_assert!(!self.is_zero());
        BigInt {
            sign: sign,
            mag: Rc::clone(&self.mag),
        }
    }

    /// This value's sign
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// The magnitude as a little-endian limb slice, without trailing zeros
    #[inline]
    pub fn magnitude(&self) -> &[Limb] {
        &self.mag
    }

    /// Number of limbs in the magnitude; zero has none
    #[inline]
    pub fn limb_count(&self) -> usize {
        self.mag.len()
    }

    /// Number of significant bits in the magnitude; zero has none
    #[inline]
    pub fn bit_length(&self) -> u64 {
        arithmetic::bit_length(&self.mag)
    }

    /// A new value with its own limb buffer, independent of every
    /// existing handle
    pub fn deep_copy(&self) -> BigInt {
        BigInt {
            sign: self.sign,
            mag: Rc::new(self.mag.as_ref().clone()),
        }
    }

    /// How many handles currently share this value's limb buffer.
    /// Exposed for tests of the sharing discipline.
    pub fn ref_count(&self) -> usize {
        Rc::strong_count(&self.mag)
    }

    /// Parse a prefix of `s` as an integer in the given radix (2 to 36).
    ///
    /// Leading whitespace and a `+`/`-` sign are accepted; parsing stops at
    /// the first character that is not a digit of the radix, and fails only
    /// when no digit was consumed. Letter digits may be either case.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let x = BigInt::from_str_radix("-deadbeef", 16).unwrap();
    /// assert_eq!(x.to_string(), "-3735928559");
    /// ```
    #[inline]
    pub fn from_str_radix(s: &str, radix: u32) -> Result<BigInt, ParseBigIntError> {
        parsing::parse_radix_prefix(s, radix)
    }

    /// Truncated quotient and remainder in a single division pass.
    ///
    /// The quotient rounds toward zero and the remainder keeps the
    /// dividend's sign, as in C. Panics when `other` is zero.
    pub fn div_rem(&self, other: &BigInt) -> (BigInt, BigInt) {
        assert!(!other.is_zero(), "division by zero");

        if self.is_zero() {
            return (BigInt::zero(), BigInt::zero());
        }

        if arithmetic::cmp_slice(self.magnitude(), other.magnitude()) == Ordering::Less {
            // quotient truncates to zero; remainder is the dividend itself
            return (BigInt::zero(), self.clone());
        }

        let (q, r) = arithmetic::division::div_rem_slices(self.magnitude(), other.magnitude());

        (
            BigInt::from_limbs(self.sign * other.sign, q),
            BigInt::from_limbs(self.sign, r),
        )
    }

    /// Raise to a native exponent; `pow(0)` is one
    #[inline]
    pub fn pow(&self, exp: u32) -> BigInt {
        arithmetic::pow::impl_pow(self, exp)
    }

    /// Modular exponentiation `self^exp (mod modulus)`.
    ///
    /// Panics when `exp` is negative or `modulus` is not positive.
    #[inline]
    pub fn modpow(&self, exp: &BigInt, modulus: &BigInt) -> BigInt {
        arithmetic::modpow::impl_modpow(self, exp, modulus)
    }

    /// Greatest common divisor of the absolute values; never negative
    #[inline]
    pub fn gcd(&self, other: &BigInt) -> BigInt {
        arithmetic::gcd::impl_gcd(self, other)
    }

    /// Least common multiple; zero when either operand is zero
    #[inline]
    pub fn lcm(&self, other: &BigInt) -> BigInt {
        arithmetic::gcd::impl_lcm(self, other)
    }

    /// The gcd `g` of `|self|` and `|other|` together with Bézout
    /// coefficients: `|self|·x + |other|·y == g`
    #[inline]
    pub fn extended_gcd(&self, other: &BigInt) -> (BigInt, BigInt, BigInt) {
        arithmetic::gcd::impl_extended_gcd(self, other)
    }

    /// ⌊√self⌋; panics for negative values
    #[inline]
    pub fn sqrt(&self) -> BigInt {
        arithmetic::sqrt::impl_sqrt(self)
    }

    /// n! for a native n
    #[inline]
    pub fn factorial(n: u32) -> BigInt {
        arithmetic::factorial::impl_factorial(n)
    }

    /// Deterministic trial-division primality test.
    ///
    /// `certainty` exists for interface compatibility with probabilistic
    /// testers and is ignored: the answer here is always exact.
    #[inline]
    pub fn is_prime(&self, certainty: u32) -> bool {
        let _ = certainty;
        arithmetic::prime::impl_is_prime(self)
    }

    /// The smallest prime the odd-step search reaches from `self`;
    /// values below 2 give 2, and `next_prime(2)` steps to 3
    #[inline]
    pub fn next_prime(&self) -> BigInt {
        arithmetic::prime::impl_next_prime(self)
    }

    /// True when divisible by two; zero is even
    #[inline]
    pub fn is_even(&self) -> bool {
        match self.mag.first() {
            Some(limb) => limb & 1 == 0,
            None => true,
        }
    }

    /// True when not divisible by two
    #[inline]
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// Fold the magnitude into a u128 when it fits
    pub(crate) fn magnitude_to_u128(&self) -> Option<u128> {
        if self.bit_length() > 128 {
            return None;
        }

        let mut acc = 0u128;
        for &limb_val in self.mag.iter().rev() {
            acc = (acc << limb::BITS) | limb_val as u128;
        }
        Some(acc)
    }
}

impl Default for BigInt {
    #[inline]
    fn default() -> BigInt {
        Zero::zero()
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sign.hash(state);
        self.mag.hash(state);
    }
}


/// Error parsing a string as a [`BigInt`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBigIntError {
    /// Input was empty, or whitespace only
    Empty,
    /// A sign or invalid character where the first digit belongs
    NoDigits,
}

impl fmt::Display for ParseBigIntError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ParseBigIntError::*;

        match *self {
            Empty => "empty string".fmt(f),
            NoDigits => "no digits found".fmt(f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseBigIntError {
    fn description(&self) -> &str {
        "failed to parse bigint"
    }
}



#[cfg(all(test, property_tests))]
extern crate proptest;
