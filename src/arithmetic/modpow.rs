//! modular exponentiation

use crate::*;

/// base^exp (mod modulus) by right-to-left binary exponentiation
///
/// The base is reduced once up front, then squared and reduced at every
/// exponent bit; set bits fold the current square into the accumulator.
/// Remainders follow truncated-division sign rules throughout, so a
/// negative base yields the remainder a plain `%` chain would.
pub(crate) fn impl_modpow(base: &BigInt, exp: &BigInt, modulus: &BigInt) -> BigInt {
    assert!(exp.sign() != Sign::Minus, "negative exponent in modular exponentiation");
    assert!(modulus.is_positive(), "modulus must be positive");

    if modulus.is_one() {
        return BigInt::zero();
    }

    let mut result = BigInt::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = &(&result * &base) % modulus;
        }
        base = &(&base * &base) % modulus;
        exp = exp >> 1;
    }

    result
}
