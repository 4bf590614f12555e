//! greatest common divisor family: gcd, lcm, extended gcd

use crate::*;
use crate::stdlib::mem;

/// Euclidean gcd on absolute values; result is never negative
pub(crate) fn impl_gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut m = a.abs();
    let mut n = b.abs();

    while !m.is_zero() {
        let t = m;
        m = &n % &t;
        n = t;
    }
    n
}

/// lcm(a, b) = |a·b| / gcd(a, b), with lcm(0, x) = lcm(x, 0) = 0
pub(crate) fn impl_lcm(a: &BigInt, b: &BigInt) -> BigInt {
    if a.is_zero() || b.is_zero() {
        return BigInt::zero();
    }
    (a * b).abs() / impl_gcd(a, b)
}

/// Iterative extended Euclidean algorithm.
///
/// Returns (g, x, y) satisfying |a|·x + |b|·y == g with g == gcd(a, b) ≥ 0.
/// The Bézout coefficients may be negative.
pub(crate) fn impl_extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let mut old_r = a.abs();
    let mut r = b.abs();
    let mut old_s = BigInt::one();
    let mut s = BigInt::zero();
    let mut old_t = BigInt::zero();
    let mut t = BigInt::one();

    while !r.is_zero() {
        let quotient = &old_r / &r;

        let next_r = &old_r - &(&quotient * &r);
        old_r = mem::replace(&mut r, next_r);

        let next_s = &old_s - &(&quotient * &s);
        old_s = mem::replace(&mut s, next_s);

        let next_t = &old_t - &(&quotient * &t);
        old_t = mem::replace(&mut t, next_t);
    }

    (old_r, old_s, old_t)
}
