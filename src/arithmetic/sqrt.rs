//! integer square root implementation

use crate::*;

/// ⌊√n⌋ by Newton's iteration
///
/// Starts from n/2 and refines with x ← (x + n/x)/2, which for integer
/// division decreases monotonically until it reaches the floor of the root;
/// the first non-decreasing step is the answer.
pub(crate) fn impl_sqrt(n: &BigInt) -> BigInt {
    assert!(n.sign() != Sign::Minus, "square root of negative number");

    if n.is_zero() {
        return BigInt::zero();
    }

    let mut x = n >> 1;
    if x.is_zero() {
        // n == 1
        x = BigInt::one();
    }

    loop {
        let x_next = (&x + &(n / &x)) >> 1;
        if x_next >= x {
            return x;
        }
        x = x_next;
    }
}
