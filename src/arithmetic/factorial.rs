//! factorial

use crate::*;

/// n! as the running product 2·3·…·n
pub(crate) fn impl_factorial(n: u32) -> BigInt {
    let mut acc = BigInt::one();
    for i in 2..=n {
        acc = acc * i;
    }
    acc
}
