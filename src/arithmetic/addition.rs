//!
//! Addition algorithms on limb slices
//!

use crate::stdlib::Vec;
use crate::limb::{self, Limb};

/// Add two magnitudes, returning a normalized limb vector
pub(crate) fn add_slices(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    // a is longer of the two
    let (a, b) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut result = Vec::with_capacity(a.len() + 1);
    let mut carry = 0;

    let (a_low, a_high) = a.split_at(b.len());
    for (&a_limb, &b_limb) in a_low.iter().zip(b.iter()) {
        result.push(limb::adc(a_limb, b_limb, &mut carry));
    }
    for &a_limb in a_high {
        result.push(limb::adc(a_limb, 0, &mut carry));
    }
    if carry != 0 {
        result.push(carry);
    }

    result
}

/// In-place `a += b`, used by the division loop where the quotient buffer
/// is known to absorb the carry.
///
/// Panics (debug) if a carry would run off the end of `a`.
pub(crate) fn add_assign_slice(a: &mut [Limb], b: &[Limb]) {
    debug_assert!(a.len() >= b.len());

    let mut carry = 0;
    let (a_low, a_high) = a.split_at_mut(b.len());

    for (a_limb, &b_limb) in a_low.iter_mut().zip(b.iter()) {
        *a_limb = limb::adc(*a_limb, b_limb, &mut carry);
    }

    for a_limb in a_high {
        if carry == 0 {
            break;
        }
        *a_limb = limb::adc(*a_limb, 0, &mut carry);
    }

    debug_assert_eq!(carry, 0, "carry overflowed addition target");
}
