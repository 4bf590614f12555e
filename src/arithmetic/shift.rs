//!
//! Logical bit shifts on limb slices
//!

use crate::stdlib::Vec;
use crate::limb::{self, Limb};
use super::trim;

/// Shift a magnitude left by `bits`, returning a normalized limb vector
pub(crate) fn shl_slices(mag: &[Limb], bits: usize) -> Vec<Limb> {
    if mag.is_empty() || bits == 0 {
        return mag.to_vec();
    }

    let limb_shift = bits / limb::BITS;
    let bit_shift = bits % limb::BITS;

    let mut result = vec![0; mag.len() + limb_shift + (bit_shift > 0) as usize];

    if bit_shift == 0 {
        result[limb_shift..].copy_from_slice(mag);
    } else {
        let mut carry = 0;
        for (i, &limb_val) in mag.iter().enumerate() {
            result[i + limb_shift] = (limb_val << bit_shift) | carry;
            carry = limb_val >> (limb::BITS - bit_shift);
        }
        result[limb_shift + mag.len()] = carry;
    }

    trim(&mut result);
    result
}

/// Shift a magnitude right by `bits`, returning a normalized limb vector.
/// Shifting past the top bit yields the empty (zero) magnitude.
pub(crate) fn shr_slices(mag: &[Limb], bits: usize) -> Vec<Limb> {
    if mag.is_empty() || bits == 0 {
        return mag.to_vec();
    }

    let limb_shift = bits / limb::BITS;
    let bit_shift = bits % limb::BITS;

    if limb_shift >= mag.len() {
        return Vec::new();
    }

    let kept = &mag[limb_shift..];
    let mut result;

    if bit_shift == 0 {
        result = kept.to_vec();
    } else {
        result = Vec::with_capacity(kept.len());
        for (i, &limb_val) in kept.iter().enumerate() {
            let next = kept.get(i + 1).copied().unwrap_or(0);
            result.push((limb_val >> bit_shift) | (next << (limb::BITS - bit_shift)));
        }
    }

    trim(&mut result);
    result
}
