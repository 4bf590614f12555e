//!
//! Long division on limb slices
//!
//! Quotient and remainder always come out of the same pass; the operator
//! impls pick whichever half they need.

use crate::stdlib::Vec;
use crate::stdlib::cmp::Ordering;
use crate::limb::{self, Limb};
use super::{cmp_slice, trim, trimmed};
use super::addition::add_assign_slice;
use super::subtraction::sub_assign_slice;
use super::multiplication::mul_slices;
use super::shift::{shl_slices, shr_slices};

/// Divide magnitude `u` by magnitude `d`, returning normalized
/// (quotient, remainder) limb vectors.
///
/// `d` must be non-empty; the zero-divisor precondition is enforced by the
/// sign layer before we get here.
pub(crate) fn div_rem_slices(u: &[Limb], d: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    debug_assert!(!d.is_empty(), "division by zero magnitude");

    if u.is_empty() {
        return (Vec::new(), Vec::new());
    }

    if d.len() == 1 {
        let (q, r) = div_rem_limb(u, d[0]);
        let r = if r == 0 { Vec::new() } else { vec![r] };
        return (q, r);
    }

    match cmp_slice(u, d) {
        Ordering::Less => return (Vec::new(), u.to_vec()),
        Ordering::Equal => return (vec![1], Vec::new()),
        Ordering::Greater => {}
    }

    // Knuth TAOCP vol 2 section 4.3.1, Algorithm D.
    //
    // Normalize so the divisor's top limb has its high bit set: quotient
    // digits are guessed from the leading limbs, and a large top divisor
    // limb keeps each guess within a couple of the true digit. Guesses that
    // overshoot are corrected by repeated subtraction before committing.
    let shift = d.last().unwrap().leading_zeros() as usize;
    let mut a = shl_slices(u, shift);
    let b = shl_slices(d, shift);

    let bn = *b.last().unwrap();
    let q_len = a.len() - b.len() + 1;
    let mut q = vec![0; q_len];

    for j in (0..q_len).rev() {
        // Guessing digit j of the quotient against limb b.len()-1 of the
        // divisor, so limbs of a below j + b.len() - 1 cannot contribute.
        let offset = j + b.len() - 1;
        if offset >= a.len() {
            continue;
        }

        // q0 << (j·BITS) is the quotient estimate; the shifts stay implicit
        // by operating on the a[j..] window below.
        let (mut q0, _) = div_rem_limb(trimmed(&a[offset..]), bn);
        let mut prod = mul_slices(&b, &q0);

        while cmp_slice(trimmed(&prod), trimmed(&a[j..])) == Ordering::Greater {
            sub_assign_slice(&mut q0, &[1]);
            sub_assign_slice(&mut prod, &b);
        }

        add_assign_slice(&mut q[j..], trimmed(&q0));
        sub_assign_slice(&mut a[j..], trimmed(&prod));
        trim(&mut a);
    }

    debug_assert!(cmp_slice(trimmed(&a), trimmed(&b)) == Ordering::Less);

    trim(&mut q);
    (q, shr_slices(&a, shift))
}

/// Divide a magnitude by a single limb, returning quotient and remainder
pub(crate) fn div_rem_limb(a: &[Limb], b: Limb) -> (Vec<Limb>, Limb) {
    debug_assert_ne!(b, 0, "division by zero limb");

    let mut rem = 0;
    let mut q = a.to_vec();
    for digit in q.iter_mut().rev() {
        let (quot, r) = limb::div_wide(rem, *digit, b);
        *digit = quot;
        rem = r;
    }

    trim(&mut q);
    (q, rem)
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::addition::add_slices;
    use crate::limb::{BITS, MAX};

    #[test]
    fn test_div_rem_limb() {
        assert_eq!(div_rem_limb(&[7], 2), (vec![3], 1));
        assert_eq!(div_rem_limb(&[0, 1], 2), (vec![1 << (BITS - 1)], 0));
        assert_eq!(div_rem_limb(&[MAX, MAX], MAX), (vec![1, 1], 0));
    }

    #[test]
    fn test_zero_dividend() {
        assert_eq!(div_rem_slices(&[], &[5, 1]), (vec![], vec![]));
    }

    #[test]
    fn test_smaller_dividend() {
        assert_eq!(div_rem_slices(&[3], &[5, 1]), (vec![], vec![3]));
    }

    #[test]
    fn test_equal_operands() {
        assert_eq!(div_rem_slices(&[5, 1], &[5, 1]), (vec![1], vec![]));
    }

    #[test]
    fn test_limb_boundary() {
        // B² / B == B remainder 0
        assert_eq!(div_rem_slices(&[0, 0, 1], &[0, 1]), (vec![0, 1], vec![]));
    }

    // rebuild q·b + r and check the division inverts it
    macro_rules! impl_roundtrip_case {
        ($name:ident: [$($q:expr),*] [$($b:expr),*] [$($r:expr),*]) => {
            #[test]
            fn $name() {
                let q: &[Limb] = &[$($q),*];
                let b: &[Limb] = &[$($b),*];
                let r: &[Limb] = &[$($r),*];
                debug_assert!(cmp_slice(r, b) == Ordering::Less);

                let u = add_slices(&mul_slices(q, b), r);

                let (q_out, r_out) = div_rem_slices(&u, b);
                assert_eq!(q_out, q);
                assert_eq!(r_out, r);
            }
        };
    }

    impl_roundtrip_case!(case_small: [1, 2, 3] [5, 7] [2, 3]);
    impl_roundtrip_case!(case_saturated: [MAX, MAX] [MAX, 1] [3]);
    impl_roundtrip_case!(case_zero_rem: [MAX, 0, MAX] [MAX, MAX] []);
    impl_roundtrip_case!(case_guess_correction: [MAX, MAX, MAX] [1, 0, 1] [0, MAX]);
    impl_roundtrip_case!(case_long: [1, 0, 0, 0, 1] [2, 0, MAX] [1]);
}
