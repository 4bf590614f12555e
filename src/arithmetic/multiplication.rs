//!
//! Schoolbook multiplication on limb slices
//!

use crate::stdlib::Vec;
use crate::limb::{self, Limb, DoubleLimb};
use super::trim;

/// Multiply two magnitudes, returning a normalized limb vector.
///
/// Classic O(n·m) schoolbook product: every limb pair is accumulated into a
/// double-width running sum whose high half carries into the next column.
pub(crate) fn mul_slices(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut acc = vec![0; a.len() + b.len()];

    for (i, &a_limb) in a.iter().enumerate() {
        if a_limb == 0 {
            continue;
        }

        let mut carry = 0;
        for (j, &b_limb) in b.iter().enumerate() {
            acc[i + j] = limb::mac_with_carry(acc[i + j], a_limb, b_limb, &mut carry);
        }

        // ripple the final carry up through previously written columns
        let mut k = i + b.len();
        while carry != 0 {
            let sum = acc[k] as DoubleLimb + carry as DoubleLimb;
            acc[k] = sum as Limb;
            carry = (sum >> limb::BITS) as Limb;
            k += 1;
        }
    }

    trim(&mut acc);
    acc
}

/// In-place `acc = acc·m + a`: one Horner step of string parsing
pub(crate) fn mul_add_limb(acc: &mut Vec<Limb>, m: Limb, a: Limb) {
    let mut carry = a as DoubleLimb;
    for limb_ref in acc.iter_mut() {
        let t = (*limb_ref as DoubleLimb) * (m as DoubleLimb) + carry;
        *limb_ref = t as Limb;
        carry = t >> limb::BITS;
    }
    if carry != 0 {
        acc.push(carry as Limb);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::limb::MAX;

    macro_rules! impl_case {
        ($name:ident: [$($a:literal),*] * [$($b:literal),*] == [$($c:literal),*]) => {
            #[test]
            fn $name() {
                let a: &[Limb] = &[$($a),*];
                let b: &[Limb] = &[$($b),*];
                let expected: &[Limb] = &[$($c),*];

                assert_eq!(mul_slices(a, b), expected);
                // multiplication commutes
                assert_eq!(mul_slices(b, a), expected);
            }
        };
    }

    impl_case!(case_zero_absorbs: [] * [3, 1] == []);
    impl_case!(case_one_identity: [1] * [3, 1] == [3, 1]);
    impl_case!(case_2_3: [2] * [3] == [6]);
    impl_case!(case_shifted: [0, 2] * [0, 3] == [0, 0, 6]);

    #[test]
    fn case_max_max() {
        // (B-1)² == B² - 2B + 1
        assert_eq!(mul_slices(&[MAX], &[MAX]), [1, MAX - 1]);
    }

    #[test]
    fn case_wide() {
        // (B²-1)² == B⁴ - 2B² + 1
        assert_eq!(mul_slices(&[MAX, MAX], &[MAX, MAX]), [1, 0, MAX - 1, MAX]);
    }

    #[test]
    fn test_mul_add_limb() {
        // 0·10 + 7 = 7
        let mut acc = Vec::new();
        mul_add_limb(&mut acc, 10, 7);
        assert_eq!(acc, [7]);

        // 7·10 + 3 = 73
        mul_add_limb(&mut acc, 10, 3);
        assert_eq!(acc, [73]);
    }

    #[test]
    fn test_mul_add_limb_carries() {
        let mut acc = vec![MAX];
        mul_add_limb(&mut acc, MAX, MAX);
        // MAX·MAX + MAX == MAX·BASE
        assert_eq!(acc, [0, MAX]);
    }
}
