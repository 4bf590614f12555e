//! Machine-word "limb" type and the carry/borrow kernels built on its
//! double-width companion.
//!
//! A `BigInt` magnitude is a little-endian sequence of limbs: the value is
//! Σᵢ limbs[i] · 2^(i·BITS). The limb width is chosen at build time through
//! `$RUST_BIGINT_LIMB_BITS` (16 or 32, default 32); `DoubleLimb` is always
//! wide enough to hold a full limb-by-limb product plus carry.

#[cfg(not(limb_bits_16))]
pub type Limb = u32;
#[cfg(not(limb_bits_16))]
pub type DoubleLimb = u64;

#[cfg(limb_bits_16)]
pub type Limb = u16;
#[cfg(limb_bits_16)]
pub type DoubleLimb = u32;

/// Bits per limb
pub const BITS: usize = Limb::BITS as usize;

/// Largest value a single limb can hold
pub const MAX: Limb = Limb::MAX;

/// One past `MAX`: the radix of the limb representation
pub const BASE: DoubleLimb = (MAX as DoubleLimb) + 1;

const LO_MASK: DoubleLimb = MAX as DoubleLimb;

#[inline]
fn get_hi(n: DoubleLimb) -> Limb {
    (n >> BITS) as Limb
}

#[inline]
fn get_lo(n: DoubleLimb) -> Limb {
    (n & LO_MASK) as Limb
}

/// Split one `DoubleLimb` into (high, low) limbs
#[inline]
pub fn from_double(n: DoubleLimb) -> (Limb, Limb) {
    (get_hi(n), get_lo(n))
}

/// Join two limbs into one `DoubleLimb`
#[inline]
pub fn to_double(hi: Limb, lo: Limb) -> DoubleLimb {
    (lo as DoubleLimb) | ((hi as DoubleLimb) << BITS)
}

/// Add with carry
#[inline]
pub fn adc(a: Limb, b: Limb, carry: &mut Limb) -> Limb {
    let (hi, lo) = from_double(
        (a as DoubleLimb) + (b as DoubleLimb) + (*carry as DoubleLimb));

    *carry = hi;
    lo
}

/// Subtract with borrow
#[inline]
pub fn sbb(a: Limb, b: Limb, borrow: &mut Limb) -> Limb {
    let (hi, lo) = from_double(
        BASE
        + (a as DoubleLimb)
        - (b as DoubleLimb)
        - (*borrow as DoubleLimb));

    // hi is 1 unless the subtraction wrapped below zero
    *borrow = if hi == 0 { 1 } else { 0 };
    lo
}

/// Multiply-accumulate: a + b·c, low limb returned, high limb into carry
#[inline]
pub fn mac_with_carry(a: Limb, b: Limb, c: Limb, carry: &mut Limb) -> Limb {
    let (hi, lo) = from_double(
        (a as DoubleLimb)
        + (b as DoubleLimb) * (c as DoubleLimb)
        + (*carry as DoubleLimb));

    *carry = hi;
    lo
}

/// Divide the two-limb value (hi, lo) by a single limb divisor, returning
/// quotient and remainder.
///
/// The caller must ensure `hi < divisor` so the quotient fits in one limb.
#[inline]
pub fn div_wide(hi: Limb, lo: Limb, divisor: Limb) -> (Limb, Limb) {
    debug_assert!(hi < divisor);

    let lhs = to_double(hi, lo);
    let rhs = divisor as DoubleLimb;
    ((lhs / rhs) as Limb, (lhs % rhs) as Limb)
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_adc_no_carry() {
        let mut carry = 0;
        assert_eq!(adc(1, 2, &mut carry), 3);
        assert_eq!(carry, 0);
    }

    #[test]
    fn test_adc_with_carry() {
        let mut carry = 1;
        assert_eq!(adc(MAX, 0, &mut carry), 0);
        assert_eq!(carry, 1);
    }

    #[test]
    fn test_sbb_no_borrow() {
        let mut borrow = 0;
        assert_eq!(sbb(5, 3, &mut borrow), 2);
        assert_eq!(borrow, 0);
    }

    #[test]
    fn test_sbb_with_borrow() {
        let mut borrow = 0;
        assert_eq!(sbb(0, 1, &mut borrow), MAX);
        assert_eq!(borrow, 1);

        assert_eq!(sbb(1, 0, &mut borrow), 0);
        assert_eq!(borrow, 0);
    }

    #[test]
    fn test_mac_with_carry_saturated() {
        // MAX + MAX·MAX + MAX == MAX·BASE + MAX, the largest expressible value
        let mut carry = MAX;
        let lo = mac_with_carry(MAX, MAX, MAX, &mut carry);
        assert_eq!(lo, MAX);
        assert_eq!(carry, MAX);
    }

    #[test]
    fn test_div_wide() {
        let (q, r) = div_wide(1, 1, 2);
        assert_eq!(q as DoubleLimb, BASE / 2);
        assert_eq!(r, 1);
    }
}
