//! Random BigInt generation
//!
//! Uniform non-negative values with a caller-supplied `rand::Rng`; nothing
//! here is suitable for cryptographic use.

use rand::Rng;

use crate::*;
use crate::limb::Limb;

/// Attempts made by `gen_bigint_range` before giving up
const RANGE_RETRY_BUDGET: usize = 100;

pub trait RandBigInt {
    /// Generate a uniformly random non-negative `BigInt` of at most
    /// `bits` bits.
    fn gen_bigint(&mut self, bits: usize) -> BigInt;

    /// Generate a uniformly random `BigInt` in `[min, max)` by rejection
    /// sampling.
    ///
    /// Draws carry 8 bits of slack over the range width, bounding the
    /// per-draw rejection odds below 2⁻⁸; `None` after the retry budget is
    /// exhausted. Panics unless `min < max`.
    fn gen_bigint_range(&mut self, min: &BigInt, max: &BigInt) -> Option<BigInt>;
}

impl<R: Rng + ?Sized> RandBigInt for R {
    fn gen_bigint(&mut self, bits: usize) -> BigInt {
        let limbs = bits / limb::BITS;
        let rem = bits % limb::BITS;

        let mut data = stdlib::Vec::with_capacity(limbs + 1);
        for _ in 0..limbs {
            data.push(self.gen::<Limb>());
        }
        if rem > 0 {
            // mask the top limb down to exactly `bits` bits
            let top: Limb = self.gen();
            data.push(top >> (limb::BITS - rem));
        }

        BigInt::from_limbs(Sign::Plus, data)
    }

    fn gen_bigint_range(&mut self, min: &BigInt, max: &BigInt) -> Option<BigInt> {
        assert!(min < max, "empty random range");

        let range = max - min;
        let bits = range.bit_length() as usize + 8;

        // accept only draws below the largest multiple of `range`, so the
        // final reduction cannot bias low residues
        let span = BigInt::one() << bits;
        let limit = &span - &(&span % &range);

        for _ in 0..RANGE_RETRY_BUDGET {
            let draw = self.gen_bigint(bits);
            if draw < limit {
                return Some(min + &(&draw % &range));
            }
        }

        None
    }
}

#[cfg(feature = "std")]
impl BigInt {
    /// `gen_bigint` over the thread-local generator
    pub fn random(bits: usize) -> BigInt {
        rand::thread_rng().gen_bigint(bits)
    }

    /// `gen_bigint_range` over the thread-local generator
    pub fn random_range(min: &BigInt, max: &BigInt) -> Option<BigInt> {
        rand::thread_rng().gen_bigint_range(min, max)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x00C0FFEE)
    }

    #[test]
    fn test_zero_bits_is_zero() {
        assert!(rng().gen_bigint(0).is_zero());
    }

    #[test]
    fn test_bit_length_bound() {
        let mut rng = rng();
        for bits in [1usize, 7, 31, 32, 33, 64, 257] {
            for _ in 0..20 {
                let value = rng.gen_bigint(bits);
                assert!(value.bit_length() <= bits as u64);
                assert!(value.sign() != Sign::Minus);
            }
        }
    }

    #[test]
    fn test_high_bits_vary() {
        // drawing 64 draws of 64 bits, at least one must fill the top bit
        let mut rng = rng();
        let full = (0..64).any(|_| rng.gen_bigint(64).bit_length() == 64);
        assert!(full);
    }

    #[test]
    fn test_range_bounds() {
        let mut rng = rng();
        let min: BigInt = "-1000000000000000000000".parse().unwrap();
        let max: BigInt = "1000000000000000000001".parse().unwrap();

        for _ in 0..200 {
            let value = rng.gen_bigint_range(&min, &max).unwrap();
            assert!(value >= min);
            assert!(value < max);
        }
    }

    #[test]
    fn test_single_value_range() {
        let mut rng = rng();
        let value = rng.gen_bigint_range(&BigInt::from(7), &BigInt::from(8));
        assert_eq!(value, Some(BigInt::from(7)));
    }

    #[test]
    fn test_range_hits_both_halves() {
        let mut rng = rng();
        let mid = BigInt::from(500);
        let (mut low, mut high) = (0, 0);

        for _ in 0..100 {
            let value = rng
                .gen_bigint_range(&BigInt::zero(), &BigInt::from(1000))
                .unwrap();
            if value < mid {
                low += 1;
            } else {
                high += 1;
            }
        }

        assert!(low > 10, "suspiciously few low draws: {}", low);
        assert!(high > 10, "suspiciously few high draws: {}", high);
    }

    #[test]
    #[should_panic(expected = "empty random range")]
    fn test_empty_range_panics() {
        let _ = rng().gen_bigint_range(&BigInt::from(5), &BigInt::from(5));
    }
}
