//! primality testing by trial division

use crate::*;
use super::sqrt;

/// Deterministic trial-division primality test.
///
/// Divides by odd candidates up to ⌊√n⌋. Values that fit a machine word
/// take the native path; anything larger runs the same loop over `BigInt`
/// division (slow, but exact at any size).
pub(crate) fn impl_is_prime(n: &BigInt) -> bool {
    if n.sign() == Sign::Minus {
        return false;
    }

    if let Some(small) = n.to_u64() {
        return is_prime_u64(small);
    }

    // no u64-sized factor shortcut applies; n here is at least 2^64
    if n.is_even() {
        return false;
    }

    let limit = sqrt::impl_sqrt(n);
    let mut candidate = BigInt::from(3);
    while candidate <= limit {
        if (n % &candidate).is_zero() {
            return false;
        }
        candidate = candidate + 2;
    }
    true
}

fn is_prime_u64(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 || n == 3 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    // square in 128 bits: near u64::MAX the candidate square would wrap
    let mut candidate: u64 = 3;
    while (candidate as u128) * (candidate as u128) <= n as u128 {
        if n % candidate == 0 {
            return false;
        }
        candidate += 2;
    }
    true
}

/// Smallest prime ≥ 2 reachable from n by the odd-step search.
///
/// Anything below 2 maps to 2; an even starting point steps to the next odd
/// number first, so `next_prime(2) == 3`.
pub(crate) fn impl_next_prime(n: &BigInt) -> BigInt {
    let two = BigInt::from(2);
    if n < &two {
        return two;
    }

    let mut candidate = n.clone();
    if candidate.is_even() {
        candidate = candidate + 1;
    }

    while !impl_is_prime(&candidate) {
        candidate = candidate + 2;
    }
    candidate
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_small_values() {
        let primes = [2u32, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];
        for p in 0..50u32 {
            assert_eq!(
                impl_is_prime(&BigInt::from(p)),
                primes.contains(&p),
                "misclassified {}", p
            );
        }
    }

    #[test]
    fn test_negative_values_are_composite() {
        assert!(!impl_is_prime(&BigInt::from(-7)));
        assert!(!impl_is_prime(&BigInt::from(-2)));
    }

    #[test]
    fn test_carmichael_number() {
        // 561 = 3·11·17 fools naive Fermat tests; trial division does not care
        assert!(!impl_is_prime(&BigInt::from(561)));
    }

    #[test]
    fn test_large_word_sized() {
        assert!(impl_is_prime(&BigInt::from(1_000_003)));
        assert!(!impl_is_prime(&BigInt::from(1_000_001)));

        // largest prime below 2^32
        assert!(impl_is_prime(&BigInt::from(4294967291u64)));
    }

    macro_rules! impl_next_prime_case {
        ($name:ident: $n:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let result = impl_next_prime(&BigInt::from($n));
                assert_eq!(result, BigInt::from($expected));
            }
        };
    }

    impl_next_prime_case!(case_neg: -5 => 2);
    impl_next_prime_case!(case_0: 0 => 2);
    impl_next_prime_case!(case_1: 1 => 2);
    impl_next_prime_case!(case_2: 2 => 3);
    impl_next_prime_case!(case_3: 3 => 3);
    impl_next_prime_case!(case_4: 4 => 5);
    impl_next_prime_case!(case_90: 90 => 97);
    impl_next_prime_case!(case_7919: 7918 => 7919);
}
