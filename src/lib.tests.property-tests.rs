// Property-based tests, built only when RUSTFLAGS enables the
// property_tests cfg. Slow by design.

use proptest::prelude::*;

fn arb_bigint() -> impl Strategy<Value = BigInt> {
    (any::<bool>(), proptest::collection::vec(any::<u32>(), 0..8))
        .prop_map(|(negative, words)| {
            let mut value = words
                .into_iter()
                .fold(BigInt::zero(), |acc, w| (acc << 32) + BigInt::from(w));
            if negative {
                value = -value;
            }
            value
        })
}

proptest! {
    #[test]
    fn addition_commutes(a in arb_bigint(), b in arb_bigint()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn addition_associates(a in arb_bigint(), b in arb_bigint(), c in arb_bigint()) {
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
    }

    #[test]
    fn additive_inverse(a in arb_bigint()) {
        prop_assert!((&a + &(-&a)).is_zero());
    }

    #[test]
    fn multiplication_distributes(a in arb_bigint(), b in arb_bigint(), c in arb_bigint()) {
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }

    #[test]
    fn division_identity(a in arb_bigint(), b in arb_bigint()) {
        prop_assume!(!b.is_zero());

        let (q, r) = a.div_rem(&b);
        prop_assert_eq!(&(&q * &b) + &r, a.clone());
        prop_assert!(r.abs() < b.abs());
        if !r.is_zero() {
            prop_assert_eq!(r.sign(), a.sign());
        }
    }

    #[test]
    fn string_roundtrip(a in arb_bigint(), radix in 2u32..=36) {
        let s = a.to_str_radix(radix);
        prop_assert_eq!(BigInt::from_str_radix(&s, radix).unwrap(), a);
    }

    #[test]
    fn i64_roundtrip(v in any::<i64>()) {
        let x = BigInt::from(v);
        prop_assert_eq!(x.to_i64(), Some(v));
    }

    #[test]
    fn shift_left_multiplies_by_power_of_two(a in arb_bigint(), k in 0usize..200) {
        prop_assert_eq!(&a << k, &a * &BigInt::from(2).pow(k as u32));
    }

    #[test]
    fn sqrt_bounds(a in arb_bigint()) {
        let n = a.abs();
        let root = n.sqrt();

        prop_assert!(&root * &root <= n);
        let next = &root + 1;
        prop_assert!(&next * &next > n);
    }

    #[test]
    fn gcd_divides_operands(a in arb_bigint(), b in arb_bigint()) {
        let g = a.gcd(&b);
        prop_assume!(!g.is_zero());

        prop_assert!((&a % &g).is_zero());
        prop_assert!((&b % &g).is_zero());
    }
}
