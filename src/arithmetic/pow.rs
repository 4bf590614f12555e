//! pow implementation

use crate::*;

/// Raise to a native exponent by binary exponentiation
///
/// Algorithm comes from https://en.wikipedia.org/wiki/Exponentiation_by_squaring
pub(crate) fn impl_pow(base: &BigInt, exp: u32) -> BigInt {
    if exp == 0 {
        return BigInt::one();
    }

    let mut result = BigInt::one();
    let mut x = base.clone();
    let mut n = exp;

    while n > 1 {
        if n % 2 == 1 {
            result = &result * &x;
            n -= 1;
        }
        x = &x * &x;
        n /= 2;
    }

    result * x
}

#[cfg(test)]
mod test {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $base:literal ** $exp:literal => $expected:expr) => {
            #[test]
            fn $name() {
                let base = BigInt::from($base);
                let expected: BigInt = $expected;

                assert_eq!(impl_pow(&base, $exp), expected);
            }
        };
    }

    impl_case!(case_0_0: 0 ** 0 => BigInt::one());
    impl_case!(case_0_5: 0 ** 5 => BigInt::zero());
    impl_case!(case_3_4: 3 ** 4 => BigInt::from(81));
    impl_case!(case_neg2_3: -2 ** 3 => BigInt::from(-8));
    impl_case!(case_neg2_8: -2 ** 8 => BigInt::from(256));
    impl_case!(case_2_100: 2 ** 100 => "1267650600228229401496703205376".parse().unwrap());
    impl_case!(case_10_40: 10 ** 40 => "10000000000000000000000000000000000000000".parse().unwrap());
}
