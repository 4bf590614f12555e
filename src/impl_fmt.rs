//! Implementation of std::fmt traits & other stringification routines

use crate::*;
use stdlib::fmt;
use stdlib::{String, Vec};

use crate::arithmetic::division::div_rem_limb;
use crate::limb::Limb;

impl BigInt {
    /// Format in any radix from 2 to 36, exactly.
    ///
    /// Digits beyond 9 are lowercase letters; negative values get a leading
    /// `-` and zero is `"0"` in every base. Panics for a radix outside the
    /// supported range.
    pub fn to_str_radix(&self, radix: u32) -> String {
        let mut result = String::new();
        if self.sign() == Sign::Minus {
            result.push('-');
        }
        result.push_str(&magnitude_to_str_radix(self.magnitude(), radix));
        result
    }
}

/// Stringify a magnitude by repeated division, least significant digits
/// first. Each division peels off a full limb-sized chunk of digits, so the
/// quadratic part runs per chunk rather than per digit.
pub(crate) fn magnitude_to_str_radix(mag: &[Limb], radix: u32) -> String {
    assert!(
        (2..=36).contains(&radix),
        "radix must be within 2..=36, got {}", radix
    );

    if mag.is_empty() {
        return String::from("0");
    }

    let (chunk_base, chunk_len) = crate::arithmetic::radix_chunk(radix);

    // digits collect in reverse order
    let mut digits: Vec<u8> = Vec::new();
    let mut rest = mag.to_vec();

    while !rest.is_empty() {
        let (quotient, chunk) = div_rem_limb(&rest, chunk_base);

        let mut chunk = chunk as u32;
        if quotient.is_empty() {
            // top chunk: no zero padding
            while chunk > 0 {
                digits.push((chunk % radix) as u8);
                chunk /= radix;
            }
        } else {
            for _ in 0..chunk_len {
                digits.push((chunk % radix) as u8);
                chunk /= radix;
            }
        }

        rest = quotient;
    }

    digits
        .iter()
        .rev()
        .map(|&d| stdlib::char::from_digit(d as u32, radix).unwrap())
        .collect()
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digits = magnitude_to_str_radix(self.magnitude(), 10);
        f.pad_integral(self.sign() != Sign::Minus, "", &digits)
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.alternate() {
            write!(f,
                "BigInt(sign={:?}, limbs={:?})",
                self.sign(), self.magnitude()
            )
        } else {
            write!(f, "BigInt({})", self)
        }
    }
}

impl fmt::Binary for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digits = magnitude_to_str_radix(self.magnitude(), 2);
        f.pad_integral(self.sign() != Sign::Minus, "0b", &digits)
    }
}

impl fmt::Octal for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digits = magnitude_to_str_radix(self.magnitude(), 8);
        f.pad_integral(self.sign() != Sign::Minus, "0o", &digits)
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digits = magnitude_to_str_radix(self.magnitude(), 16);
        f.pad_integral(self.sign() != Sign::Minus, "0x", &digits)
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut digits = magnitude_to_str_radix(self.magnitude(), 16);
        digits.make_ascii_uppercase();
        f.pad_integral(self.sign() != Sign::Minus, "0x", &digits)
    }
}
