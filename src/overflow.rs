//! Fixed-width arithmetic with promotion on overflow
//!
//! These helpers back the "grow into a BigInt when the machine word runs
//! out" workflow: each returns the native result while it fits, and the
//! exact arbitrary-precision result once it does not.

use crate::BigInt;

/// i32 addition, promoting to `BigInt` on overflow
pub fn add_i32(a: i32, b: i32) -> Result<i32, BigInt> {
    match a.checked_add(b) {
        Some(v) => Ok(v),
        None => Err(BigInt::from(a as i64 + b as i64)),
    }
}

/// i32 subtraction, promoting to `BigInt` on overflow
pub fn sub_i32(a: i32, b: i32) -> Result<i32, BigInt> {
    match a.checked_sub(b) {
        Some(v) => Ok(v),
        None => Err(BigInt::from(a as i64 - b as i64)),
    }
}

/// i32 multiplication, promoting to `BigInt` on overflow
pub fn mul_i32(a: i32, b: i32) -> Result<i32, BigInt> {
    match a.checked_mul(b) {
        Some(v) => Ok(v),
        None => Err(BigInt::from(a as i64 * b as i64)),
    }
}

/// i64 addition, promoting to `BigInt` on overflow
pub fn add_i64(a: i64, b: i64) -> Result<i64, BigInt> {
    match a.checked_add(b) {
        Some(v) => Ok(v),
        None => Err(BigInt::from(a as i128 + b as i128)),
    }
}

/// i64 subtraction, promoting to `BigInt` on overflow
pub fn sub_i64(a: i64, b: i64) -> Result<i64, BigInt> {
    match a.checked_sub(b) {
        Some(v) => Ok(v),
        None => Err(BigInt::from(a as i128 - b as i128)),
    }
}

/// i64 multiplication, promoting to `BigInt` on overflow
pub fn mul_i64(a: i64, b: i64) -> Result<i64, BigInt> {
    match a.checked_mul(b) {
        Some(v) => Ok(v),
        None => Err(BigInt::from(a as i128 * b as i128)),
    }
}
