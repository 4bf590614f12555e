//! Serialization with the serde crate
//!
//! Values travel as base-10 strings, the one representation every consumer
//! can parse without knowing the limb layout.

use crate::*;
use stdlib::fmt;
use stdlib::str::FromStr;

use serde_crate as serde;

impl serde::Serialize for BigInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for BigInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(BigIntVisitor)
    }
}

struct BigIntVisitor;

impl<'de> serde::de::Visitor<'de> for BigIntVisitor {
    type Value = BigInt;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a base-10 integer string")
    }

    fn visit_str<E>(self, value: &str) -> Result<BigInt, E>
    where
        E: serde::de::Error,
    {
        // strict, unlike the prefix-accepting parser: the whole string
        // must be a signed digit sequence
        let digits = value
            .strip_prefix('-')
            .or_else(|| value.strip_prefix('+'))
            .unwrap_or(value);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(E::custom(format_args!("invalid integer string {:?}", value)));
        }

        BigInt::from_str(value)
            .map_err(|err| E::custom(format_args!("{} ({:?})", err, value)))
    }

    fn visit_i64<E>(self, value: i64) -> Result<BigInt, E>
    where
        E: serde::de::Error,
    {
        Ok(BigInt::from(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<BigInt, E>
    where
        E: serde::de::Error,
    {
        Ok(BigInt::from(value))
    }
}
