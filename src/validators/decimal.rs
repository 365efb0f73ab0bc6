//! Serde adapter for arbitrary-precision decimals carried as plain strings.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

/// True for `[-]digits[.digits]`, the only shape the node uses for UI amounts.
pub fn is_plain_decimal(value: &str) -> bool {
    let unsigned = value.strip_prefix('-').unwrap_or(value);
    let (int, frac) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };
    !int.is_empty()
        && int.bytes().all(|b| b.is_ascii_digit())
        && frac.map_or(true, |frac| !frac.is_empty() && frac.bytes().all(|b| b.is_ascii_digit()))
}

pub fn serialize<S>(value: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_plain_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<BigDecimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    if !is_plain_decimal(value.trim()) {
        return Err(D::Error::custom(format!("invalid decimal {value:?}")));
    }
    BigDecimal::from_str(value.trim())
        .map_err(|err| D::Error::custom(format!("invalid decimal {value:?}: {err}")))
}
