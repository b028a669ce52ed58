//! Decode helpers for loosely typed API payloads
//!
//! The remote services send `null` for absent values and occasionally
//! serialize counters as floats. Both decode to a usable default.

use serde::{Deserialize, Deserializer};

/// Decode `null` as the type's default
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Decode a non-negative count sent as an integer, a float or `null`
pub(crate) fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    // `as` truncates and saturates at u64::MAX
    Ok(value
        .filter(|v| v.is_finite() && *v > 0.0)
        .map_or(0, |v| v as u64))
}

/// Same as [`count`], saturating at `u32::MAX`
pub(crate) fn quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    count(deserializer).map(|n| u32::try_from(n).unwrap_or(u32::MAX))
}
