//! Permissive numeric fields for the serde boundary.
//!
//! Animation inputs are never rejected for carrying the wrong JSON type. A numeric field that
//! holds a string, bool, object or null deserializes as `NaN`: present but invalid. It still
//! overrides whatever it is merged onto, and normalization then substitutes the default. Only a
//! missing key is `None`.

use serde::{Deserialize, Deserializer};

/// Deserialize any JSON value, turning non-numbers into `NaN`.
pub(crate) fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(Some(raw.as_f64().unwrap_or(f64::NAN)))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/lenient.rs"]
mod tests;
