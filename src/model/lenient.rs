//! Field-level tolerance for hand-maintained records.
//!
//! A field holding a value of the wrong type (a number where a string belongs, `"yes"` for a
//! flag) deserializes to its default instead of rejecting the whole record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use tracing::debug;

/// Deserializes `T`, falling back to `T::default()` when the value has the wrong shape.
///
/// Syntax errors in the surrounding document still fail; only type mismatches are absorbed.
pub fn default_on_error<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match T::deserialize(&value) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            debug!(
                expected = std::any::type_name::<T>(),
                value = %value,
                error = %e,
                "Ignoring malformed field value"
            );
            Ok(T::default())
        }
    }
}
