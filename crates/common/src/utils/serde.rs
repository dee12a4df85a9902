//! Serde adapters

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serializer};

/// `Duration` as an integer number of milliseconds
///
/// Helper configs store their delays this way so TOML and JSON documents
/// can write `delay = 250`.
///
/// ```rust
/// use std::time::Duration;
///
/// use awesome_common::duration_millis;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Window {
///     #[serde(with = "duration_millis")]
///     delay: Duration,
/// }
///
/// let window: Window = serde_json::from_str(r#"{"delay":250}"#).unwrap();
/// assert_eq!(window.delay, Duration::from_millis(250));
/// ```
pub mod duration_millis {
    use super::*;

    type SerializeResult<S> = Result<<S as Serializer>::Ok, <S as Serializer>::Error>;

    /// Write whole milliseconds, saturating at `u64::MAX`
    pub fn serialize<S>(duration: &Duration, serializer: S) -> SerializeResult<S>
    where
        S: Serializer,
    {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }

    /// Read milliseconds into a `Duration`
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
