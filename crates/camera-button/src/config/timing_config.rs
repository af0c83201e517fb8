use crate::config::{
    default_long_press_delay, default_max_record_duration, default_min_record_duration,
};

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timing thresholds for the press gesture, serialized as seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingPolicy {
    /// Hold time before a press is promoted to a long-press.
    #[serde(default = "default_long_press_delay", with = "duration_secs")]
    pub long_press_delay: Duration,
    /// Recordings released before this duration report a too-short outcome.
    #[serde(default = "default_min_record_duration", with = "duration_secs")]
    pub min_record_duration: Duration,
    /// Recordings are ended automatically once this duration elapses.
    #[serde(default = "default_max_record_duration", with = "duration_secs")]
    pub max_record_duration: Duration,
}

impl Default for TimingPolicy {
    fn default() -> Self {
        Self {
            long_press_delay: default_long_press_delay(),
            min_record_duration: default_min_record_duration(),
            max_record_duration: default_max_record_duration(),
        }
    }
}

mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub(super) fn serialize<S: Serializer>(
        duration: &Duration,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(duration.as_secs_f64())
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs)
            .map_err(|e| D::Error::custom(format!("invalid duration {secs}: {e}")))
    }
}
