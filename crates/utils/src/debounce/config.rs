//! Configuration for debounced functions

use fnkit_core::{Error, Result, DEFAULT_DEBOUNCE_DELAY};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How a debounced function collapses calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebounceConfig {
    /// Quiet period after the last call before the trailing call fires
    #[serde(rename = "delay_ms", with = "duration_ms")]
    pub delay: Duration,
    /// Fire synchronously on the first call of a burst
    pub immediate: bool,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DEBOUNCE_DELAY,
            immediate: false,
        }
    }
}

impl DebounceConfig {
    /// Trailing-only debounce with the given quiet period
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub fn with_immediate(mut self, immediate: bool) -> Self {
        self.immediate = immediate;
        self
    }

    /// A zero delay would never collapse anything
    pub fn validate(&self) -> Result<()> {
        if self.delay.is_zero() {
            return Err(Error::configuration("debounce delay must be greater than zero"));
        }
        Ok(())
    }
}

mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(delay: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
