//! Discovery options.

use std::time::Duration;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConfigError;

/// Largest accepted throttle timeout, in milliseconds.
pub const MAX_THROTTLE_TIMEOUT_MS: u64 = 60_000;

/// Name of the throttle field in a loosely-typed options object.
pub const THROTTLE_TIMEOUT_KEY: &str = "throttleTimeoutMS";

/// Options for a discovery run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct FindOptions {
    /// Minimum milliseconds between two progress deliveries (0 = deliver
    /// every match).
    #[builder(default = "0")]
    #[serde(rename = "throttleTimeoutMS", default)]
    pub throttle_timeout_ms: u64,
}

impl FindOptionsBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.throttle_timeout_ms {
            Some(ms) if ms > MAX_THROTTLE_TIMEOUT_MS => Err(ConfigError::ThrottleOutOfRange {
                value: ms as f64,
            }
            .to_string()),
            _ => Ok(()),
        }
    }
}

impl FindOptions {
    /// Create a new options builder.
    pub fn builder() -> FindOptionsBuilder {
        FindOptionsBuilder::default()
    }

    /// Options with the given throttle timeout. Not validated until the scan
    /// is created.
    pub fn with_throttle_ms(throttle_timeout_ms: u64) -> Self {
        Self {
            throttle_timeout_ms,
        }
    }

    /// Parse options from a loosely-typed JSON value.
    ///
    /// `throttleTimeoutMS` is optional; when present it must be a number in
    /// `[0, 60000]`. Fractional values are truncated.
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        let object = value.as_object().ok_or(ConfigError::OptionsNotObject)?;

        let Some(raw) = object.get(THROTTLE_TIMEOUT_KEY) else {
            return Ok(Self::default());
        };
        let ms = raw.as_f64().ok_or(ConfigError::ThrottleNotNumeric)?;
        if !(0.0..=MAX_THROTTLE_TIMEOUT_MS as f64).contains(&ms) {
            return Err(ConfigError::ThrottleOutOfRange { value: ms });
        }

        Ok(Self::with_throttle_ms(ms as u64))
    }

    /// Check the options against the accepted ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.throttle_timeout_ms > MAX_THROTTLE_TIMEOUT_MS {
            return Err(ConfigError::ThrottleOutOfRange {
                value: self.throttle_timeout_ms as f64,
            });
        }
        Ok(())
    }

    /// The throttle timeout as a duration.
    pub fn throttle_interval(&self) -> Duration {
        Duration::from_millis(self.throttle_timeout_ms)
    }
}

impl Default for FindOptions {
    fn default() -> Self {
        Self::with_throttle_ms(0)
    }
}
