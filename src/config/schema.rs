//! Configuration schema for the dashboard.
//!
//! This module defines the configuration structure and validation logic for
//! every user-configurable setting. The rate-limit settings are display-only:
//! they are shown in the dashboard header and never enforced.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Allowed range for `max_requests`.
pub const MAX_REQUESTS_RANGE: RangeInclusive<u32> = 1..=100;

/// Allowed range for `window_size`, in seconds.
pub const WINDOW_SIZE_RANGE: RangeInclusive<u64> = 10..=300;

/// Allowed range for both ends of `delay_range`, in seconds.
pub const DELAY_BOUNDS: RangeInclusive<f64> = 0.1..=3.0;

/// Allowed range for `history_limit`.
pub const HISTORY_LIMIT_RANGE: RangeInclusive<usize> = 1..=50;

/// Errors produced when configuration values are out of range or unreadable.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A numeric setting fell outside its allowed range.
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: String,
        min: String,
        max: String,
    },

    /// The lower delay bound is above the upper one.
    #[error("delayRange lower bound {low} must not exceed upper bound {high}")]
    InvertedDelayRange { low: f64, high: f64 },

    /// An unknown setting name was given to `set`.
    #[error("Unknown setting: {0}")]
    UnknownSetting(String),

    /// A setting value could not be parsed.
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },

    /// The settings file could not be read.
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid JSON.
    #[error("Failed to parse settings file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Main configuration structure for the dashboard.
///
/// Settings are read from the `"dashboard"` key of a JSON settings document.
/// Missing settings fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardConfig {
    /// Maximum requests per minute.
    ///
    /// Display-only. Defaults to 10; must be within 1..=100.
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,

    /// Rate-limit time window in seconds.
    ///
    /// Display-only. Defaults to 60; must be within 10..=300.
    #[serde(default = "default_window_size")]
    pub window_size: u64,

    /// Whether to pause for the midpoint of `delay_range` before processing.
    ///
    /// When disabled a fixed 0.1 s pause is still applied. Defaults to true.
    #[serde(default = "default_simulate_delay")]
    pub simulate_delay: bool,

    /// Simulated delay bounds in seconds as `[low, high]`.
    ///
    /// Defaults to `[0.5, 1.5]`; both ends within 0.1..=3.0 and `low <= high`.
    #[serde(default = "default_delay_range")]
    pub delay_range: (f64, f64),

    /// Maximum number of history entries kept per session.
    ///
    /// Defaults to 50; must be within 1..=50.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            max_requests: default_max_requests(),
            window_size: default_window_size(),
            simulate_delay: default_simulate_delay(),
            delay_range: default_delay_range(),
            history_limit: default_history_limit(),
        }
    }
}

impl DashboardConfig {
    /// Validates the configuration.
    ///
    /// # Returns
    ///
    /// `Ok(())` if all settings are valid, or the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("maxRequests", self.max_requests, &MAX_REQUESTS_RANGE)?;
        check_range("windowSize", self.window_size, &WINDOW_SIZE_RANGE)?;
        check_range("historyLimit", self.history_limit, &HISTORY_LIMIT_RANGE)?;

        let (low, high) = self.delay_range;
        check_range("delayRange", low, &DELAY_BOUNDS)?;
        check_range("delayRange", high, &DELAY_BOUNDS)?;
        if low > high {
            return Err(ConfigError::InvertedDelayRange { low, high });
        }

        Ok(())
    }
}

fn check_range<T>(field: &'static str, value: T, range: &RangeInclusive<T>) -> Result<(), ConfigError>
where
    T: PartialOrd + ToString,
{
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value: value.to_string(),
            min: range.start().to_string(),
            max: range.end().to_string(),
        })
    }
}

// Default value functions for serde

fn default_max_requests() -> u32 {
    10
}

fn default_window_size() -> u64 {
    60
}

fn default_simulate_delay() -> bool {
    true
}

fn default_delay_range() -> (f64, f64) {
    (0.5, 1.5)
}

fn default_history_limit() -> usize {
    50
}
