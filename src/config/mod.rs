//! Configuration management for the dashboard.
//!
//! Configuration is read from a JSON settings document under the
//! `"dashboard"` key and merged with defaults. There is no global instance:
//! the loaded [`DashboardConfig`] is owned by the session's
//! [`Dashboard`](crate::commands::Dashboard) and passed by reference.

pub mod schema;

pub use schema::{ConfigError, DashboardConfig};

use log::warn;
use serde_json::Value;
use std::path::Path;

/// Key of the dashboard section inside a settings document.
pub const SETTINGS_KEY: &str = "dashboard";

/// Loads configuration from a JSON settings value.
///
/// Reads the `"dashboard"` section, fills missing fields with defaults and
/// validates the result. A section that fails to deserialize is logged and
/// replaced by the defaults.
///
/// # Example
///
/// ```
/// use transform_dashboard::config::load_config;
/// use serde_json::json;
///
/// let settings = json!({
///     "dashboard": {
///         "maxRequests": 25,
///         "simulateDelay": false
///     }
/// });
///
/// let config = load_config(Some(settings)).unwrap();
/// assert_eq!(config.max_requests, 25);
/// assert!(!config.simulate_delay);
/// ```
pub fn load_config(settings_json: Option<Value>) -> Result<DashboardConfig, ConfigError> {
    let mut config = DashboardConfig::default();

    if let Some(section) = settings_json.as_ref().and_then(|s| s.get(SETTINGS_KEY)) {
        match serde_json::from_value::<DashboardConfig>(section.clone()) {
            Ok(user_config) => config = user_config,
            Err(e) => {
                warn!(
                    "Failed to parse {} settings: {}. Using defaults.",
                    SETTINGS_KEY, e
                );
            }
        }
    }

    config.validate()?;
    Ok(config)
}

/// Reads a JSON settings file and loads the dashboard section from it.
pub fn load_config_file(path: &Path) -> Result<DashboardConfig, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    let settings: Value = serde_json::from_str(&contents)?;
    load_config(Some(settings))
}

/// Returns a copy of `config` with one setting changed.
///
/// The key is matched case-insensitively with `-`/`_` ignored, so
/// `max-requests`, `max_requests` and `maxRequests` are equivalent. The
/// updated configuration is validated; on error `config` is left untouched.
///
/// # Arguments
///
/// * `config` - Current configuration
/// * `key` - Setting name
/// * `values` - Setting value(s); `delay-range` takes two
pub fn apply_setting(
    config: &DashboardConfig,
    key: &str,
    values: &[&str],
) -> Result<DashboardConfig, ConfigError> {
    let mut updated = config.clone();
    let normalized: String = key
        .chars()
        .filter(|c| !matches!(c, '-' | '_'))
        .flat_map(|c| c.to_lowercase())
        .collect();

    match normalized.as_str() {
        "maxrequests" => {
            updated.max_requests = parse_single("maxRequests", values)?;
        }
        "window" | "windowsize" => {
            updated.window_size = parse_single("windowSize", values)?;
        }
        "simulatedelay" | "delay" => {
            updated.simulate_delay = parse_toggle(values)?;
        }
        "delayrange" => match values {
            [low, high] => {
                updated.delay_range = (
                    parse_value("delayRange", low)?,
                    parse_value("delayRange", high)?,
                );
            }
            _ => {
                return Err(ConfigError::InvalidValue {
                    field: "delayRange",
                    value: values.join(" "),
                })
            }
        },
        "historylimit" => {
            updated.history_limit = parse_single("historyLimit", values)?;
        }
        _ => return Err(ConfigError::UnknownSetting(key.to_string())),
    }

    updated.validate()?;
    Ok(updated)
}

fn parse_single<T: std::str::FromStr>(
    field: &'static str,
    values: &[&str],
) -> Result<T, ConfigError> {
    match values {
        [value] => parse_value(field, value),
        _ => Err(ConfigError::InvalidValue {
            field,
            value: values.join(" "),
        }),
    }
}

fn parse_value<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        field,
        value: value.to_string(),
    })
}

fn parse_toggle(values: &[&str]) -> Result<bool, ConfigError> {
    match values {
        [value] => match value.to_lowercase().as_str() {
            "on" | "true" | "yes" | "1" => Ok(true),
            "off" | "false" | "no" | "0" => Ok(false),
            _ => Err(ConfigError::InvalidValue {
                field: "simulateDelay",
                value: value.to_string(),
            }),
        },
        _ => Err(ConfigError::InvalidValue {
            field: "simulateDelay",
            value: values.join(" "),
        }),
    }
}
