//! Processing execution configuration.
//!
//! Derives the concrete simulated delay from the dashboard settings.

use crate::config::DashboardConfig;
use std::time::Duration;

/// Pause applied when delay simulation is switched off.
pub const BASELINE_DELAY: Duration = Duration::from_millis(100);

/// Configuration for one processing action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionConfig {
    /// Blocking pause before the transform runs.
    pub delay: Duration,
}

impl ExecutionConfig {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Creates an ExecutionConfig from the dashboard settings.
    ///
    /// The delay is the midpoint of the configured range when simulation is
    /// enabled, and [`BASELINE_DELAY`] otherwise. It is never random.
    pub fn from_dashboard_config(config: &DashboardConfig) -> Self {
        Self::new(simulated_delay(config))
    }
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self::from_dashboard_config(&DashboardConfig::default())
    }
}

/// Computes the simulated delay for the given settings.
pub fn simulated_delay(config: &DashboardConfig) -> Duration {
    if !config.simulate_delay {
        return BASELINE_DELAY;
    }

    let (low, high) = config.delay_range;
    let midpoint = low + (high - low) * 0.5;
    Duration::try_from_secs_f64(midpoint).unwrap_or(BASELINE_DELAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delay_is_midpoint() {
        let config = ExecutionConfig::default();
        assert_eq!(config.delay, Duration::from_secs(1));
    }

    #[test]
    fn test_midpoint_of_custom_range() {
        let dashboard = DashboardConfig {
            delay_range: (0.2, 0.6),
            ..DashboardConfig::default()
        };
        let delay = simulated_delay(&dashboard);
        assert!((delay.as_secs_f64() - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_baseline_when_simulation_disabled() {
        let dashboard = DashboardConfig {
            simulate_delay: false,
            delay_range: (2.0, 3.0),
            ..DashboardConfig::default()
        };
        assert_eq!(
            ExecutionConfig::from_dashboard_config(&dashboard).delay,
            BASELINE_DELAY
        );
    }
}
