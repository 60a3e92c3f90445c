//! Integration tests module for the transform dashboard
//!
//! Shared helpers: a sleeper that records the requested delay instead of
//! blocking, and dashboard constructors built on it.

pub mod config_loading_test;
pub mod session_flow_test;

use std::cell::RefCell;
use std::sync::Once;
use std::time::Duration;
use transform_dashboard::commands::Dashboard;
use transform_dashboard::config::DashboardConfig;
use transform_dashboard::executor::Sleeper;

static INIT: Once = Once::new();

/// Initialize test environment (run once)
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Records every requested delay without sleeping.
#[derive(Debug, Default)]
pub struct InstantSleeper {
    pub requested: RefCell<Vec<Duration>>,
}

impl Sleeper for InstantSleeper {
    fn sleep(&self, duration: Duration) {
        self.requested.borrow_mut().push(duration);
    }
}

/// Dashboard with default settings and no real delay.
pub fn instant_dashboard() -> Dashboard<InstantSleeper> {
    instant_dashboard_with(DashboardConfig::default())
}

pub fn instant_dashboard_with(config: DashboardConfig) -> Dashboard<InstantSleeper> {
    init_test_env();
    Dashboard::with_sleeper(config, InstantSleeper::default())
}
