//! Configuration file loading tests
//!
//! Settings files are written to a temporary directory and loaded the way
//! the `dashboard` binary loads them.

use super::instant_dashboard_with;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use transform_dashboard::config::{load_config_file, ConfigError, DashboardConfig};

/// Helper to write a settings file into a fresh temp dir
fn write_settings(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("settings.json");
    fs::write(&path, content).expect("Failed to write settings file");
    (temp_dir, path)
}

#[test]
fn test_load_full_settings_file() {
    let (_dir, path) = write_settings(
        r#"{
            "dashboard": {
                "maxRequests": 42,
                "windowSize": 120,
                "simulateDelay": false,
                "delayRange": [0.2, 0.8],
                "historyLimit": 5
            }
        }"#,
    );

    let config = load_config_file(&path).unwrap();
    assert_eq!(config.max_requests, 42);
    assert_eq!(config.window_size, 120);
    assert!(!config.simulate_delay);
    assert_eq!(config.delay_range, (0.2, 0.8));
    assert_eq!(config.history_limit, 5);
}

#[test]
fn test_partial_settings_keep_defaults() {
    let (_dir, path) = write_settings(r#"{ "dashboard": { "windowSize": 30 } }"#);

    let config = load_config_file(&path).unwrap();
    let defaults = DashboardConfig::default();
    assert_eq!(config.window_size, 30);
    assert_eq!(config.max_requests, defaults.max_requests);
    assert_eq!(config.delay_range, defaults.delay_range);
}

#[test]
fn test_file_without_dashboard_section_uses_defaults() {
    let (_dir, path) = write_settings(r#"{ "editor": { "fontSize": 14 } }"#);
    assert_eq!(load_config_file(&path).unwrap(), DashboardConfig::default());
}

#[test]
fn test_out_of_range_setting_is_rejected() {
    let (_dir, path) = write_settings(r#"{ "dashboard": { "maxRequests": 0 } }"#);

    match load_config_file(&path) {
        Err(ConfigError::OutOfRange { field, .. }) => assert_eq!(field, "maxRequests"),
        other => panic!("expected OutOfRange, got {:?}", other),
    }
}

#[test]
fn test_inverted_delay_range_is_rejected() {
    let (_dir, path) = write_settings(r#"{ "dashboard": { "delayRange": [2.0, 1.0] } }"#);
    assert!(matches!(
        load_config_file(&path),
        Err(ConfigError::InvertedDelayRange { .. })
    ));
}

#[test]
fn test_malformed_file_is_an_error() {
    let (_dir, path) = write_settings("{ not json");
    assert!(matches!(load_config_file(&path), Err(ConfigError::Json(_))));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = load_config_file(&dir.path().join("absent.json"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_loaded_history_limit_bounds_session() {
    let (_dir, path) = write_settings(r#"{ "dashboard": { "historyLimit": 3 } }"#);
    let mut dashboard = instant_dashboard_with(load_config_file(&path).unwrap());

    for i in 0..6 {
        dashboard.dispatch(&format!("process reverse {}", i));
    }

    assert_eq!(dashboard.session().len(), 3);
    assert_eq!(dashboard.session().total_operations(), 6);
    assert_eq!(dashboard.session().entries()[0].full_input, "5");
}

#[test]
fn test_loaded_settings_shown_in_config_panel() {
    let (_dir, path) = write_settings(
        r#"{ "dashboard": { "maxRequests": 7, "delayRange": [0.4, 0.4] } }"#,
    );
    let mut dashboard = instant_dashboard_with(load_config_file(&path).unwrap());

    let panel = dashboard.dispatch("config").output;
    assert!(panel.contains("max-requests:   7"));
    assert!(panel.contains("delay-range:    0.4s - 0.4s"));
}
