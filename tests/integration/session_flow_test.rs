//! End-to-end tests for a dashboard session
//!
//! These tests drive a [`Dashboard`] through console lines exactly as the
//! binary does, with the simulated delay recorded instead of slept.

use super::{instant_dashboard, instant_dashboard_with};
use std::time::Duration;
use transform_dashboard::config::DashboardConfig;
use transform_dashboard::history::DEFAULT_MAX_HISTORY_ENTRIES;
use transform_dashboard::transform::TransformMode;

#[test]
fn test_process_each_mode() {
    let mut dashboard = instant_dashboard();

    let cases = [
        ("uppercase", "hello world", "HELLO WORLD"),
        ("reverse", "abc", "cba"),
        ("count", "hello world", "Characters: 11, Words: 2"),
        ("base64", "hi", "Base64: aGk="),
        ("md5", "abc", "MD5: 900150983cd24fb0d6963f7d28e17f72"),
        (
            "word-frequency",
            "the cat and the dog",
            "Most frequent word: 'the' (2 times)",
        ),
    ];

    for (mode, input, expected) in cases {
        let outcome = dashboard.dispatch(&format!("process {} {}", mode, input));
        assert!(
            outcome.output.contains(expected),
            "mode {} should produce {:?}, got:\n{}",
            mode,
            expected,
            outcome.output
        );
        assert_eq!(dashboard.last_output().unwrap().output, expected);
    }

    assert_eq!(dashboard.session().total_operations(), 6);
    assert_eq!(dashboard.session().len(), 6);
    assert_eq!(
        dashboard.session().entries()[0].mode,
        TransformMode::WordFrequency
    );
}

#[test]
fn test_dashboard_metrics_after_processing() {
    let mut dashboard = instant_dashboard();
    dashboard.dispatch("process uppercase one");
    dashboard.dispatch("process reverse two");

    let view = dashboard.dispatch("dashboard").output;
    assert!(view.contains("API Rate Limiter"));
    assert!(view.contains("📊 Total Operations: 2"));
    assert!(view.contains("⏱️ Avg Processing Time: 1.00s"));
    assert!(view.contains("⚡ Recent Activity: 2/min"));
    assert!(view.contains("🟢 System Status: Online"));
    assert!(view.contains("📋 Last 2 Operations"));
}

#[test]
fn test_simulated_delay_is_range_midpoint() {
    let mut config = DashboardConfig::default();
    config.delay_range = (0.2, 0.6);
    let mut dashboard = instant_dashboard_with(config);

    dashboard.dispatch("process count a");
    dashboard.dispatch("set simulate-delay off");
    dashboard.dispatch("process count b");

    let requested = dashboard.sleeper().requested.borrow().clone();
    assert_eq!(requested.len(), 2);
    assert!((requested[0].as_secs_f64() - 0.4).abs() < 1e-9);
    assert_eq!(requested[1], Duration::from_millis(100));

    for entry in dashboard.session().entries() {
        assert!(entry.processing_time > 0.0);
    }
}

#[test]
fn test_history_is_bounded_to_fifty() {
    let mut dashboard = instant_dashboard();
    for i in 1..=51 {
        dashboard.dispatch(&format!("process uppercase request {}", i));
    }

    let session = dashboard.session();
    assert_eq!(session.len(), DEFAULT_MAX_HISTORY_ENTRIES);
    assert_eq!(session.total_operations(), 51);
    assert_eq!(session.entries()[0].full_input, "request 51");
    assert!(session
        .entries()
        .iter()
        .all(|entry| entry.full_input != "request 1"));
}

#[test]
fn test_blank_input_leaves_session_untouched() {
    let mut dashboard = instant_dashboard();
    dashboard.dispatch("process uppercase kept");

    dashboard.dispatch("input    ");
    let outcome = dashboard.dispatch("run");

    assert!(outcome.output.contains("Please enter some text to process"));
    assert_eq!(dashboard.session().total_operations(), 1);
    assert_eq!(dashboard.last_output().unwrap().output, "KEPT");
    assert_eq!(dashboard.sleeper().requested.borrow().len(), 1);
}

#[test]
fn test_clear_then_continue() {
    let mut dashboard = instant_dashboard();
    dashboard.dispatch("process reverse abc");
    dashboard.dispatch("process reverse def");

    let cleared = dashboard.dispatch("clear").output;
    assert!(cleared.contains("History cleared!"));
    assert!(cleared.contains("📊 Total Operations: 0"));
    assert!(cleared.contains("No processing history yet"));

    // Clearing twice is harmless
    dashboard.dispatch("clear");
    assert_eq!(dashboard.session().total_operations(), 0);

    dashboard.dispatch("process reverse xyz");
    assert_eq!(dashboard.session().total_operations(), 1);
    assert_eq!(dashboard.session().entries()[0].full_output, "zyx");
}

#[test]
fn test_long_input_is_previewed_but_kept_whole() {
    let mut dashboard = instant_dashboard();
    let long_input = "word ".repeat(40);
    dashboard.dispatch(&format!("process count {}", long_input));

    let entry = &dashboard.session().entries()[0];
    assert_eq!(entry.full_input, long_input);
    assert!(entry.input_preview.ends_with("..."));
    assert_eq!(entry.input_preview.chars().count(), 103);
    assert_eq!(entry.full_output, "Characters: 200, Words: 40");
}

#[test]
fn test_analytics_and_performance_panels() {
    let mut dashboard = instant_dashboard();
    assert!(dashboard
        .dispatch("analytics")
        .output
        .contains("No processing history yet"));

    dashboard.dispatch("process uppercase a");
    assert!(dashboard
        .dispatch("performance")
        .output
        .contains("at least two operations"));

    dashboard.dispatch("process uppercase b");
    dashboard.dispatch("process md5 c");

    let analytics = dashboard.dispatch("analytics").output;
    assert!(analytics.contains("Processing Mode Distribution"));
    assert!(analytics.contains("(66.7%)"));
    assert!(analytics.contains("(33.3%)"));

    let performance = dashboard.dispatch("performance").output;
    assert!(performance.contains("Fastest Processing:"));
    assert!(performance.contains("Slowest Processing:"));
    assert!(performance.contains("Standard Deviation:"));
}

#[test]
fn test_export_round_trips_entries() {
    let mut dashboard = instant_dashboard();
    dashboard.dispatch("process base64 hello");
    dashboard.dispatch("process reverse hello");

    let json = dashboard.dispatch("export").output;
    let entries: Vec<transform_dashboard::HistoryEntry> =
        serde_json::from_str(&json).expect("export should be valid JSON");

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].mode, TransformMode::Reverse);
    assert_eq!(entries[1].full_output, "Base64: aGVsbG8=");
    assert_eq!(entries[0].id, dashboard.session().entries()[0].id);
}

#[test]
fn test_sessions_are_independent() {
    let mut first = instant_dashboard();
    let mut second = instant_dashboard();

    first.dispatch("process uppercase only in first");
    second.dispatch("mode md5");

    assert_eq!(first.session().total_operations(), 1);
    assert_eq!(second.session().total_operations(), 0);
    assert_eq!(first.selected_mode(), TransformMode::Uppercase);
    assert_eq!(second.selected_mode(), TransformMode::Md5Hash);
}

#[test]
fn test_unknown_input_is_reported_inline() {
    let mut dashboard = instant_dashboard();

    let unknown = dashboard.dispatch("launch rockets");
    assert!(unknown.output.starts_with("❌ Unknown command: launch"));
    assert!(!unknown.quit);

    let bad_mode = dashboard.dispatch("process rot13 text");
    assert!(bad_mode.output.contains("Unknown processing mode: rot13"));
    assert_eq!(dashboard.session().total_operations(), 0);
}
