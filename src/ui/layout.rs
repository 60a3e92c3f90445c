//! Dashboard layout rendering.
//!
//! Each `render_*` function draws one panel of the dashboard as plain text
//! from read-only state. Nothing here mutates the session.

use super::charts::{bar_chart, sparkline, DEFAULT_BAR_WIDTH};
use crate::commands::LastOutput;
use crate::config::DashboardConfig;
use crate::executor::simulated_delay;
use crate::history::{
    format_history_details, format_history_list, get_recent_entries, mode_distribution,
    processing_time_stats, timeline, SessionState, RECENT_ACTIVITY_WINDOW,
};
use crate::transform::TransformMode;

/// Product name shown in the header.
pub const APP_TITLE: &str = "🛡️ API Rate Limiter";

/// Number of entries shown in the recent-operations panel.
pub const RECENT_OPERATIONS_LIMIT: usize = 10;

const RULE: &str = "────────────────────────────────────────────────────────────";

const EMPTY_HISTORY_MESSAGE: &str =
    "🔄 No processing history yet. Process some input to see analytics here.";

/// Title bar with the (display-only) rate-limit settings.
pub fn render_header(config: &DashboardConfig) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", APP_TITLE));
    output.push_str("Intelligent traffic control and request management\n");
    output.push_str(&format!(
        "Rate limit: {} requests / {}s window (display only)\n",
        config.max_requests, config.window_size
    ));
    output.push_str(RULE);
    output.push('\n');
    output
}

/// The four metric cards: total operations, average time, recent activity
/// and system status.
pub fn render_metric_cards(session: &SessionState) -> String {
    let recent = session.recent_count(RECENT_ACTIVITY_WINDOW);

    let mut output = String::new();
    output.push_str(&format!(
        "📊 Total Operations: {}  (all-time processing count)\n",
        session.total_operations()
    ));
    output.push_str(&format!(
        "⏱️ Avg Processing Time: {:.2}s  (mean processing duration)\n",
        session.average_processing_time()
    ));
    output.push_str(&format!(
        "⚡ Recent Activity: {}/min  (operations in last minute)\n",
        recent
    ));
    output.push_str("🟢 System Status: Online  (all systems operational)\n");
    output
}

/// Lists every mode, marking the selected one.
pub fn render_mode_picker(selected: TransformMode) -> String {
    let mut output = String::from("🔧 Processing Modes\n");
    for mode in TransformMode::ALL {
        let marker = if mode == selected { '>' } else { ' ' };
        output.push_str(&format!(
            "{} {:<18} {}\n",
            marker,
            mode.label(),
            mode.description()
        ));
    }
    output
}

/// Output pane for the most recent processing result.
pub fn render_output_pane(last: Option<&LastOutput>, total_operations: u64) -> String {
    let mut output = String::from("📤 Output Results\n");
    match last {
        Some(last) => {
            output.push_str("📋 Processed Result:\n");
            for line in last.output.lines() {
                output.push_str(&format!("  {}\n", line));
            }
            output.push_str(&format!(
                "⏱️ Processing Time: {:.3} seconds\n",
                last.processing_time
            ));
            output.push_str(&format!("🔧 Mode Used: {}\n", last.mode.name()));
            output.push_str(&format!("📊 Total Operations: {}\n", total_operations));
        }
        None => {
            output.push_str("Output will appear here after processing...\n");
        }
    }
    output
}

/// The last ten operations, newest first.
pub fn render_recent_operations(session: &SessionState) -> String {
    if session.is_empty() {
        return format!("{}\n", EMPTY_HISTORY_MESSAGE);
    }

    let recent = get_recent_entries(session.entries(), RECENT_OPERATIONS_LIMIT);
    let mut output = format!("📋 Last {} Operations\n", recent.len());
    for line in format_history_list(recent) {
        output.push_str(&format!("  {}\n", line));
    }
    output
}

/// Detail view of one history entry.
pub fn render_entry_details(session: &SessionState, id_prefix: &str) -> Option<String> {
    session.find(id_prefix).map(format_history_details)
}

/// Mode usage distribution as a bar chart.
pub fn render_analytics(session: &SessionState) -> String {
    if session.is_empty() {
        return format!("{}\n", EMPTY_HISTORY_MESSAGE);
    }

    let items: Vec<(String, f64)> = mode_distribution(session.entries())
        .into_iter()
        .map(|(mode, count)| (mode.label(), count as f64))
        .collect();

    let mut output = String::from("📊 Processing Mode Distribution\n");
    for line in bar_chart(&items, DEFAULT_BAR_WIDTH) {
        output.push_str(&format!("  {}\n", line));
    }
    output
}

/// Processing time over time plus fastest/slowest/standard deviation.
pub fn render_performance(session: &SessionState) -> String {
    let stats = match processing_time_stats(session.entries()) {
        Some(stats) => stats,
        None if session.is_empty() => return format!("{}\n", EMPTY_HISTORY_MESSAGE),
        None => return "📈 Performance analysis needs at least two operations.\n".to_string(),
    };

    let points = timeline(session.entries());
    let times: Vec<f64> = points.iter().map(|p| p.processing_time).collect();

    let mut output = String::from("📈 Processing Time Analysis\n");
    output.push_str(&format!("  Processing Time Over Time: {}\n", sparkline(&times)));
    for point in &points {
        output.push_str(&format!(
            "  {} {:<14} {:.3}s\n",
            point.timestamp.with_timezone(&chrono::Local).format("%H:%M:%S"),
            point.mode.name(),
            point.processing_time
        ));
    }
    output.push_str(&format!("  Fastest Processing: {:.3}s\n", stats.min));
    output.push_str(&format!("  Slowest Processing: {:.3}s\n", stats.max));
    output.push_str(&format!("  Standard Deviation: {:.3}s\n", stats.std_dev));
    output
}

/// Current configuration, including the derived delay.
pub fn render_config(config: &DashboardConfig) -> String {
    let mut output = String::from("⚙️ Configuration\n");
    output.push_str("Rate Limiting Settings (display only)\n");
    output.push_str(&format!("  max-requests:   {}\n", config.max_requests));
    output.push_str(&format!("  window-size:    {}s\n", config.window_size));
    output.push_str("Processing Settings\n");
    output.push_str(&format!(
        "  simulate-delay: {}\n",
        if config.simulate_delay { "on" } else { "off" }
    ));
    output.push_str(&format!(
        "  delay-range:    {:.1}s - {:.1}s\n",
        config.delay_range.0, config.delay_range.1
    ));
    output.push_str(&format!(
        "  applied delay:  {:.2}s\n",
        simulated_delay(config).as_secs_f64()
    ));
    output.push_str(&format!("  history-limit:  {}\n", config.history_limit));
    output
}

/// Full dashboard: header, metric cards, mode, output and recent history.
pub fn render_dashboard(
    session: &SessionState,
    config: &DashboardConfig,
    selected: TransformMode,
    last: Option<&LastOutput>,
) -> String {
    let mut output = render_header(config);
    output.push_str(&render_metric_cards(session));
    output.push_str(RULE);
    output.push('\n');
    output.push_str(&format!(
        "🔧 Mode: {}  ({})\n",
        selected.label(),
        selected.description()
    ));
    output.push_str(&render_output_pane(last, session.total_operations()));
    output.push_str(RULE);
    output.push('\n');
    output.push_str("📚 Processing History\n");
    output.push_str(&render_recent_operations(session));
    output
}
