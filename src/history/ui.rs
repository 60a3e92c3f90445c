//! UI formatting utilities for history display.
//!
//! This module turns history entries into human-readable strings for the
//! recent-operations list, the detail view and the metric cards.

use super::models::HistoryEntry;
use chrono::{DateTime, Local, Utc};

const HEAVY_RULE: &str = "═══════════════════════════════════════════════════════════";
const LIGHT_RULE: &str = "───────────────────────────────────────────────────────────";

/// Formats a list of history entries, one line per entry.
///
/// Each entry is formatted as: "#N ICON MODE - PREVIEW (0.512s, timestamp)"
pub fn format_history_list(entries: &[HistoryEntry]) -> Vec<String> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| format!("#{} {}", index + 1, format_history_entry(entry)))
        .collect()
}

/// Formats a single history entry for list display.
///
/// Format: "ICON MODE - PREVIEW (TIME, timestamp)"
pub fn format_history_entry(entry: &HistoryEntry) -> String {
    format!(
        "{} - {} ({:.3}s, {}) [{}]",
        entry.mode.label(),
        single_line(&entry.input_preview),
        entry.processing_time,
        format_timestamp(&entry.timestamp),
        entry.short_id()
    )
}

/// Formats a history entry with full details for the expanded view.
///
/// Includes mode, processing time, timestamp, and the full input and output.
pub fn format_history_details(entry: &HistoryEntry) -> String {
    let mut output = String::new();

    output.push_str(HEAVY_RULE);
    output.push('\n');
    output.push_str(&format!("Operation ID: {}\n", entry.id));
    output.push_str(&format!(
        "Timestamp: {}\n",
        format_timestamp_detailed(&entry.timestamp)
    ));
    output.push_str(HEAVY_RULE);
    output.push_str("\n\n");

    output.push_str("INPUT\n");
    output.push_str(LIGHT_RULE);
    output.push('\n');
    output.push_str(&format_text_block(&entry.full_input));
    output.push('\n');

    output.push_str("OUTPUT\n");
    output.push_str(LIGHT_RULE);
    output.push('\n');
    output.push_str(&format_text_block(&entry.full_output));
    output.push('\n');

    output.push_str("Details:\n");
    output.push_str(&format!("  - Mode: {}\n", entry.mode.name()));
    output.push_str(&format!(
        "  - Processing Time: {:.3} seconds\n",
        entry.processing_time
    ));
    output.push_str(&format!(
        "  - Timestamp: {}\n",
        format_timestamp(&entry.timestamp)
    ));

    output.push_str(HEAVY_RULE);
    output.push('\n');

    output
}

/// Formats a compact summary of a history entry for inline display.
///
/// Format: "MODE: INPUT → OUTPUT"
pub fn format_history_compact(entry: &HistoryEntry) -> String {
    format!(
        "{}: {} → {}",
        entry.mode.name(),
        single_line(&entry.input_preview),
        single_line(&entry.output_preview)
    )
}

/// Formats a timestamp in local time for display.
///
/// Format: "YYYY-MM-DD HH:MM:SS"
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    let local_time: DateTime<Local> = timestamp.with_timezone(&Local);
    local_time.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Formats a timestamp with more detail including the UTC offset.
pub fn format_timestamp_detailed(timestamp: &DateTime<Utc>) -> String {
    let local_time: DateTime<Local> = timestamp.with_timezone(&Local);
    local_time.format("%Y-%m-%d %H:%M:%S %:z").to_string()
}

/// Formats a relative time description (e.g., "2 hours ago", "yesterday").
pub fn format_relative_time(timestamp: &DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(*timestamp);

    if duration.num_seconds() < 60 {
        "just now".to_string()
    } else if duration.num_minutes() < 60 {
        let minutes = duration.num_minutes();
        format!("{} minute{} ago", minutes, plural(minutes))
    } else if duration.num_hours() < 24 {
        let hours = duration.num_hours();
        format!("{} hour{} ago", hours, plural(hours))
    } else if duration.num_days() == 1 {
        "yesterday".to_string()
    } else {
        format!("{} days ago", duration.num_days())
    }
}

/// Formats a history entry with relative time for recent operations.
pub fn format_history_entry_relative(entry: &HistoryEntry) -> String {
    format!(
        "{} - {} ({})",
        entry.mode.label(),
        single_line(&entry.input_preview),
        format_relative_time(&entry.timestamp)
    )
}

/// Creates the summary line shown above the history list.
///
/// # Arguments
///
/// * `total_operations` - Operations since the last clear
/// * `average_seconds` - Mean processing time
/// * `recent` - Operations in the last minute
pub fn format_history_stats(total_operations: u64, average_seconds: f64, recent: usize) -> String {
    format!(
        "Total: {} | Avg: {:.2}s | Recent: {}/min",
        total_operations, average_seconds, recent
    )
}

/// Indents every line of `text` by two spaces.
fn format_text_block(text: &str) -> String {
    let mut block = String::new();
    for line in text.lines() {
        block.push_str("  ");
        block.push_str(line);
        block.push('\n');
    }
    if block.is_empty() {
        block.push_str("  [empty]\n");
    }
    block
}

/// Collapses newlines so a preview fits on one list line.
fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

fn plural(n: i64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
