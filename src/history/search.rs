//! Search functionality for processing history.
//!
//! This module provides search and filtering over history entries, letting
//! users find past operations by mode or content.

use super::models::HistoryEntry;
use crate::transform::TransformMode;

/// Searches history entries using case-insensitive substring matching.
///
/// Searches across:
/// - mode name
/// - full input
/// - full output
///
/// # Arguments
///
/// * `query` - The search term to match against
/// * `entries` - The history entries to search through
///
/// # Returns
///
/// The matching entries, in their original order. An empty query matches
/// everything.
pub fn search_history<'a>(query: &str, entries: &'a [HistoryEntry]) -> Vec<&'a HistoryEntry> {
    let query_lower = query.trim().to_lowercase();
    if query_lower.is_empty() {
        return entries.iter().collect();
    }

    entries
        .iter()
        .filter(|entry| matches_query(entry, &query_lower))
        .collect()
}

fn matches_query(entry: &HistoryEntry, query_lower: &str) -> bool {
    entry.mode.name().to_lowercase().contains(query_lower)
        || entry.full_input.to_lowercase().contains(query_lower)
        || entry.full_output.to_lowercase().contains(query_lower)
}

/// Returns the entries produced by `mode`.
pub fn filter_by_mode(entries: &[HistoryEntry], mode: TransformMode) -> Vec<&HistoryEntry> {
    entries.iter().filter(|entry| entry.mode == mode).collect()
}

/// Returns at most `limit` entries from the front of a newest-first list.
pub fn get_recent_entries(entries: &[HistoryEntry], limit: usize) -> &[HistoryEntry] {
    &entries[..limit.min(entries.len())]
}
