//! Per-session history and aggregate counters.
//!
//! A [`SessionState`] belongs to exactly one user session and is mutated only
//! by the command currently being handled, so it needs no locking.

use super::models::HistoryEntry;
use crate::transform::TransformMode;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Default number of history entries retained per session.
pub const DEFAULT_MAX_HISTORY_ENTRIES: usize = 50;

/// Window used for the "recent activity" figure.
pub const RECENT_ACTIVITY_WINDOW: Duration = Duration::from_secs(60);

/// Bounded processing history plus cumulative counters.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Newest first.
    entries: Vec<HistoryEntry>,
    max_entries: usize,
    total_operations: u64,
    total_processing_time: f64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_HISTORY_ENTRIES)
    }

    /// Creates a session that retains at most `max_entries` entries.
    ///
    /// A capacity of zero is raised to one.
    pub fn with_capacity(max_entries: usize) -> Self {
        let max_entries = max_entries.max(1);
        Self {
            entries: Vec::with_capacity(max_entries),
            max_entries,
            total_operations: 0,
            total_processing_time: 0.0,
        }
    }

    /// Records a completed processing action.
    ///
    /// The new entry is placed first, the counters are updated, and the list
    /// is cut back to the retention limit, evicting the oldest entries.
    pub fn record(
        &mut self,
        mode: TransformMode,
        input: &str,
        output: &str,
        elapsed: Duration,
    ) -> &HistoryEntry {
        self.push(HistoryEntry::new(mode, input, output, elapsed))
    }

    /// Records a prepared entry. Used when the timestamp must be controlled.
    pub fn push(&mut self, entry: HistoryEntry) -> &HistoryEntry {
        self.total_operations += 1;
        self.total_processing_time += entry.processing_time;
        self.entries.insert(0, entry);
        self.entries.truncate(self.max_entries);
        &self.entries[0]
    }

    /// Empties the history and resets both counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.total_operations = 0;
        self.total_processing_time = 0.0;
    }

    /// Number of retained entries younger than `window`.
    pub fn recent_count(&self, window: Duration) -> usize {
        self.recent_count_at(window, Utc::now())
    }

    /// Like [`recent_count`](Self::recent_count) with an explicit reference time.
    pub fn recent_count_at(&self, window: Duration, now: DateTime<Utc>) -> usize {
        self.entries
            .iter()
            .filter(|entry| {
                // A negative age (clock skew) still counts as recent.
                match now.signed_duration_since(entry.timestamp).to_std() {
                    Ok(age) => age < window,
                    Err(_) => true,
                }
            })
            .count()
    }

    /// Retained entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    /// Finds a retained entry by full id or id prefix.
    pub fn find(&self, id_prefix: &str) -> Option<&HistoryEntry> {
        if id_prefix.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|entry| entry.id.starts_with(id_prefix))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Changes the retention limit, evicting the oldest entries if needed.
    ///
    /// Counters are not affected.
    pub fn set_max_entries(&mut self, max_entries: usize) {
        self.max_entries = max_entries.max(1);
        self.entries.truncate(self.max_entries);
    }

    /// Operations recorded since the last clear, evicted entries included.
    pub fn total_operations(&self) -> u64 {
        self.total_operations
    }

    /// Sum of processing times in seconds since the last clear.
    pub fn total_processing_time(&self) -> f64 {
        self.total_processing_time
    }

    /// Mean processing time in seconds, or zero before the first operation.
    pub fn average_processing_time(&self) -> f64 {
        if self.total_operations == 0 {
            0.0
        } else {
            self.total_processing_time / self.total_operations as f64
        }
    }
}
