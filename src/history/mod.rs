//! Processing history tracking and metrics.
//!
//! This module keeps the per-session record of completed processing actions
//! and derives the statistics shown on the dashboard.
//!
//! # Features
//!
//! - Bounded, newest-first history (50 entries by default)
//! - Cumulative operation count and processing time
//! - Recent-activity window counts
//! - Search and filtering
//! - Mode distribution and processing-time statistics
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use transform_dashboard::history::SessionState;
//! use transform_dashboard::transform::TransformMode;
//!
//! let mut session = SessionState::new();
//! session.record(TransformMode::Reverse, "abc", "cba", Duration::from_millis(500));
//! assert_eq!(session.total_operations(), 1);
//! ```

pub mod models;
pub mod search;
pub mod session;
pub mod stats;
pub mod ui;

// Re-export commonly used types
pub use models::{truncate_preview, HistoryEntry, MIN_PROCESSING_TIME, PREVIEW_LENGTH};
pub use search::{filter_by_mode, get_recent_entries, search_history};
pub use session::{SessionState, DEFAULT_MAX_HISTORY_ENTRIES, RECENT_ACTIVITY_WINDOW};
pub use stats::{
    mode_distribution, processing_time_stats, timeline, ProcessingTimeStats, TimelinePoint,
};
pub use ui::{
    format_history_compact, format_history_details, format_history_entry,
    format_history_entry_relative, format_history_list, format_history_stats,
};
