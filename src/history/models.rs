//! Data models for processing history.
//!
//! This module defines the record kept for each completed processing action.

use crate::transform::TransformMode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Maximum number of characters kept in an input/output preview.
pub const PREVIEW_LENGTH: usize = 100;

/// Shortest processing time an entry can record. Every entry's time is
/// strictly positive.
pub const MIN_PROCESSING_TIME: Duration = Duration::from_micros(1);

/// A single entry in the processing history.
///
/// Entries are created once per successful processing action and never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique identifier for this history entry.
    ///
    /// Generated using UUID v4 for guaranteed uniqueness.
    pub id: String,

    /// Timestamp when the processing completed.
    ///
    /// Stored in UTC; converted to local time only for display.
    pub timestamp: DateTime<Utc>,

    /// The transform that produced the output.
    pub mode: TransformMode,

    /// Input truncated to [`PREVIEW_LENGTH`] characters.
    pub input_preview: String,

    /// Output truncated to [`PREVIEW_LENGTH`] characters.
    pub output_preview: String,

    pub full_input: String,

    pub full_output: String,

    /// Wall-clock processing time in seconds, simulated delay included.
    pub processing_time: f64,
}

impl HistoryEntry {
    /// Creates a new history entry stamped with the current time.
    ///
    /// # Arguments
    ///
    /// * `mode` - The transform that was applied
    /// * `input` - The raw user input
    /// * `output` - The transform result
    /// * `elapsed` - Measured processing time
    pub fn new(mode: TransformMode, input: &str, output: &str, elapsed: Duration) -> Self {
        Self::at(Utc::now(), mode, input, output, elapsed)
    }

    /// Creates a new history entry with an explicit timestamp.
    ///
    /// `elapsed` below [`MIN_PROCESSING_TIME`] is raised to it.
    pub fn at(
        timestamp: DateTime<Utc>,
        mode: TransformMode,
        input: &str,
        output: &str,
        elapsed: Duration,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp,
            mode,
            input_preview: truncate_preview(input),
            output_preview: truncate_preview(output),
            full_input: input.to_string(),
            full_output: output.to_string(),
            processing_time: elapsed.max(MIN_PROCESSING_TIME).as_secs_f64(),
        }
    }

    /// Short form of the id used in listings.
    pub fn short_id(&self) -> &str {
        self.id.get(..8).unwrap_or(&self.id)
    }
}

/// Truncates `text` to [`PREVIEW_LENGTH`] characters, appending "..." when
/// anything was cut.
pub fn truncate_preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_LENGTH) {
        Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
        None => text.to_string(),
    }
}
