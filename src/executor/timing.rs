//! Processing time measurement and formatting utilities.

use std::time::{Duration, Instant};

/// Measures wall-clock time across the phases of one processing action.
#[derive(Debug, Clone)]
pub struct TimingCheckpoints {
    /// When processing started.
    pub started: Instant,

    /// When the simulated delay finished.
    pub delay_finished: Option<Instant>,

    /// When the transform returned.
    pub completed: Option<Instant>,
}

impl TimingCheckpoints {
    /// Starts a new measurement.
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            delay_finished: None,
            completed: None,
        }
    }

    pub fn mark_delay_finished(&mut self) {
        self.delay_finished = Some(Instant::now());
    }

    pub fn mark_completed(&mut self) {
        self.completed = Some(Instant::now());
    }

    /// Total elapsed time, up to now if processing has not completed.
    pub fn total(&self) -> Duration {
        self.completed
            .unwrap_or_else(Instant::now)
            .duration_since(self.started)
    }

    /// Time spent inside the transform itself.
    pub fn transform_time(&self) -> Duration {
        match (self.delay_finished, self.completed) {
            (Some(delay_end), Some(done)) => done.duration_since(delay_end),
            _ => Duration::ZERO,
        }
    }
}

/// Formats a duration in seconds with three decimals, e.g. "1.002s".
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use transform_dashboard::executor::timing::format_seconds;
///
/// assert_eq!(format_seconds(Duration::from_millis(1500)), "1.500s");
/// ```
pub fn format_seconds(duration: Duration) -> String {
    format!("{:.3}s", duration.as_secs_f64())
}

/// Formats a duration for humans: microseconds, milliseconds or seconds.
pub fn format_duration_human(duration: &Duration) -> String {
    let micros = duration.as_micros();
    if micros < 1_000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{}ms", duration.as_millis())
    } else {
        format!("{:.2}s", duration.as_secs_f64())
    }
}
