//! Processing executor.
//!
//! Runs one transform the way the dashboard presents it: reject blank input,
//! block for the simulated delay, apply the transform and measure the
//! wall-clock time of the whole action.
//!
//! The pause goes through the [`Sleeper`] trait. [`ThreadSleeper`] blocks
//! the calling thread; tests substitute an implementation that returns
//! immediately.

pub mod config;
pub mod error;
pub mod timing;

pub use config::{simulated_delay, ExecutionConfig, BASELINE_DELAY};
pub use error::ExecutionError;
pub use timing::{format_duration_human, format_seconds, TimingCheckpoints};

use crate::transform::TransformMode;
use log::debug;
use std::time::Duration;

/// Blocks the current thread for a simulated delay.
pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

/// Sleeps with [`std::thread::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// The result of one processing action.
#[derive(Debug, Clone, PartialEq)]
pub struct Execution {
    pub mode: TransformMode,
    pub output: String,
    /// Wall-clock time of delay plus transform. Never shorter than `delay`.
    pub elapsed: Duration,
    /// The simulated delay that was applied.
    pub delay: Duration,
}

/// Executes a transform with the configured simulated delay.
///
/// # Arguments
///
/// * `mode` - The transform to apply
/// * `input` - Raw user input
/// * `config` - Execution settings (the delay)
/// * `sleeper` - Performs the blocking pause
///
/// # Returns
///
/// The transform output with timing, or [`ExecutionError::EmptyInput`] when
/// the input is blank.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use transform_dashboard::executor::{execute, ExecutionConfig, ThreadSleeper};
/// use transform_dashboard::transform::TransformMode;
///
/// let config = ExecutionConfig::new(Duration::from_millis(1));
/// let result = execute(TransformMode::Uppercase, "hi", &config, &ThreadSleeper).unwrap();
/// assert_eq!(result.output, "HI");
/// ```
pub fn execute<S: Sleeper + ?Sized>(
    mode: TransformMode,
    input: &str,
    config: &ExecutionConfig,
    sleeper: &S,
) -> Result<Execution, ExecutionError> {
    if input.trim().is_empty() {
        return Err(ExecutionError::EmptyInput);
    }

    let mut timing = TimingCheckpoints::start();

    debug!("Simulating {} delay for {}", format_seconds(config.delay), mode);
    sleeper.sleep(config.delay);
    timing.mark_delay_finished();

    let output = mode.apply(input);
    timing.mark_completed();

    // A sleeper that returns early must not make the action look faster
    // than its configured delay.
    let elapsed = timing.total().max(config.delay);

    debug!(
        "{} finished in {} (transform {})",
        mode,
        format_seconds(elapsed),
        format_duration_human(&timing.transform_time())
    );

    Ok(Execution {
        mode,
        output,
        elapsed,
        delay: config.delay,
    })
}
