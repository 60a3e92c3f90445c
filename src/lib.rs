//! Transform Dashboard
//!
//! A terminal dashboard that applies a user-selected text transform to some
//! input, simulates processing latency, and keeps a per-session history with
//! simple analytics.
//!
//! The dashboard carries the product name "API Rate Limiter" and shows
//! max-requests and time-window settings, but it performs no rate limiting:
//! those settings are display-only.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - **transform**: The closed set of text transforms (uppercase, reverse,
//!   count, base64, MD5, word frequency)
//! - **history**: Per-session history, counters, search and statistics
//! - **executor**: Runs a transform behind the simulated delay and times it
//! - **config**: Settings schema, validation and JSON loading
//! - **commands**: Parses user actions and dispatches them against a session
//! - **ui**: Renders the dashboard panels as text
//! - **console**: Drives a dashboard from a line reader and writer
//!
//! # Command Flow
//!
//! Each user action goes through [`commands::Dashboard::dispatch`], which:
//! 1. Parses the line into a [`commands::Command`]
//! 2. Rejects blank input without touching any state
//! 3. Blocks for the simulated delay (midpoint of the configured range)
//! 4. Applies the transform and measures the wall-clock time
//! 5. Records a history entry and returns the re-rendered dashboard
//!
//! # Usage
//!
//! ```
//! use transform_dashboard::commands::Dashboard;
//! use transform_dashboard::config::DashboardConfig;
//!
//! let mut config = DashboardConfig::default();
//! config.delay_range = (0.1, 0.1);
//!
//! let mut dashboard = Dashboard::new(config);
//! let outcome = dashboard.dispatch("process md5 abc");
//! assert!(outcome.output.contains("900150983cd24fb0d6963f7d28e17f72"));
//! assert_eq!(dashboard.session().total_operations(), 1);
//! ```

pub mod commands;
pub mod config;
pub mod console;
pub mod executor;
pub mod history;
pub mod transform;
pub mod ui;

pub use commands::{parse_command, Command, CommandError, CommandOutcome, Dashboard};
pub use config::{load_config, DashboardConfig};
pub use history::{HistoryEntry, SessionState};
pub use transform::TransformMode;
