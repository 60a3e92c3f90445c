//! UI module for the dashboard.
//!
//! The dashboard is rendered as plain text so any line-oriented front end
//! (the `dashboard` console binary, a test, a log) can display it.
//!
//! # Architecture
//!
//! - **layout**: one `render_*` function per dashboard panel
//! - **charts**: bar charts and sparklines used by the analytics panels
//!
//! # Usage
//!
//! ```
//! use transform_dashboard::config::DashboardConfig;
//! use transform_dashboard::history::SessionState;
//! use transform_dashboard::transform::TransformMode;
//! use transform_dashboard::ui::render_dashboard;
//!
//! let session = SessionState::new();
//! let view = render_dashboard(&session, &DashboardConfig::default(), TransformMode::Uppercase, None);
//! assert!(view.contains("Total Operations: 0"));
//! ```

pub mod charts;
pub mod layout;

pub use charts::{bar_chart, sparkline};
pub use layout::{
    render_analytics, render_config, render_dashboard, render_entry_details, render_header,
    render_metric_cards, render_mode_picker, render_output_pane, render_performance,
    render_recent_operations, APP_TITLE,
};
