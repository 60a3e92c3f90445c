//! Transform Dashboard Console Entry Point
//!
//! Reads one command per line from stdin and prints the resulting view to
//! stdout. Logging goes to stderr and is controlled by `RUST_LOG`.
//!
//! # Configuration
//!
//! Settings are read from the JSON file given by `--config <path>` or the
//! `DASHBOARD_CONFIG` environment variable. Without either, defaults apply.

use clap::Parser;
use log::{error, info};
use std::io;
use std::path::{Path, PathBuf};
use transform_dashboard::commands::Dashboard;
use transform_dashboard::config::{load_config_file, DashboardConfig};
use transform_dashboard::console;

#[derive(Parser, Debug)]
#[command(version, about = "Text transform dashboard with processing history")]
struct Args {
    /// JSON settings file with a "dashboard" section.
    #[arg(long, env = "DASHBOARD_CONFIG")]
    config: Option<PathBuf>,
}

impl Args {
    /// The settings file to load. An empty `DASHBOARD_CONFIG` counts as unset.
    fn config_path(&self) -> Option<&Path> {
        self.config
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    info!("Starting transform dashboard v{}", env!("CARGO_PKG_VERSION"));

    let config = match args.config_path() {
        Some(path) => match load_config_file(path) {
            Ok(config) => {
                info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                error!("Failed to load {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => DashboardConfig::default(),
    };

    let mut dashboard = Dashboard::new(config);
    if let Err(e) = console::run(&mut dashboard, io::stdin().lock(), io::stdout()) {
        error!("Console I/O failed: {}", e);
        std::process::exit(1);
    }

    info!("Dashboard shut down");
}
