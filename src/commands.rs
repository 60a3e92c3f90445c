//! Command handlers for the dashboard.
//!
//! Every user action is a [`Command`]. A [`Dashboard`] owns one session's
//! state and handles commands one at a time, returning the text view to
//! display. Nothing is shared between dashboards.

use crate::config::{apply_setting, ConfigError, DashboardConfig};
use crate::executor::{execute, ExecutionConfig, ExecutionError, Sleeper, ThreadSleeper};
use crate::history::{
    filter_by_mode, format_history_compact, format_history_entry, format_history_entry_relative,
    format_history_stats, get_recent_entries, search_history, SessionState,
    RECENT_ACTIVITY_WINDOW,
};
use crate::transform::{TransformMode, UnknownModeError};
use crate::ui;
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;

/// Splits a console line into the command word and its raw argument text.
static COMMAND_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^\s*(\S+)(?:\s(.*))?$").expect("command pattern is valid"));

/// Number of entries listed by `history` without an argument.
const DEFAULT_HISTORY_LISTING: usize = 10;

const HELP_TEXT: &str = "\
Commands:
  process <mode> <text>   Process text with the given mode
  mode <mode>             Select the processing mode
  input <text>            Set the input text
  run                     Process the input text with the selected mode
  dashboard               Show the full dashboard
  history [n]             List the last n operations (default 10)
  show <id>               Show one operation in detail
  search <query>          Search the history
  filter <mode>           List operations made with one mode
  stats                   Show the metric cards
  analytics               Show the mode distribution
  performance             Show processing time analysis
  modes                   List processing modes
  config                  Show configuration
  set <key> <value...>    Change a setting (max-requests, window-size,
                          simulate-delay, delay-range, history-limit)
  export                  Print the history as JSON
  clear                   Clear all history
  help                    Show this help
  quit                    Exit
";

/// Error types for command handling.
///
/// All of them are reported inline and leave the session running.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Processing was rejected (blank input).
    #[error(transparent)]
    Execution(#[from] ExecutionError),

    /// The mode name matched no transform.
    #[error(transparent)]
    UnknownMode(#[from] UnknownModeError),

    /// The command word is not recognised.
    #[error("Unknown command: {0}. Type 'help' for a list of commands.")]
    UnknownCommand(String),

    /// A required argument was not supplied.
    #[error("Missing argument. Usage: {0}")]
    MissingArgument(&'static str),

    /// An argument could not be parsed.
    #[error("Invalid argument for {command}: {value}")]
    InvalidArgument { command: &'static str, value: String },

    /// No retained history entry has the given id.
    #[error("No history entry matches id '{0}'")]
    EntryNotFound(String),

    /// A configuration change was rejected.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The history could not be serialized.
    #[error("Failed to export history: {0}")]
    Export(#[from] serde_json::Error),
}

/// A single user action.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Process { mode: TransformMode, input: String },
    SelectMode(TransformMode),
    SetInput(String),
    Run,
    Dashboard,
    History(usize),
    Show(String),
    Search(String),
    Filter(TransformMode),
    Stats,
    Analytics,
    Performance,
    Modes,
    Config,
    Set { key: String, values: Vec<String> },
    Export,
    Clear,
    Help,
    Quit,
}

/// Parses one console line into a [`Command`].
///
/// Text arguments (`process`, `input`) are kept verbatim after the single
/// separating whitespace character.
///
/// # Returns
///
/// `Ok(None)` for a blank line.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let captures = match COMMAND_PATTERN.captures(line) {
        Some(captures) => captures,
        None => return Ok(None),
    };

    let word = captures[1].to_lowercase();
    let raw_args = captures.get(2).map_or("", |m| m.as_str());
    let args = raw_args.trim();

    let command = match word.as_str() {
        "process" | "p" => {
            let (mode, text) = raw_args
                .trim_start()
                .split_once(char::is_whitespace)
                .ok_or(CommandError::MissingArgument("process <mode> <text>"))?;
            Command::Process {
                mode: mode.parse()?,
                input: text.to_string(),
            }
        }
        "mode" => {
            if args.is_empty() {
                return Err(CommandError::MissingArgument("mode <mode>"));
            }
            Command::SelectMode(args.parse()?)
        }
        "input" => Command::SetInput(raw_args.to_string()),
        "run" | "go" => Command::Run,
        "dashboard" | "d" => Command::Dashboard,
        "history" | "h" => {
            let limit = if args.is_empty() {
                DEFAULT_HISTORY_LISTING
            } else {
                args.parse().map_err(|_| CommandError::InvalidArgument {
                    command: "history",
                    value: args.to_string(),
                })?
            };
            Command::History(limit)
        }
        "show" => {
            if args.is_empty() {
                return Err(CommandError::MissingArgument("show <id>"));
            }
            Command::Show(args.to_string())
        }
        "search" => Command::Search(args.to_string()),
        "filter" => {
            if args.is_empty() {
                return Err(CommandError::MissingArgument("filter <mode>"));
            }
            Command::Filter(args.parse()?)
        }
        "stats" => Command::Stats,
        "analytics" => Command::Analytics,
        "performance" | "perf" => Command::Performance,
        "modes" => Command::Modes,
        "config" => Command::Config,
        "set" => {
            let mut parts = args.split_whitespace();
            let key = parts
                .next()
                .ok_or(CommandError::MissingArgument("set <key> <value...>"))?;
            let values: Vec<String> = parts.map(str::to_string).collect();
            if values.is_empty() {
                return Err(CommandError::MissingArgument("set <key> <value...>"));
            }
            Command::Set {
                key: key.to_string(),
                values,
            }
        }
        "export" => Command::Export,
        "clear" => Command::Clear,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(CommandError::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
}

/// The most recent processing result, shown in the output pane.
#[derive(Debug, Clone, PartialEq)]
pub struct LastOutput {
    pub mode: TransformMode,
    pub output: String,
    /// Seconds.
    pub processing_time: f64,
}

/// The view produced by handling one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Text to display.
    pub output: String,

    /// Whether the session should end.
    pub quit: bool,
}

impl CommandOutcome {
    fn show(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            quit: false,
        }
    }

    fn quit(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            quit: true,
        }
    }
}

/// State of one user session plus the command handler that mutates it.
pub struct Dashboard<S: Sleeper = ThreadSleeper> {
    session: SessionState,
    config: DashboardConfig,
    selected_mode: TransformMode,
    pending_input: String,
    last_output: Option<LastOutput>,
    sleeper: S,
}

impl Dashboard<ThreadSleeper> {
    /// Creates a dashboard whose simulated delay blocks the current thread.
    pub fn new(config: DashboardConfig) -> Self {
        Self::with_sleeper(config, ThreadSleeper)
    }
}

impl<S: Sleeper> Dashboard<S> {
    /// Creates a dashboard with a custom sleeper.
    pub fn with_sleeper(config: DashboardConfig, sleeper: S) -> Self {
        Self {
            session: SessionState::with_capacity(config.history_limit),
            config,
            selected_mode: TransformMode::Uppercase,
            pending_input: String::new(),
            last_output: None,
            sleeper,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn selected_mode(&self) -> TransformMode {
        self.selected_mode
    }

    pub fn last_output(&self) -> Option<&LastOutput> {
        self.last_output.as_ref()
    }

    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }

    /// Renders the full dashboard for the current state.
    pub fn render(&self) -> String {
        ui::render_dashboard(
            &self.session,
            &self.config,
            self.selected_mode,
            self.last_output.as_ref(),
        )
    }

    /// Parses and handles one console line.
    ///
    /// Errors are rendered inline as the outcome text; they never end the
    /// session.
    pub fn dispatch(&mut self, line: &str) -> CommandOutcome {
        let result = parse_command(line).and_then(|command| match command {
            Some(command) => self.handle(command),
            None => Ok(CommandOutcome::show("")),
        });

        result.unwrap_or_else(|e| {
            debug!("Command rejected: {}", e);
            CommandOutcome::show(format!("❌ {}\n", e))
        })
    }

    /// Handles one command.
    pub fn handle(&mut self, command: Command) -> Result<CommandOutcome, CommandError> {
        debug!("Handling command: {:?}", command);

        match command {
            Command::Process { mode, input } => {
                self.selected_mode = mode;
                self.pending_input = input;
                self.process()
            }
            Command::SelectMode(mode) => {
                self.selected_mode = mode;
                Ok(CommandOutcome::show(format!(
                    "🔧 Mode: {}\nDescription: {}\n",
                    mode.label(),
                    mode.description()
                )))
            }
            Command::SetInput(input) => {
                let preview = crate::history::truncate_preview(&input);
                self.pending_input = input;
                Ok(CommandOutcome::show(format!("📝 Input set: {}\n", preview)))
            }
            Command::Run => self.process(),
            Command::Dashboard => Ok(CommandOutcome::show(self.render())),
            Command::History(limit) => Ok(CommandOutcome::show(self.history_listing(limit))),
            Command::Show(id) => ui::render_entry_details(&self.session, &id)
                .map(CommandOutcome::show)
                .ok_or(CommandError::EntryNotFound(id)),
            Command::Search(query) => Ok(CommandOutcome::show(self.search(&query))),
            Command::Filter(mode) => Ok(CommandOutcome::show(self.filter(mode))),
            Command::Stats => Ok(CommandOutcome::show(ui::render_metric_cards(&self.session))),
            Command::Analytics => Ok(CommandOutcome::show(ui::render_analytics(&self.session))),
            Command::Performance => {
                Ok(CommandOutcome::show(ui::render_performance(&self.session)))
            }
            Command::Modes => Ok(CommandOutcome::show(ui::render_mode_picker(
                self.selected_mode,
            ))),
            Command::Config => Ok(CommandOutcome::show(ui::render_config(&self.config))),
            Command::Set { key, values } => self.update_setting(&key, &values),
            Command::Export => {
                let json = serde_json::to_string_pretty(self.session.entries())?;
                Ok(CommandOutcome::show(format!("{}\n", json)))
            }
            Command::Clear => {
                self.session.clear();
                info!("History cleared");
                Ok(CommandOutcome::show(format!(
                    "✅ History cleared!\n{}",
                    self.render()
                )))
            }
            Command::Help => Ok(CommandOutcome::show(HELP_TEXT)),
            Command::Quit => Ok(CommandOutcome::quit("👋 Application stopped by user\n")),
        }
    }

    /// Runs the selected mode on the pending input and records the result.
    ///
    /// Blank input is rejected before any state changes.
    fn process(&mut self) -> Result<CommandOutcome, CommandError> {
        let execution_config = ExecutionConfig::from_dashboard_config(&self.config);
        let execution = execute(
            self.selected_mode,
            &self.pending_input,
            &execution_config,
            &self.sleeper,
        )?;

        let entry = self.session.record(
            execution.mode,
            &self.pending_input,
            &execution.output,
            execution.elapsed,
        );
        debug!(
            "Recorded {} operation {} ({:.3}s)",
            entry.mode,
            entry.short_id(),
            entry.processing_time
        );

        self.last_output = Some(LastOutput {
            mode: execution.mode,
            output: execution.output,
            processing_time: execution.elapsed.as_secs_f64(),
        });

        Ok(CommandOutcome::show(format!(
            "✅ Processing completed successfully!\n{}",
            self.render()
        )))
    }

    fn history_listing(&self, limit: usize) -> String {
        let mut output = format!(
            "{}\n",
            format_history_stats(
                self.session.total_operations(),
                self.session.average_processing_time(),
                self.session.recent_count(RECENT_ACTIVITY_WINDOW),
            )
        );

        if self.session.is_empty() {
            output.push_str(&ui::render_recent_operations(&self.session));
            return output;
        }

        let recent = get_recent_entries(self.session.entries(), limit);
        for (index, entry) in recent.iter().enumerate() {
            output.push_str(&format!(
                "  #{} {}\n",
                index + 1,
                format_history_entry_relative(entry)
            ));
        }
        output
    }

    fn search(&self, query: &str) -> String {
        let results = search_history(query, self.session.entries());
        if results.is_empty() {
            return format!("🔍 No operations match '{}'\n", query);
        }

        let mut output = format!("🔍 {} matching operation(s)\n", results.len());
        for entry in results {
            output.push_str(&format!("  {}\n", format_history_entry(entry)));
        }
        output
    }

    fn filter(&self, mode: TransformMode) -> String {
        let results = filter_by_mode(self.session.entries(), mode);
        if results.is_empty() {
            return format!("🔎 No {} operations in history\n", mode.name());
        }

        let mut output = format!("🔎 {} {} operation(s)\n", results.len(), mode.name());
        for entry in results {
            output.push_str(&format!(
                "  [{}] {}\n",
                entry.short_id(),
                format_history_compact(entry)
            ));
        }
        output
    }

    fn update_setting(
        &mut self,
        key: &str,
        values: &[String],
    ) -> Result<CommandOutcome, CommandError> {
        let values: Vec<&str> = values.iter().map(String::as_str).collect();
        let updated = apply_setting(&self.config, key, &values)?;

        if updated.history_limit != self.config.history_limit {
            self.session.set_max_entries(updated.history_limit);
        }
        self.config = updated;
        info!("Setting {} updated to {}", key, values.join(" "));

        Ok(CommandOutcome::show(ui::render_config(&self.config)))
    }
}
