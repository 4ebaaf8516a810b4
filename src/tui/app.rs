//! # Module: TUI App State
//!
//! ## Responsibility
//! Owns everything the terminal front end draws: the active flow, the help
//! overlay flag and the diagnostic log. The `App` struct is the single
//! source of truth for every widget.
//!
//! ## Guarantees
//! - `VecDeque` collections are bounded and never grow unbounded
//! - Network work never runs on the caller; `poll_tasks()` never blocks
//! - No method panics

use std::collections::VecDeque;
use std::sync::Arc;

use tracing::debug;

use crate::assessment::screen::Screen;
use crate::assessment::{AssessmentFlow, SubmitError};
use crate::client::ReportBackend;
use crate::config::UiConfig;
use crate::dashboard::DashboardFlow;
use crate::locale::Locale;

/// Maximum number of log entries retained for display.
pub const LOG_ENTRIES_CAP: usize = 50;

/// Which flow this session runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Form, loading and result wizard.
    Assessment,
    /// Aggregate statistics.
    Dashboard,
}

/// What keys mean right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Help overlay open; any key closes it.
    Help,
    /// Failure alert open; any key dismisses it.
    Alert,
    /// Landing screen.
    Landing,
    /// Form screen, with the focused control.
    Form(crate::assessment::form::Field),
    /// Waiting for the backend.
    Loading,
    /// Result screen.
    Result,
    /// Dashboard screen.
    Dashboard,
}

/// Primary application state for the terminal front end.
pub struct App {
    /// Whether the application should exit.
    pub should_quit: bool,
    /// Whether the help overlay is visible.
    pub show_help: bool,
    /// Frames drawn so far; drives the loading spinner.
    pub frame_count: u64,
    /// Active flow.
    pub mode: Mode,
    /// Display language.
    pub locale: Locale,
    /// Assessment wizard state.
    pub assessment: AssessmentFlow,
    /// Dashboard state.
    pub dashboard: DashboardFlow,
    /// Rolling log entries, newest at the back.
    pub log_entries: VecDeque<LogEntry>,
    /// Entries hidden below the visible log window.
    pub log_scroll_offset: usize,
    /// Minimum terminal width.
    pub min_cols: u16,
    /// Minimum terminal height.
    pub min_rows: u16,
    backend: Arc<dyn ReportBackend>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("mode", &self.mode)
            .field("locale", &self.locale)
            .field("screen", &self.assessment.screen())
            .field("should_quit", &self.should_quit)
            .finish_non_exhaustive()
    }
}

/// A single log entry for the log tail widget.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// Formatted timestamp string, e.g. "14:32:01".
    pub timestamp: String,
    /// Severity level.
    pub level: LogLevel,
    /// Primary log message.
    pub message: String,
    /// Structured fields as a formatted string.
    pub fields: String,
}

/// Log severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Informational message.
    Info,
    /// Warning condition.
    Warn,
    /// Error condition.
    Error,
    /// Debug-level message.
    Debug,
}

impl LogLevel {
    /// Returns the display label for this log level.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "INFO ",
            Self::Warn => "WARN ",
            Self::Error => "ERROR",
            Self::Debug => "DEBUG",
        }
    }
}

impl App {
    /// Creates an `App` for `mode` talking to `backend`.
    pub fn new(mode: Mode, locale: Locale, backend: Arc<dyn ReportBackend>) -> Self {
        let ui = UiConfig::default();
        Self {
            should_quit: false,
            show_help: false,
            frame_count: 0,
            mode,
            locale,
            assessment: AssessmentFlow::new(locale),
            dashboard: DashboardFlow::new(locale),
            log_entries: VecDeque::with_capacity(LOG_ENTRIES_CAP),
            log_scroll_offset: 0,
            min_cols: ui.min_cols,
            min_rows: ui.min_rows,
            backend,
        }
    }

    /// Applies the `[ui]` size limits.
    pub fn with_ui_config(mut self, ui: &UiConfig) -> Self {
        self.min_cols = ui.min_cols;
        self.min_rows = ui.min_rows;
        self
    }

    /// Kicks off start-up work: the dashboard fetch in dashboard mode.
    ///
    /// Must be called inside a tokio runtime.
    pub fn start(&mut self) {
        if self.mode == Mode::Dashboard {
            self.log(LogLevel::Info, "Loading dashboard data", "");
            self.dashboard.load(Arc::clone(&self.backend));
        }
    }

    /// Pushes a log entry, evicting the oldest if at capacity.
    pub fn push_log(&mut self, entry: LogEntry) {
        if self.log_entries.len() >= LOG_ENTRIES_CAP {
            self.log_entries.pop_front();
        }
        self.log_entries.push_back(entry);
    }

    /// Pushes an entry stamped with the local time.
    pub fn log(&mut self, level: LogLevel, message: &str, fields: &str) {
        self.push_log(LogEntry {
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
            level,
            message: message.to_string(),
            fields: fields.to_string(),
        });
    }

    /// Scrolls the log one entry towards older entries.
    pub fn scroll_log_up(&mut self) {
        let max = self.log_entries.len().saturating_sub(1);
        self.log_scroll_offset = (self.log_scroll_offset + 1).min(max);
    }

    /// Scrolls the log one entry towards the newest entry.
    pub fn scroll_log_down(&mut self) {
        self.log_scroll_offset = self.log_scroll_offset.saturating_sub(1);
    }

    /// Submits the form on a spawned task.
    ///
    /// Must be called inside a tokio runtime.
    pub fn submit(&mut self) {
        match self.assessment.submit(Arc::clone(&self.backend)) {
            Ok(()) => {
                let fields = format!("name={}", self.assessment.form.name.trim());
                self.log(LogLevel::Info, "Submission sent", &fields);
            }
            Err(SubmitError::Invalid(e)) => {
                self.log(LogLevel::Warn, "Form incomplete", &e.to_string());
            }
            Err(SubmitError::Screen(e)) => debug!(error = %e, "submit ignored"),
        }
    }

    /// Applies finished network work. Never blocks.
    pub fn poll_tasks(&mut self) {
        let alerts_before = self.assessment.alerts_raised();
        if self.assessment.poll() {
            if self.assessment.alerts_raised() > alerts_before {
                let cause = self.assessment.last_failure().unwrap_or_default().to_string();
                self.log(LogLevel::Error, "Submission failed", &cause);
            } else {
                self.log(LogLevel::Info, "Report ready", "");
            }
        }

        match self.dashboard.poll() {
            Some(Ok(())) => self.log(LogLevel::Info, "Dashboard data loaded", ""),
            Some(Err(e)) => self.log(LogLevel::Error, "Dashboard load failed", &e.to_string()),
            None => {}
        }
    }

    /// Call after every successful draw.
    pub fn on_frame_rendered(&mut self) {
        self.frame_count = self.frame_count.wrapping_add(1);
        self.assessment.on_frame_rendered();
    }

    /// What keys mean in the current state.
    pub fn key_context(&self) -> KeyContext {
        if self.show_help {
            return KeyContext::Help;
        }
        match self.mode {
            Mode::Dashboard => KeyContext::Dashboard,
            Mode::Assessment if self.assessment.alert().is_some() => KeyContext::Alert,
            Mode::Assessment => match self.assessment.screen() {
                Screen::Landing => KeyContext::Landing,
                Screen::Form => KeyContext::Form(self.assessment.form.focus()),
                Screen::Loading => KeyContext::Loading,
                Screen::Result => KeyContext::Result,
            },
        }
    }
}
