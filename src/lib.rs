//! # health-risk-report
//!
//! Terminal client for a personal health-risk self-assessment service.
//!
//! ## Architecture
//!
//! Two independent flows sit on top of one backend contract:
//! ```text
//! Assessment:  Landing → Form → Loading → Result ──(restart)──▶ Landing
//!                          ▲        │
//!                          └─(fail)─┘          POST /analyze
//! Dashboard:   load once → cards + age bars + smoker split + BMI scatter
//!                                              GET  /dashboard-data
//! ```
//!
//! Scoring, persistence and aggregation belong to the backend. This crate
//! serializes the form, performs one request per user action and projects the
//! JSON response onto terminal widgets.

// ── Lint policy ───────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

use std::path::Path;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub mod assessment;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod deferred;
pub mod locale;
pub mod model;

#[cfg(feature = "tui")]
pub mod tui;

// Re-exports for convenience
pub use assessment::AssessmentFlow;
pub use client::{HttpBackend, MockBackend, ReportBackend};
pub use dashboard::DashboardFlow;
pub use locale::Locale;
pub use model::{AssessmentResult, DashboardSummary, Scores, UserSubmission};

/// Initialise the global tracing subscriber on stderr.
///
/// Reads the `LOG_FORMAT` environment variable to choose output format:
/// - `"json"`: structured JSON output for log aggregators
/// - anything else (including unset): human-readable pretty output
///
/// Filter level is controlled by `RUST_LOG` (e.g. `RUST_LOG=info`).
///
/// # Errors
///
/// Returns [`ReportError::Other`] if the global subscriber has already
/// been set (e.g. by a previous call or a test harness).
///
/// # Panics
///
/// This function never panics.
pub fn init_tracing() -> Result<(), ReportError> {
    let format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let result = match format.as_str() {
        "json" => tracing_subscriber::fmt()
            .json()
            .with_env_filter(EnvFilter::from_default_env())
            .with_current_span(true)
            .with_span_list(true)
            .try_init(),
        _ => tracing_subscriber::fmt()
            .pretty()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init(),
    };

    result.map_err(|e| ReportError::Other(format!("tracing init failed: {e}")))
}

/// Initialise the global tracing subscriber, appending to `path`.
///
/// The terminal UI owns stdout and stderr while the alternate screen is
/// active, so it logs here instead. Honors `LOG_FORMAT` like
/// [`init_tracing`]; the filter defaults to `info` when `RUST_LOG` is unset.
///
/// # Errors
///
/// Returns [`ReportError::Terminal`] if the file cannot be opened and
/// [`ReportError::Other`] if a subscriber is already installed.
pub fn init_tracing_to_file(path: &Path) -> Result<(), ReportError> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let result = match format.as_str() {
        "json" => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter())
            .with_writer(Mutex::new(file))
            .try_init(),
        _ => tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init(),
    };

    result.map_err(|e| ReportError::Other(format!("tracing init failed: {e}")))
}

/// Top-level client errors.
///
/// Every failure surface between the terminal and the backend maps to a
/// variant here.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The request never produced a response (connection refused, DNS, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-success HTTP status.
    #[error("backend returned {status}: {body}")]
    Status {
        /// Numeric HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The response body was not JSON or did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),

    /// A configuration value is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Terminal or file I/O failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Catch-all for errors that do not fit a specific variant.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display_includes_code_and_body() {
        let err = ReportError::Status {
            status: 502,
            body: "bad gateway".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("502"));
        assert!(msg.contains("bad gateway"));
    }

    #[test]
    fn test_config_error_display_includes_message() {
        let err = ReportError::Config("base_url must not be empty".to_string());
        assert!(err.to_string().contains("base_url must not be empty"));
    }

    #[test]
    fn test_io_error_converts_to_terminal_variant() {
        let err: ReportError = std::io::Error::new(std::io::ErrorKind::Other, "tty gone").into();
        assert!(matches!(err, ReportError::Terminal(_)));
    }

    #[test]
    fn test_init_tracing_second_call_returns_err() {
        // First call may succeed or fail depending on test execution order.
        let _ = init_tracing();
        let result = init_tracing();
        assert!(result.is_err(), "double init must return Err, not panic");
    }
}
