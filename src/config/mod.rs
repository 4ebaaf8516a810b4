//! # Module: Client Configuration
//!
//! ## Responsibility
//! Parse and validate the TOML configuration for the terminal client:
//! where the backend lives, how the UI renders, and where logs go.
//! ```text
//! health-report --config health-report.toml
//! ```
//!
//! ## Guarantees
//! - Deterministic: same TOML input always produces the same `ClientConfig`
//! - Validated: all semantic constraints are checked before a config is accepted
//! - Every section and field is optional; omitted values take documented defaults
//! - Schema-exportable: JSON Schema output enables IDE autocomplete
//!
//! ## NOT Responsible For
//! - Command-line overrides (the binary applies them, then re-validates)
//! - Building the HTTP client (that belongs to `client`)

pub mod loader;
pub mod validation;

pub use validation::ConfigError;

use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::client::DEFAULT_BASE_URL;
use crate::locale::Locale;

// ── Default value functions ──────────────────────────────────────────────

/// Default backend base URL.
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Default render interval: 100ms (10fps).
fn default_frame_ms() -> u64 {
    100
}

/// Default minimum terminal width.
fn default_min_cols() -> u16 {
    80
}

/// Default minimum terminal height.
fn default_min_rows() -> u16 {
    24
}

// ── Top-level config ─────────────────────────────────────────────────────

/// Root configuration for the client.
///
/// # Example
///
/// ```toml
/// [backend]
/// base_url = "http://127.0.0.1:5000"
/// timeout_ms = 10000
///
/// [ui]
/// locale = "ko"
/// frame_ms = 100
///
/// [logging]
/// file = "health-report.log"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ClientConfig {
    /// Backend connection settings.
    #[serde(default)]
    pub backend: BackendConfig,
    /// Rendering settings.
    #[serde(default)]
    pub ui: UiConfig,
    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct BackendConfig {
    /// Root URL under which `/analyze` and `/dashboard-data` are served.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout. Absent means requests may wait indefinitely.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: None,
        }
    }
}

/// Rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct UiConfig {
    /// Display language.
    #[serde(default)]
    pub locale: Locale,
    /// Interval between frames in milliseconds.
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,
    /// Below this width a resize notice replaces the UI.
    #[serde(default = "default_min_cols")]
    pub min_cols: u16,
    /// Below this height a resize notice replaces the UI.
    #[serde(default = "default_min_rows")]
    pub min_rows: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            frame_ms: default_frame_ms(),
            min_cols: default_min_cols(),
            min_rows: default_min_rows(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LoggingConfig {
    /// Append tracing output to this file. Without it the UI does not log.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// JSON Schema for [`ClientConfig`], pretty-printed.
///
/// # Errors
///
/// Returns the serializer error if the schema cannot be rendered.
pub fn schema_json() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schemars::schema_for!(ClientConfig))
}
