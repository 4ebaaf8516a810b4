//! Configuration validation engine.
//!
//! ## Responsibility
//! Validate semantic constraints on a parsed [`ClientConfig`] that cannot
//! be expressed through the type system alone (URL scheme, ranges).
//!
//! ## Guarantees
//! - Every validation rule has at least one test that triggers it
//! - Validation collects *all* errors before returning (no short-circuit)
//! - Error messages include the field path and the invalid value
//!
//! ## NOT Responsible For
//! - Parsing TOML (that belongs to `loader`)
//! - File I/O (that belongs to `loader`)

use super::ClientConfig;

/// Shortest frame interval accepted.
pub const MIN_FRAME_MS: u64 = 16;

/// Longest frame interval accepted.
pub const MAX_FRAME_MS: u64 = 1000;

/// Errors arising from configuration parsing, validation, or I/O.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parsing failed.
    #[error("Parse error in {file}: {source}")]
    Parse {
        /// Path of the file that failed to parse.
        file: String,
        /// Underlying TOML deserialization error.
        #[source]
        source: toml::de::Error,
    },

    /// One or more semantic validation rules failed.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A specific field has an out-of-range or contradictory value.
    #[error("Field '{field}' has invalid value {value}: {reason}")]
    InvalidField {
        /// Dot-separated field path (e.g., "backend.base_url").
        field: String,
        /// String representation of the invalid value.
        value: String,
        /// Human-readable explanation of the constraint.
        reason: String,
    },

    /// File I/O error.
    #[error("IO error reading {file}: {source}")]
    Io {
        /// Path of the file that could not be read.
        file: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Validate all semantic constraints on a [`ClientConfig`].
///
/// # Returns
///
/// - `Ok(())` if all constraints pass.
/// - `Err(Vec<ConfigError>)` with every violation found.
pub fn validate(config: &ClientConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    // ── Backend ──────────────────────────────────────────────────────
    let url = config.backend.base_url.trim();
    if url.is_empty() {
        errors.push(ConfigError::InvalidField {
            field: "backend.base_url".into(),
            value: String::new(),
            reason: "base URL must not be empty".into(),
        });
    } else if !(url.starts_with("http://") || url.starts_with("https://")) {
        errors.push(ConfigError::InvalidField {
            field: "backend.base_url".into(),
            value: url.to_string(),
            reason: "must start with http:// or https://".into(),
        });
    }

    if config.backend.timeout_ms == Some(0) {
        errors.push(ConfigError::InvalidField {
            field: "backend.timeout_ms".into(),
            value: "0".into(),
            reason: "must be at least 1ms; omit it to disable the timeout".into(),
        });
    }

    // ── UI ───────────────────────────────────────────────────────────
    if !(MIN_FRAME_MS..=MAX_FRAME_MS).contains(&config.ui.frame_ms) {
        errors.push(ConfigError::InvalidField {
            field: "ui.frame_ms".into(),
            value: config.ui.frame_ms.to_string(),
            reason: format!("must be between {MIN_FRAME_MS} and {MAX_FRAME_MS}"),
        });
    }

    if config.ui.min_cols < 40 {
        errors.push(ConfigError::InvalidField {
            field: "ui.min_cols".into(),
            value: config.ui.min_cols.to_string(),
            reason: "must be at least 40".into(),
        });
    }

    if config.ui.min_rows < 12 {
        errors.push(ConfigError::InvalidField {
            field: "ui.min_rows".into(),
            value: config.ui.min_rows.to_string(),
            reason: "must be at least 12".into(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ClientConfig {
        ClientConfig::default()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&valid()).is_ok());
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let mut config = valid();
        config.backend.base_url = "  ".into();
        let errors = validate(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("backend.base_url"));
    }

    #[test]
    fn test_base_url_without_scheme_rejected() {
        let mut config = valid();
        config.backend.base_url = "localhost:5000".into();
        let errors = validate(&config).unwrap_err();
        assert!(errors[0].to_string().contains("http://"));
    }

    #[test]
    fn test_https_base_url_accepted() {
        let mut config = valid();
        config.backend.base_url = "https://health.example.com".into();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = valid();
        config.backend.timeout_ms = Some(0);
        let errors = validate(&config).unwrap_err();
        assert!(errors[0].to_string().contains("backend.timeout_ms"));
    }

    #[test]
    fn test_frame_ms_out_of_range_rejected() {
        let mut config = valid();
        config.ui.frame_ms = 0;
        assert!(validate(&config).is_err());
        config.ui.frame_ms = MAX_FRAME_MS + 1;
        assert!(validate(&config).is_err());
        config.ui.frame_ms = MIN_FRAME_MS;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_tiny_terminal_minimum_rejected() {
        let mut config = valid();
        config.ui.min_cols = 10;
        config.ui.min_rows = 5;
        let errors = validate(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = valid();
        config.backend.base_url = String::new();
        config.backend.timeout_ms = Some(0);
        config.ui.frame_ms = 0;
        let errors = validate(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_io_error_display_includes_file() {
        let err = ConfigError::Io {
            file: "missing.toml".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("missing.toml"));
    }
}
