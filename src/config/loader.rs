//! Configuration file loading.
//!
//! ## Responsibility
//! Read a TOML file from disk, parse it into a [`ClientConfig`], and run
//! validation before returning.
//!
//! ## Guarantees
//! - A successfully loaded config is always validated
//! - I/O errors and parse errors are distinguished in the error type
//! - File path is included in every error message

use std::path::Path;

use super::validation::{self, ConfigError};
use super::ClientConfig;

/// Load a [`ClientConfig`] from a TOML file.
///
/// # Returns
///
/// - `Ok(ClientConfig)` if the file is readable, well-formed, and valid.
/// - `Err(ConfigError::Io)` if the file cannot be read.
/// - `Err(ConfigError::Parse)` if the TOML is malformed.
/// - `Err(ConfigError::Validation)` if semantic constraints are violated.
pub fn load_from_file(path: &Path) -> Result<ClientConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        file: path.display().to_string(),
        source: e,
    })?;

    load_from_str(&content, &path.display().to_string())
}

/// Load a [`ClientConfig`] from a TOML string.
///
/// `source_name` identifies the source in error messages.
pub fn load_from_str(content: &str, source_name: &str) -> Result<ClientConfig, ConfigError> {
    let config: ClientConfig = toml::from_str(content).map_err(|e| ConfigError::Parse {
        file: source_name.to_string(),
        source: e,
    })?;

    check(&config)?;
    Ok(config)
}

/// Run [`validation::validate`] and fold every violation into one
/// [`ConfigError::Validation`].
///
/// The binary calls this again after applying command-line overrides.
pub fn check(config: &ClientConfig) -> Result<(), ConfigError> {
    validation::validate(config).map_err(|errors| {
        ConfigError::Validation(
            errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("\n"),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use std::io::Write;

    const VALID_TOML: &str = r#"
[backend]
base_url = "http://10.0.0.5:5000"
timeout_ms = 8000

[ui]
locale = "en"
frame_ms = 50

[logging]
file = "/tmp/health-report.log"
"#;

    #[test]
    fn test_load_from_str_valid_toml_succeeds() {
        let config = load_from_str(VALID_TOML, "test").expect("test: valid config");
        assert_eq!(config.backend.base_url, "http://10.0.0.5:5000");
        assert_eq!(config.backend.timeout_ms, Some(8000));
        assert_eq!(config.ui.locale, Locale::En);
        assert!(config.logging.file.is_some());
    }

    #[test]
    fn test_load_from_str_invalid_toml_returns_parse_error() {
        let result = load_from_str("not valid toml [[[", "bad.toml");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_from_str_validation_failure_returns_validation_error() {
        let result = load_from_str("[backend]\nbase_url = \"ftp://x\"\n", "scheme.toml");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_parse_error_names_source() {
        let err = load_from_str("invalid [[[", "my-source.toml").unwrap_err();
        assert!(err.to_string().contains("my-source.toml"));
    }

    #[test]
    fn test_load_from_file_valid_toml_succeeds() {
        let dir = tempfile::tempdir().expect("test: create tempdir");
        let path = dir.path().join("client.toml");
        let mut f = std::fs::File::create(&path).expect("test: create file");
        f.write_all(VALID_TOML.as_bytes()).expect("test: write");
        drop(f);

        let config = load_from_file(&path).expect("test: load");
        assert_eq!(config.ui.frame_ms, 50);
    }

    #[test]
    fn test_load_from_file_missing_returns_io_error() {
        let result = load_from_file(Path::new("/nonexistent/path/client.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_check_joins_all_violations() {
        let mut config = ClientConfig::default();
        config.ui.frame_ms = 0;
        config.backend.timeout_ms = Some(0);
        let err = check(&config).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("ui.frame_ms"));
        assert!(msg.contains("backend.timeout_ms"));
    }
}
