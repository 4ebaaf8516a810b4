//! Config loading from disk and schema export.

use std::io::Write;

use health_risk_report::config::{loader, schema_json, ConfigError};
use health_risk_report::{HttpBackend, Locale};

#[test]
fn test_full_config_file_round_trip_into_backend() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("health-report.toml");
    let mut f = std::fs::File::create(&file).expect("create");
    writeln!(
        f,
        "[backend]\nbase_url = \"https://health.example.test/\"\ntimeout_ms = 3000\n\n[ui]\nlocale = \"en\"\nmin_cols = 100"
    )
    .expect("write");
    drop(f);

    let config = loader::load_from_file(&file).expect("load");
    assert_eq!(config.ui.locale, Locale::En);
    assert_eq!(config.ui.min_cols, 100);
    assert_eq!(config.ui.frame_ms, 100);

    let backend = HttpBackend::from_config(&config.backend);
    assert_eq!(backend.base_url(), "https://health.example.test");
}

#[test]
fn test_empty_file_uses_defaults() {
    let config = loader::load_from_str("", "empty.toml").expect("defaults");
    assert_eq!(config.backend.base_url, "http://127.0.0.1:5000");
    assert_eq!(config.backend.timeout_ms, None);
    assert_eq!(config.ui.locale, Locale::Ko);
    assert!(config.logging.file.is_none());
}

#[test]
fn test_bad_values_collected_into_one_error() {
    let err = loader::load_from_str(
        "[backend]\nbase_url = \"\"\n[ui]\nframe_ms = 0\n",
        "bad.toml",
    )
    .unwrap_err();
    match err {
        ConfigError::Validation(msg) => {
            assert!(msg.contains("backend.base_url"), "{msg}");
            assert!(msg.contains("ui.frame_ms"), "{msg}");
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn test_unknown_locale_is_parse_error() {
    let err = loader::load_from_str("[ui]\nlocale = \"fr\"\n", "locale.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_schema_lists_every_section() {
    let schema = schema_json().expect("schema");
    let value: serde_json::Value = serde_json::from_str(&schema).expect("json");
    let text = value.to_string();
    for key in ["backend", "ui", "logging", "base_url", "frame_ms"] {
        assert!(text.contains(key), "schema missing {key}");
    }
}
