use std::io::Write;

use tempfile::NamedTempFile;
use tenkey::config::{Config, ConfigError};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn loads_a_full_config() {
    let file = write_config(
        r#"
[display]
precision = 8

[ui]
tick_ms = 100
"#,
    );
    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(config.display.precision, Some(8));
    assert_eq!(config.ui.tick_ms, 100);
}

#[test]
fn empty_file_yields_defaults() {
    let file = write_config("");
    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(config.display.precision, None);
    assert_eq!(config.ui.tick_ms, 250);
}

#[test]
fn missing_explicit_path_is_an_error() {
    let err = Config::load_from(std::path::Path::new("/nonexistent/tenkey.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let file = write_config("display = nonsense");
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn zero_tick_fails_validation() {
    let file = write_config("[ui]\ntick_ms = 0\n");
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn excessive_precision_fails_validation() {
    let file = write_config("[display]\nprecision = 40\n");
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}
