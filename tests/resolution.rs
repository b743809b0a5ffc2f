//! Integration tests for layered configuration resolution.
//!
//! Nothing here mutates the process environment; env-var behavior lives in
//! `env_overrides.rs`, a separate test binary.

use std::fs;
use tempfile::TempDir;
use workout_config::prelude::*;
use workout_config::sources::CONFIG_FILE_NAME;

const DEFAULT_DATA_SOURCE: &str = "postgresql://maxroach@localhost:26257/workout?sslmode=disable";

#[test]
fn test_default_values() {
    let config = ResolvedConfig::defaults();
    assert_eq!(config.data_source(), DEFAULT_DATA_SOURCE);
    assert_eq!(config.logging_level(), "INFO");
}

#[test]
fn test_load_without_file_equals_defaults() {
    let empty_dir = TempDir::new().unwrap();
    let config = ResolvedConfig::load(&[empty_dir.path()]).unwrap();
    assert_eq!(config, ResolvedConfig::defaults());
}

#[test]
fn test_load_with_empty_search_path_equals_defaults() {
    let config = ResolvedConfig::load::<&str>(&[]).unwrap();
    assert_eq!(config, ResolvedConfig::defaults());
}

#[test]
fn test_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        r#"
[data]
source = "postgresql://app@db.internal:26257/workout"

[logging]
level = "DEBUG"
"#,
    )
    .unwrap();

    let config = ResolvedConfig::load(&[dir.path()]).unwrap();
    assert_eq!(config.data_source(), "postgresql://app@db.internal:26257/workout");
    assert_eq!(config.logging_level(), "DEBUG");
}

#[test]
fn test_partial_file_keeps_defaults_for_absent_keys() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "[logging]\nlevel = \"WARN\"\n",
    )
    .unwrap();

    let config = ResolvedConfig::load(&[dir.path()]).unwrap();
    assert_eq!(config.logging_level(), "WARN");
    assert_eq!(config.data_source(), DEFAULT_DATA_SOURCE);
}

#[test]
fn test_first_search_path_with_file_wins() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    fs::write(
        first.path().join(CONFIG_FILE_NAME),
        "[logging]\nlevel = \"DEBUG\"\n",
    )
    .unwrap();
    fs::write(
        second.path().join(CONFIG_FILE_NAME),
        "[logging]\nlevel = \"ERROR\"\n",
    )
    .unwrap();

    let config = ResolvedConfig::load(&[first.path(), second.path()]).unwrap();
    assert_eq!(config.logging_level(), "DEBUG");
}

#[test]
fn test_malformed_file_fails_the_load() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "[data\nsource = \"truncated",
    )
    .unwrap();

    let err = ResolvedConfig::load(&[dir.path()]).unwrap_err();
    let ConfigError::Load { path, .. } = err;
    assert!(path.ends_with(CONFIG_FILE_NAME));
}

#[test]
fn test_set_wins_over_file_value() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "[logging]\nlevel = \"DEBUG\"\n",
    )
    .unwrap();

    let mut config = ResolvedConfig::load(&[dir.path()]).unwrap();
    config.set(Setting::LoggingLevel, "ERROR");
    assert_eq!(config.logging_level(), "ERROR");
}

#[test]
fn test_set_is_scoped_to_one_instance() {
    let mut first = ResolvedConfig::defaults();
    let second = ResolvedConfig::defaults();

    first.set(Setting::DataSource, "postgresql://override@localhost/workout");

    assert_eq!(first.data_source(), "postgresql://override@localhost/workout");
    assert_eq!(second.data_source(), DEFAULT_DATA_SOURCE);
}

#[test]
fn test_defaults_is_idempotent() {
    let first = ResolvedConfig::defaults();
    let second = ResolvedConfig::defaults();
    for setting in Setting::ALL {
        assert_eq!(first.get(setting), second.get(setting));
    }
}

#[test]
fn test_loads_are_independent_instances() {
    let dir = TempDir::new().unwrap();
    let mut first = ResolvedConfig::load(&[dir.path()]).unwrap();
    let second = ResolvedConfig::load(&[dir.path()]).unwrap();

    first.set(Setting::LoggingLevel, "TRACE");

    assert_eq!(first.logging_level(), "TRACE");
    assert_eq!(second.logging_level(), "INFO");
}
