//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use galaxy::config::AppConfig;
use serial_test::serial;
use std::fs;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("GALAXY_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("GALAXY_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_sets_seed() {
    std::env::set_var("GALAXY_FIELD__SEED", "42");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.field.seed, Some(42));
    std::env::remove_var("GALAXY_FIELD__SEED");
}

#[test]
#[serial]
fn test_default_file_matches_builtin_defaults() {
    std::env::remove_var("GALAXY_WINDOW__TITLE");

    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Galaxy");
    assert_eq!(config.camera.start_position, [3.0, 3.0, 3.0]);
    assert_eq!(config.field.initial_preset, "galaxy");
}

#[test]
#[serial]
fn test_user_file_overrides_default() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("default.toml"),
        "[window]\ntitle = \"Default\"\nwidth = 800\n",
    )
    .unwrap();
    fs::write(dir.path().join("user.toml"), "[window]\ntitle = \"Mine\"\n").unwrap();

    let config = AppConfig::load_from(dir.path()).unwrap();
    assert_eq!(config.window.title, "Mine");
    assert_eq!(config.window.width, 800);
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let config = AppConfig::load_from("/nonexistent/config").unwrap();
    assert_eq!(config.window.width, 1280);
    assert!(config.rendering.additive_blending);
}

#[test]
#[serial]
fn test_bad_value_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("default.toml"), "[window]\nwidth = \"wide\"\n").unwrap();

    let err = AppConfig::load_from(dir.path()).unwrap_err();
    assert!(format!("{}", err).starts_with("Configuration error"));
}
