// tests/core/config.rs
use std::path::PathBuf;

use simple_encrypt::config::Config;
use simple_encrypt::error::CoreError;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.paths.key_file, PathBuf::from("encryption.key"));
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_partial_file_keeps_remaining_defaults() {
    let config = Config::from_toml("[paths]\nkey_file = \"keys/app.key\"\n").unwrap();
    assert_eq!(config.paths.key_file, PathBuf::from("keys/app.key"));
    assert_eq!(config.logging.level, "warn");

    let empty = Config::from_toml("").unwrap();
    assert_eq!(empty, Config::default());
}

#[test]
fn test_full_file() {
    let config = Config::from_toml(
        r#"
        [paths]
        key_file = "/etc/simple-encrypt/prod.key"

        [logging]
        level = "simple_encrypt=debug"
        "#,
    )
    .unwrap();
    assert_eq!(
        config.paths.key_file,
        PathBuf::from("/etc/simple-encrypt/prod.key")
    );
    assert_eq!(config.logging.level, "simple_encrypt=debug");
}

#[test]
fn test_malformed_or_unknown_fields_are_rejected() {
    assert!(matches!(
        Config::from_toml("[paths\nkey_file = 1"),
        Err(CoreError::Config(_))
    ));
    assert!(matches!(
        Config::from_toml("[paths]\nkey_flie = \"typo.key\""),
        Err(CoreError::Config(_))
    ));
}

#[test]
fn test_missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::from_path(dir.path().join("simple-encrypt.toml"));
    assert!(matches!(result, Err(CoreError::Io(_))));
}
