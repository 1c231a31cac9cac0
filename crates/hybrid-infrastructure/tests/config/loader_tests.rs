//! Configuration Loader Tests

use hybrid_domain::error::Error;
use hybrid_infrastructure::config::{
    AppConfig, ConfigBuilder, ConfigLoader, HostConfig, LoggingConfig, validate_app_config,
};
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("hybrid.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let loader = ConfigLoader::new().with_config_path(dir.path().join("absent.toml"));

    let config = loader.load().unwrap();

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.host.app_mount, "#app");
    assert_eq!(config.host.head_mount, "head::after");
    assert_eq!(config.host.functions, vec!["showAlert".to_string()]);
    assert!(config.container.validate_on_build);
    assert!(config.container.validate_scopes);
}

#[test]
fn test_file_values_override_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[logging]
level = "debug"

[host]
base_address = "http://example.test/app/"
interop_timeout_ms = 250

[container]
validate_scopes = false

[shell]
title = "Demo"
"#,
    );

    let config = ConfigLoader::new().with_config_path(&path).load().unwrap();

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.host.base_address, "http://example.test/app/");
    assert_eq!(config.host.interop_timeout().as_millis(), 250);
    assert_eq!(config.host.app_mount, "#app");
    assert!(config.container.validate_on_build);
    assert!(!config.container.validate_scopes);
    assert_eq!(config.shell.title, "Demo");
}

#[test]
fn test_saved_config_loads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.toml");
    let config = ConfigBuilder::new()
        .with_logging(LoggingConfig {
            level: "warn".to_string(),
            ..LoggingConfig::default()
        })
        .build();

    let loader = ConfigLoader::new().with_config_path(&path);
    loader.save_to_file(&config, &path).unwrap();
    let loaded = loader.load().unwrap();

    assert_eq!(loaded.logging.level, "warn");
    assert_eq!(loaded.host.base_address, config.host.base_address);
    assert_eq!(loader.config_path(), Some(path.as_path()));
}

#[test]
fn test_invalid_file_is_a_configuration_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[host]\ninterop_timeout_ms = \"soon\"\n");

    let err = ConfigLoader::new().with_config_path(&path).load().unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_zero_interop_timeout_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[host]\ninterop_timeout_ms = 0\n");

    let err = ConfigLoader::new().with_config_path(&path).load().unwrap_err();
    assert!(err.to_string().contains("Interop timeout"));
}

#[test]
fn test_shared_mount_point_is_rejected() {
    let config = ConfigBuilder::new()
        .with_host(HostConfig {
            head_mount: "#app".to_string(),
            ..HostConfig::default()
        })
        .build();

    let err = validate_app_config(&config).unwrap_err();
    assert!(err.to_string().contains("#app"));
}

#[test]
fn test_unknown_log_level_is_rejected() {
    let mut config = AppConfig::default();
    config.logging.level = "loud".to_string();

    assert!(validate_app_config(&config).is_err());
}

#[test]
fn test_log_retention_is_read_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[logging]\nmax_files = 3\n");

    let config = ConfigLoader::new().with_config_path(&path).load().unwrap();
    assert_eq!(config.logging.max_files, 3);

    let path = write_config(&dir, "[logging]\nmax_files = 0\n");
    let err = ConfigLoader::new().with_config_path(&path).load().unwrap_err();
    assert!(err.to_string().contains("max_files"));
}
