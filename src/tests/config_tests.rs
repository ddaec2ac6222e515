use std::fs;

use tempfile::TempDir;

use crate::config::{load_config_from, save_config_to, Config};
use crate::constants::{DEFAULT_SPLASH_DELAY_MS, DEFAULT_TICK_RATE_MS};
use crate::error::ZooError;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = load_config_from(&dir.path().join("nope.json"));
    assert_eq!(config, Config::default());
    assert_eq!(config.splash_delay_ms, DEFAULT_SPLASH_DELAY_MS);
    assert_eq!(config.tick_rate_ms, DEFAULT_TICK_RATE_MS);
}

#[test]
fn test_malformed_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();

    assert_eq!(load_config_from(&path), Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "skip_splash": true }"#).unwrap();

    let config = load_config_from(&path);
    assert!(config.skip_splash);
    assert_eq!(config.splash_delay_ms, DEFAULT_SPLASH_DELAY_MS);
    assert_eq!(config.scan_seed, None);
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    let config = Config {
        splash_delay_ms: 500,
        tick_rate_ms: 50,
        skip_splash: true,
        scan_seed: Some(7),
    };

    save_config_to(&path, &config).unwrap();

    assert_eq!(load_config_from(&path), config);
}

#[test]
fn test_save_into_missing_dir_names_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope").join("config.json");

    match save_config_to(&path, &Config::default()) {
        Err(ZooError::Unknown(msg)) => {
            assert!(msg.contains("Failed to write config to"));
            assert!(msg.contains("nope"));
        }
        other => panic!("Expected ZooError::Unknown, got {:?}", other),
    }
}
