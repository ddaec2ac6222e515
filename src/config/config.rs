use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::constants::{
    CONFIG_FILE, DEFAULT_SCAN_SEED, DEFAULT_SPLASH_DELAY_MS, DEFAULT_TICK_RATE_MS, SCAN_SEED_ENV,
};
use crate::error::{ErrorContext, ZooResult};
use crate::zoo_error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_splash_delay")]
    pub splash_delay_ms: u64,
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    #[serde(default)]
    pub skip_splash: bool,
    #[serde(default)]
    pub scan_seed: Option<u64>,
}

fn default_splash_delay() -> u64 {
    DEFAULT_SPLASH_DELAY_MS
}

fn default_tick_rate() -> u64 {
    DEFAULT_TICK_RATE_MS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            splash_delay_ms: DEFAULT_SPLASH_DELAY_MS,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            skip_splash: false,
            scan_seed: None,
        }
    }
}

impl Config {
    /// Seed for the scan simulator; the environment wins over the file.
    pub fn effective_scan_seed(&self) -> u64 {
        env::var(SCAN_SEED_ENV)
            .ok()
            .and_then(|raw| raw.trim().parse().ok())
            .or(self.scan_seed)
            .unwrap_or(DEFAULT_SCAN_SEED)
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Config::default(),
    }
}

/// Missing or unreadable files yield the defaults.
pub fn load_config_from(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }

    fs::read_to_string(path)
        .ok()
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

pub fn save_config(config: &Config) -> ZooResult<PathBuf> {
    let path = config_path().ok_or_else(|| zoo_error!(ConfigError, "Could not find home directory"))?;
    save_config_to(&path, config)?;
    Ok(path)
}

pub fn save_config_to(path: &Path, config: &Config) -> ZooResult<()> {
    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(path, config_str)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
}
