// src/config/app.rs
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;

use super::defaults::*;
use crate::consts::CONFIG_FILE;
use crate::error::{CoreError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub paths: Paths,
    pub logging: Logging,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Paths {
    /// Key file written by `keygen` by default and read by `encrypt_sample`
    pub key_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Logging {
    /// `tracing_subscriber::EnvFilter` directive, overridden by RUST_LOG
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            paths: default_paths(),
            logging: default_logging(),
        }
    }
}

impl Default for Paths {
    fn default() -> Self {
        default_paths()
    }
}

impl Default for Logging {
    fn default() -> Self {
        default_logging()
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Config> {
        toml::from_str(content).map_err(|e| CoreError::Config(e.to_string()))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config at runtime — falls back to defaults if missing or invalid
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path = Path::new(CONFIG_FILE);
        if !config_path.exists() {
            return Config::default();
        }

        // Runs before logging is set up, so warnings go straight to stderr
        Config::from_path(config_path).unwrap_or_else(|e| {
            eprintln!("Warning: {CONFIG_FILE} ignored ({e}) — using built-in defaults");
            Config::default()
        })
    })
}
