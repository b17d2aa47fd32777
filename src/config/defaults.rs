// src/config/defaults.rs
use std::path::PathBuf;

use crate::config::app::{Logging, Paths};
use crate::consts::{DEFAULT_KEY_FILE, DEFAULT_LOG_LEVEL};

pub fn default_paths() -> Paths {
    Paths {
        key_file: PathBuf::from(DEFAULT_KEY_FILE),
    }
}

pub fn default_logging() -> Logging {
    Logging {
        level: DEFAULT_LOG_LEVEL.into(),
    }
}
