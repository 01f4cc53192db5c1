//! Runtime configuration from environment variables.
//!
//! Every setting has a default; unparseable values fall back to it.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::Theme;

pub const THEME_VAR: &str = "FLAPPY_ASCII_THEME";
pub const SEED_VAR: &str = "FLAPPY_ASCII_SEED";
pub const DATA_DIR_VAR: &str = "FLAPPY_ASCII_DATA_DIR";
pub const LOG_VAR: &str = "FLAPPY_ASCII_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub theme: Theme,
    /// Gap RNG seed; `None` means seed from the clock.
    pub seed: Option<u32>,
    /// Directory holding `store.json`; `None` means the platform data dir.
    pub data_dir: Option<PathBuf>,
    /// Log file; logging is off when unset.
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            theme: lookup(THEME_VAR)
                .and_then(|v| Theme::from_str(&v))
                .unwrap_or_default(),
            seed: lookup(SEED_VAR).and_then(|v| v.trim().parse::<u32>().ok()),
            data_dir: non_empty_path(lookup(DATA_DIR_VAR)),
            log_file: non_empty_path(lookup(LOG_VAR)),
        }
    }

    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn non_empty_path(value: Option<String>) -> Option<PathBuf> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
