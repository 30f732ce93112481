use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{AppError, Result};

pub const DEFAULT_FILTER_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_SIDEBAR_WIDTH: u16 = 32;

/// User settings from `config.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub filter_debounce_ms: u64,
    pub sidebar_width: u16,
    /// Workspace name under the data directory.
    pub workspace: String,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filter_debounce_ms: DEFAULT_FILTER_DEBOUNCE_MS,
            sidebar_width: DEFAULT_SIDEBAR_WIDTH,
            workspace: String::from("default"),
            log_file: None,
        }
    }
}

impl Config {
    pub fn default_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("reqtree").join("config.toml")
    }

    /// Load from `path`. A missing file yields defaults; a malformed one is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        toml::from_str(&content).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn filter_debounce(&self) -> Duration {
        Duration::from_millis(self.filter_debounce_ms)
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| {
            let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
            base.join("reqtree").join("reqtree.log")
        })
    }
}
