//! Client configuration
//!
//! Read from `<config dir>/portal-search/config.toml`, then overridden by
//! the environment.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Overrides `backend_url` when set
pub const BACKEND_URL_ENV: &str = "PORTAL_SEARCH_BACKEND_URL";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the smart search backend
    pub backend_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("portal-search").join("config.toml"))
    }

    /// Load from the default location and environment.
    ///
    /// A broken config file is logged and replaced by defaults.
    pub fn load() -> Self {
        let from_file = match Self::default_path() {
            Some(path) => Self::load_from(&path).unwrap_or_else(|e| {
                tracing::warn!("{} (using defaults)", e);
                Self::default()
            }),
            None => Self::default(),
        };

        from_file.with_backend_override(std::env::var(BACKEND_URL_ENV).ok())
    }

    /// Load from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config at {:?}", path);
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config: Config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config.normalized())
    }

    pub fn with_backend_override(mut self, backend_url: Option<String>) -> Self {
        if let Some(url) = backend_url.filter(|u| !u.trim().is_empty()) {
            self.backend_url = url.trim().to_string();
        }
        self.normalized()
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.backend_url.trim_end_matches('/').len();
        self.backend_url.truncate(trimmed);
        self
    }
}
