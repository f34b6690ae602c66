//! User configuration
//!
//! Read from `<config dir>/movie-search/config.toml`. Every key is optional.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::widget::WidgetSettings;

/// Overrides `base_url` when set
pub const BASE_URL_ENV: &str = "MOVIE_SEARCH_URL";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {0}: {1}")]
    Read(PathBuf, io::Error),
    #[error("Failed to parse {0}: {1}")]
    Parse(PathBuf, toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Movie site root; search and navigation routes hang off it
    pub base_url: String,
    pub debounce_ms: u64,
    pub min_query_len: usize,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            debounce_ms: 300,
            min_query_len: 2,
            request_timeout_secs: 10,
        }
    }
}

impl Config {
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("movie-search").join("config.toml"))
    }

    /// Load from the default location. Environment overrides are applied
    /// separately so they survive a broken file.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn with_env_overrides(self) -> Self {
        self.with_base_url(std::env::var(BASE_URL_ENV).ok())
    }

    /// Replace `base_url` unless `url` is missing or blank
    pub fn with_base_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            if !url.trim().is_empty() {
                self.base_url = url.trim().to_string();
            }
        }
        self
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
        toml::from_str(&raw).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
    }

    pub fn widget_settings(&self) -> WidgetSettings {
        WidgetSettings {
            debounce: Duration::from_millis(self.debounce_ms),
            // an empty query must never be sent
            min_query_len: self.min_query_len.max(1),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Absolute URL for a site route like `/?query=...`
    pub fn resolve(&self, route: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), route)
    }
}
