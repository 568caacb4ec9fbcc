//! Configuration management for NameSweep.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default remote catalog document (platform name -> descriptor).
pub const DEFAULT_CATALOG_URL: &str =
    "https://raw.githubusercontent.com/0xSaikat/findme/main/data.json";

/// Default CORS relay endpoint; the percent-encoded target URL is appended
/// directly as the query string.
pub const DEFAULT_RELAY_URL: &str = "https://corsproxy.io/?";

/// Main application configuration.
///
/// This is loaded from `~/.config/namesweep/config.toml` (or platform
/// equivalent). If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Catalog source settings
    pub catalog: CatalogConfig,
    /// Scanning behavior settings
    pub scanning: ScanningConfig,
}

/// Catalog source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// URL of the remote catalog JSON document
    pub url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_CATALOG_URL.to_string(),
        }
    }
}

/// Scanning behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanningConfig {
    /// Relay endpoint used for cross-origin probes
    pub relay_url: String,
    /// Fixed delay between probes in milliseconds
    pub probe_delay_ms: u64,
    /// Per-probe HTTP timeout in seconds
    pub probe_timeout_secs: u64,
    /// User agent sent with probe requests
    pub user_agent: String,
}

impl Default for ScanningConfig {
    fn default() -> Self {
        Self {
            relay_url: DEFAULT_RELAY_URL.to_string(),
            probe_delay_ms: 50,
            probe_timeout_secs: 15,
            user_agent: format!("namesweep/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl AppConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            tracing::debug!("Loading config from {}", config_path.display());
            let contents = fs::read_to_string(&config_path)?;
            let config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `NAMESWEEP_CATALOG_URL`: Override the catalog source URL
    /// - `NAMESWEEP_RELAY_URL`: Override the probe relay endpoint
    /// - `NAMESWEEP_PROBE_DELAY_MS`: Override the inter-probe delay
    /// - `NAMESWEEP_PROBE_TIMEOUT_SECS`: Override the per-probe timeout
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;
        config.apply_env();
        Ok(config)
    }

    /// Apply environment variable overrides to an already-loaded config.
    pub fn apply_env(&mut self) {
        if let Ok(val) = std::env::var("NAMESWEEP_CATALOG_URL") {
            if !val.is_empty() {
                tracing::debug!("Override catalog.url from env: {}", val);
                self.catalog.url = val;
            }
        }

        if let Ok(val) = std::env::var("NAMESWEEP_RELAY_URL") {
            if !val.is_empty() {
                tracing::debug!("Override scanning.relay_url from env: {}", val);
                self.scanning.relay_url = val;
            }
        }

        if let Ok(val) = std::env::var("NAMESWEEP_PROBE_DELAY_MS") {
            if let Ok(delay) = val.parse() {
                tracing::debug!("Override scanning.probe_delay_ms from env: {}", delay);
                self.scanning.probe_delay_ms = delay;
            }
        }

        if let Ok(val) = std::env::var("NAMESWEEP_PROBE_TIMEOUT_SECS") {
            if let Ok(timeout) = val.parse() {
                tracing::debug!("Override scanning.probe_timeout_secs from env: {}", timeout);
                self.scanning.probe_timeout_secs = timeout;
            }
        }
    }

    /// Save configuration to disk.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> ConfigResult<()> {
        let config_path = Self::config_path()?;
        let config_dir = config_path
            .parent()
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "config_path".to_string(),
                reason: "no parent directory".to_string(),
            })?;

        fs::create_dir_all(config_dir)?;
        tracing::debug!("Saving config to {}", config_path.display());

        let contents = toml::to_string_pretty(self)?;
        fs::write(config_path, contents)?;
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/namesweep/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs =
            ProjectDirs::from("org", "namesweep", "namesweep").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}
