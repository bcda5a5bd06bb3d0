//! # Shelf Configuration
//!
//! Where the book service lives and which scanner to read.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line flags (highest priority)                              │
//! │     --api-url http://books.local:8000/api                              │
//! │     --scanner /dev/ttyACM0                                             │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     SHELF_API_URL, SHELF_API_TIMEOUT_MS, SHELF_SCANNER_DEVICE          │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config <PATH>, or                                                │
//! │     ~/.config/shelf/config.toml (Linux)                                │
//! │     ~/Library/Application Support/shelf/config.toml (macOS)            │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     http://localhost:8000/api, 10 s timeout, stdin scanner             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [api]
//! base_url = "http://localhost:8000/api"
//! timeout_ms = 10000
//!
//! [scanner]
//! device = "-"        # "-" reads scanned codes from stdin
//! facing = "rear"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shelf_api::ApiSettings;
use shelf_register::ScannerSettings;
use thiserror::Error;
use tracing::{debug, info, warn};

pub const ENV_API_URL: &str = "SHELF_API_URL";
pub const ENV_API_TIMEOUT_MS: &str = "SHELF_API_TIMEOUT_MS";
pub const ENV_SCANNER_DEVICE: &str = "SHELF_SCANNER_DEVICE";

// =============================================================================
// Config Error
// =============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("No config path available")]
    NoConfigPath,
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Shelf Config
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelfConfig {
    /// Book service connection.
    #[serde(default)]
    pub api: ApiSettings,

    /// Capture device.
    #[serde(default)]
    pub scanner: ScannerSettings,
}

impl ShelfConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file
    /// 3. Environment variables
    ///
    /// Not validated here: command line flags still apply on top.
    pub fn load(config_path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = Self::default();

        let path = config_path.map(Path::to_path_buf).or_else(Self::default_config_path);
        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else if config_path.is_some() {
                warn!(?path, "Config file not found, using defaults");
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        Ok(config)
    }

    /// Writes the configuration as TOML, creating parent directories.
    pub fn save(&self, config_path: Option<&Path>) -> ConfigResult<PathBuf> {
        let path = config_path
            .map(Path::to_path_buf)
            .or_else(Self::default_config_path)
            .ok_or(ConfigError::NoConfigPath)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, self.to_toml()?)?;

        info!(?path, "Config saved");
        Ok(path)
    }

    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        self.api
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        if self.scanner.device.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "scanner device must not be empty (use \"-\" for stdin)".into(),
            ));
        }

        Ok(())
    }

    /// Applies `SHELF_*` environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_API_URL) {
            debug!(url = %url, "Overriding API URL from environment");
            self.api.base_url = url;
        }

        if let Some(timeout) = lookup(ENV_API_TIMEOUT_MS) {
            match timeout.parse::<u64>() {
                Ok(ms) => self.api.timeout_ms = ms,
                Err(_) => warn!(value = %timeout, "Ignoring non-numeric {}", ENV_API_TIMEOUT_MS),
            }
        }

        if let Some(device) = lookup(ENV_SCANNER_DEVICE) {
            debug!(device = %device, "Overriding scanner device from environment");
            self.scanner.device = device;
        }
    }

    /// Applies `--api-url` / `--scanner`.
    pub fn apply_flag_overrides(&mut self, api_url: Option<String>, scanner: Option<String>) {
        if let Some(url) = api_url {
            self.api.base_url = url;
        }
        if let Some(device) = scanner {
            self.scanner.device = device;
        }
    }

    /// Platform config file path (`shelf/config.toml`).
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "shelf")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
