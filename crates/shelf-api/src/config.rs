//! # Client Settings
//!
//! Where the book service lives and how long to wait for it.
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000/api"
//! timeout_ms = 10000
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ApiError, ApiResult};

/// Book service base URL used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Request timeout used when nothing is configured.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Book service connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL including the `/api` prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout in milliseconds. Exceeding it is reported as a
    /// connection failure.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ApiSettings {
    /// Settings pointing at `base_url` with the default timeout.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        ApiSettings {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Parses the base URL and guarantees a trailing slash, so relative
    /// joins like `books/` land under `/api/` instead of replacing it.
    pub fn base(&self) -> ApiResult<Url> {
        let mut url = Url::parse(self.base_url.trim())?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::InvalidUrl(format!(
                "base URL must start with http:// or https://, got: {}",
                self.base_url
            )));
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(url)
    }

    /// Checks the settings without building a client.
    pub fn validate(&self) -> ApiResult<()> {
        self.base()?;
        if self.timeout_ms == 0 {
            return Err(ApiError::Client("timeout_ms must be greater than 0".into()));
        }
        Ok(())
    }
}
