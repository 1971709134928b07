//! Client configuration.

use std::env;
use std::time::Duration;

use url::Url;

use crate::error::{AriError, Result};

/// Base URL used when `ARI_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8088/ari";

/// Connection settings for [`AriClient`](crate::AriClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AriConfig {
    /// Root of the REST interface, e.g. `http://pbx.local:8088/ari`
    pub base_url: String,
    /// Per-request timeout; `None` leaves reqwest's default (no timeout)
    pub timeout: Option<Duration>,
}

impl Default for AriConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl AriConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Load from `ARI_BASE_URL` and `ARI_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = lookup("ARI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = match lookup("ARI_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    AriError::Config(format!("ARI_TIMEOUT_SECS must be a whole number, got {raw:?}"))
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let config = Self { base_url, timeout };
        config.validate()?;
        Ok(config)
    }

    /// The base URL must be an absolute `http`/`https` URL with a host.
    pub(crate) fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            AriError::Config(format!("invalid base URL {:?}: {e}", self.base_url))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(AriError::Config(format!(
                "base URL must be http(s), got {:?}",
                self.base_url
            )));
        }
        if url.host_str().map_or(true, str::is_empty) {
            return Err(AriError::Config(format!(
                "base URL has no host: {:?}",
                self.base_url
            )));
        }
        Ok(())
    }

    /// Base URL without a trailing slash.
    pub(crate) fn normalized_base_url(&self) -> String {
        self.base_url.trim_end_matches('/').to_string()
    }
}
