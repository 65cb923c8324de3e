//! Builder for creating and configuring HttpBackend instances.

use std::time::Duration;

use log::debug;

use super::HttpBackend;
use crate::error::{HttpResultExt, Result, WeeknightError};

/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "WEEKNIGHT_API_URL";

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.useweeknight.com";

/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Builder for creating and configuring HttpBackend instances.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
}

impl ClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the API base URL.
    ///
    /// If not specified, uses `$WEEKNIGHT_API_URL` or
    /// `https://api.useweeknight.com`.
    pub fn with_base_url<S: AsRef<str>>(mut self, url: Option<S>) -> Self {
        if let Some(url) = url {
            self.base_url = Some(url.as_ref().to_string());
        }
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the configured backend client.
    ///
    /// # Errors
    ///
    /// Returns `WeeknightError::Configuration` if the base URL is not an
    /// http(s) URL.
    /// Returns `WeeknightError::Http` if the TLS backend cannot be initialized.
    pub fn build(self) -> Result<HttpBackend> {
        let base_url = self.resolve_base_url();
        Self::validate_base_url(&base_url)?;

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("weeknight/", env!("CARGO_PKG_VERSION")))
            .build()
            .http_context("Failed to build HTTP client")?;

        debug!("Using API base URL {base_url}");
        Ok(HttpBackend::new(client, base_url))
    }

    /// Explicit value, then environment, then the default. Trailing slashes
    /// are stripped so paths can be appended verbatim.
    fn resolve_base_url(&self) -> String {
        let url = self
            .base_url
            .clone()
            .or_else(|| std::env::var(ENV_API_URL).ok().filter(|v| !v.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        url.trim().trim_end_matches('/').to_string()
    }

    fn validate_base_url(url: &str) -> Result<()> {
        if url.starts_with("http://") || url.starts_with("https://") {
            Ok(())
        } else {
            Err(WeeknightError::Configuration {
                message: format!("API base URL must start with http:// or https://, got '{url}'"),
            })
        }
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
