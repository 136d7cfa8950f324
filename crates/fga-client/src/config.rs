//! Connection settings for [`HttpClient`](crate::HttpClient).

use reqwest::Url;
use std::time::Duration;

use crate::{ClientError, ClientResult};

/// API root used when none is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where and how to reach the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root, always ending in `/`
    api_url: Url,
    /// Upper bound on each individual request
    pub timeout: Duration,
}

impl ClientConfig {
    /// Parse and validate an API root. Only absolute `http`/`https` URLs are accepted.
    pub fn new(api_url: &str) -> ClientResult<Self> {
        let mut url = Url::parse(api_url)
            .map_err(|e| ClientError::Config(format!("invalid API URL {api_url:?}: {e}")))?;

        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(ClientError::Config(format!(
                "API URL must be an http(s) URL, got {api_url:?}"
            )));
        }

        // Url::join replaces the last segment unless the base ends in a slash.
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self {
            api_url: url,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve a path relative to the API root.
    pub fn endpoint(&self, path: &str) -> ClientResult<Url> {
        self.api_url
            .join(path)
            .map_err(|e| ClientError::Config(format!("invalid endpoint {path:?}: {e}")))
    }
}
