//! HTTP access to the package index.

use anyhow::{bail, Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Fetches JSON documents over HTTP/HTTPS.
pub struct IndexFetcher {
    client: Client,
    timeout: Duration,
}

impl IndexFetcher {
    /// Create a new fetcher with the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("pip-helpers/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client, timeout })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch `url` and decode the body as JSON.
    pub fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("Fetching {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Failed to fetch {}", url))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            bail!("Package not found in index: {}", url);
        }
        if !status.is_success() {
            bail!("HTTP {} fetching {}", status, url);
        }

        response
            .json()
            .with_context(|| format!("Failed to parse index response from {}", url))
    }
}
