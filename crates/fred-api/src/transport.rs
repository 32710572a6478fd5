//! HTTP transport used by the client.

use crate::Result;
use reqwest::blocking::Client;
use std::time::Duration;

/// Ordered query string pairs.
pub type QueryParams = Vec<(&'static str, String)>;

/// Performs a blocking GET and returns the response body.
///
/// Implementations must treat non-2xx responses as errors.
pub trait Transport: Send + Sync {
    /// Send one GET request to `url` with `query` appended.
    ///
    /// # Errors
    ///
    /// Returns an error on connection failure, timeout, or non-success status.
    fn get(&self, url: &str, query: &QueryParams) -> Result<String>;
}

/// Default transport backed by `reqwest`'s blocking client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with reqwest's default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Create a transport with a total request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be built.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Wrap an existing blocking client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, query: &QueryParams) -> Result<String> {
        // Request URLs carry the API key; keep them out of error messages.
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(reqwest::Error::without_url)?;

        Ok(response.text().map_err(reqwest::Error::without_url)?)
    }
}
