// src/fetch.rs
//
// One blocking GET per URL. No retries, no custom headers, no auth.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::FetchError;
use crate::params::DEFAULT_TIMEOUT_SECS;

/// Seam between the batch runner and the network. The runner only ever sees
/// this trait, so tests can feed it canned pages.
pub trait Fetch {
    /// Fetch `url` and return the response body on HTTP 2xx.
    fn get(&self, url: &str) -> Result<String, FetchError>;
}

/// Real fetcher backed by `reqwest::blocking` with an explicit timeout.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher with the given per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Fetcher with the stock timeout (`DEFAULT_TIMEOUT_SECS`).
    pub fn with_default_timeout() -> Result<Self, reqwest::Error> {
        Self::new(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        let resp = self.client
            .get(url)
            .send()
            .map_err(|e| classify(url, e))?;

        match resp.error_for_status() {
            Ok(ok) => ok.text().map_err(|e| classify(url, e)),
            Err(e) => Err(classify(url, e)),
        }
    }
}

/// Map a reqwest error onto the fetch taxonomy. Status beats timeout beats
/// connect; anything left over is an unknown transport failure.
fn classify(url: &str, e: reqwest::Error) -> FetchError {
    let url = url.to_string();
    if let Some(status) = e.status() {
        FetchError::Status { url, status }
    } else if e.is_timeout() {
        FetchError::Timeout { url, source: e }
    } else if e.is_connect() {
        FetchError::Connect { url, source: e }
    } else {
        FetchError::Transport { url, source: e }
    }
}
