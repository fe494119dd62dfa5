// src/error.rs
//
// Structured error values for the fetch and extract stages. All of these are
// non-fatal: the batch runner turns them into user-visible notifications and
// skips the offending URL. The worst outcome is an empty result table.

use reqwest::StatusCode;
use thiserror::Error;

/// Transport-level failures, classified at the point of origin.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error occurred: {status} for {url}")]
    Status { url: String, status: StatusCode },

    #[error("Error connecting: {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Timeout error: {url}: {source}")]
    Timeout {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unknown error occurred: {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// The URL the failed request was issued against.
    pub fn url(&self) -> &str {
        match self {
            FetchError::Status { url, .. }
            | FetchError::Connect { url, .. }
            | FetchError::Timeout { url, .. }
            | FetchError::Transport { url, .. } => url,
        }
    }
}

/// The page parsed fine but carried zero marked anchors.
/// Not a transport problem; the caller skips the URL and moves on.
#[derive(Debug, Error)]
#[error("No anchorViewer elements found in the page: {url}")]
pub struct NoAnchorsFound {
    pub url: String,
}
