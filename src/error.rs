// Error types for Shaky Weather
//
// The screen never shows an error state: a failed fetch simply leaves the
// display as it was. The types here exist so the failure is still observable
// inside the process, split by cause so each path can be asserted on.

use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum AppError {
    /// The calloop event loop failed to build or dispatch
    #[error("Event loop error: {0}")]
    EventLoop(String),

    /// A weather fetch failed
    #[error("Weather fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Weather fetch errors
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure: connection, TLS, hung socket
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("Weather API returned status {0}")]
    Status(u16),

    /// The body came back but is not JSON
    #[error("Response body is not valid JSON: {0}")]
    Json(String),

    /// The JSON lacks the `currently` object or one of its
    /// `summary`/`icon`/`temperature` fields
    #[error("Response has no usable `currently` object")]
    MissingCurrently,
}

// Convenience type aliases for common Result types
pub type Result<T> = std::result::Result<T, AppError>;
pub type FetchResult<T> = std::result::Result<T, FetchError>;
