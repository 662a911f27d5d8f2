//! Error types for fetching and rendering
//!
//! None of these cross the component boundary: [`crate::publications::PublicationList`]
//! converts every failure into a visible degraded state. They exist so the internals can
//! propagate with `?` and log something meaningful.

use thiserror::Error;

/// Errors that can occur while fetching a resource
#[derive(Debug, Error)]
pub enum FetchError {
    /// The path could not be turned into a fetchable location
    #[error("invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },
    /// The server answered with a non-success status
    #[error("fetching '{path}' returned HTTP {status}")]
    Status { path: String, status: u16 },
    /// Connection, protocol or body decoding failure
    #[error("network error fetching '{path}': {message}")]
    Network { path: String, message: String },
    /// Local filesystem failure
    #[error("could not read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while loading the publication list
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// The document was fetched but is not a valid publication set
    #[error("malformed publication data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by host page operations
#[derive(Debug, Error)]
pub enum PageError {
    /// Serialization of the DOM failed
    #[error("HTML serialization failed: {0}")]
    Serialization(#[from] std::io::Error),
    /// Serialized output was not valid UTF-8
    #[error("UTF-8 conversion failed: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
