//! Error types for the recommendation flow.
//!
//! Every stage of a submission maps its failures onto one variant, so the
//! CLI boundary can surface a single message while tests can still tell the
//! failure modes apart.

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Token endpoint returned a non-success status or an unusable body.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Form input rejected before any network call.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Recommendations endpoint returned a non-success status.
    #[error("Recommendation request failed: {0}")]
    Request(String),

    /// Response body did not have the expected shape.
    #[error("Unexpected response: {0}")]
    Parse(String),

    /// Missing or unloadable configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level failure from the HTTP client.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Local file IO failure (catalog cache).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization failure (catalog cache).
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
