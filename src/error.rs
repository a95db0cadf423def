//! Error types for wifi-finder

use thiserror::Error;

/// Main error type for wifi-finder operations
#[derive(Error, Debug)]
pub enum Error {
    /// Missing, zero or out-of-range request parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An upstream data source (POI index, Wi-Fi source) could not be used.
    /// The discovery pipeline recovers from this locally.
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Unexpected failure while merging or sorting results
    #[error("Assembly error: {0}")]
    Assembly(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Geo error: {0}")]
    Geo(String),
}

/// Result type alias for wifi-finder operations
pub type Result<T> = std::result::Result<T, Error>;
