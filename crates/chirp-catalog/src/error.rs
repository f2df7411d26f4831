use thiserror::Error;

/// Errors produced when talking to the catalog provider.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The HTTP call failed or timed out.
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-success status code.
    #[error("catalog responded with status {0}")]
    Status(reqwest::StatusCode),

    /// The response envelope is missing an expected member.
    #[error("malformed catalog response: {0}")]
    MalformedEnvelope(&'static str),

    /// The payload inside the envelope does not match the movie shape.
    #[error("invalid movie payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CatalogError>;
