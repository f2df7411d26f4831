use thiserror::Error;

/// Errors produced by the store layer.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// A mutation referenced a user id that does not exist.
    #[error("unknown author id: {0}")]
    UnknownAuthor(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
