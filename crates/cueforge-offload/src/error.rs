//! Error types for cueforge-offload.

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while describing offload capabilities.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An encoding name that is not recognised.
    #[error("unknown encoding: {0}")]
    UnknownEncoding(String),
}
