//! Common error types used throughout cueforge.

/// Common error type for cueforge.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An operation needed a real timestamp but got [`crate::TimeUs::UNSET`].
    #[error("timestamp is unset")]
    UnsetTime,

    /// A duration was negative.
    #[error("negative duration: {0}us")]
    NegativeDuration(i64),

    /// Timestamp arithmetic left the representable range.
    #[error("timestamp overflow: {time_us}us + {delta_us}us")]
    Overflow { time_us: i64, delta_us: i64 },
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
