//! Error types for cueforge-text.

use crate::buffer::{InputBuffer, OutputBuffer};
use crate::decoder::InputState;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Protocol and decode failures surfaced by the decoder.
///
/// Backpressure is never an error: an exhausted pool or a missing input
/// shows up as `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The decoder was released.
    #[error("decoder has been released")]
    Released,

    /// The input slot is not in the state the call requires.
    #[error("invalid input buffer state: expected {expected}, found {actual}")]
    InvalidState {
        expected: InputState,
        actual: InputState,
    },

    /// The queued buffer is not the slot this decoder handed out last.
    /// The buffer is handed back untouched.
    #[error("input buffer was not dequeued from this decoder")]
    ForeignInputBuffer(Box<InputBuffer>),

    /// The released buffer was not checked out from this pool.
    /// The buffer is handed back so it can reach its own pool.
    #[error("output buffer does not belong to this pool")]
    ForeignOutputBuffer(Box<OutputBuffer>),

    /// The buffer is already back in the pool.
    #[error("output buffer {index} is already in the pool")]
    DoubleRelease { index: usize },

    /// An event index outside `0..count`.
    #[error("invalid event index: {index} (count: {count})")]
    IndexOutOfBounds { index: usize, count: usize },

    /// The cue decoder rejected the payload.
    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),
}

impl Error {
    /// Create an invalid state error.
    pub fn invalid_state(expected: InputState, actual: InputState) -> Self {
        Self::InvalidState { expected, actual }
    }

    /// Create an index out of bounds error.
    pub fn index_out_of_bounds(index: usize, count: usize) -> Self {
        Self::IndexOutOfBounds { index, count }
    }

    /// Recover the input buffer carried by a rejected queue call.
    pub fn into_input_buffer(self) -> Option<InputBuffer> {
        match self {
            Self::ForeignInputBuffer(buffer) => Some(*buffer),
            _ => None,
        }
    }

    /// Recover the output buffer carried by a rejected release.
    pub fn into_output_buffer(self) -> Option<OutputBuffer> {
        match self {
            Self::ForeignOutputBuffer(buffer) => Some(*buffer),
            _ => None,
        }
    }
}

/// Failures reported by a [`crate::CueDecoder`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The payload is not a valid cue bundle.
    #[error("malformed cue bundle: {0}")]
    Malformed(#[from] bincode::Error),

    /// The payload's timing cannot describe a cue window.
    #[error("invalid cue timing: {0}")]
    InvalidTiming(#[from] cueforge_common::Error),

    /// Decoder-specific failure from a custom [`crate::CueDecoder`].
    #[error("{0}")]
    Custom(Box<dyn std::error::Error + Send + Sync>),
}

impl DecodeError {
    /// Wrap a decoder-specific error.
    pub fn custom(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Custom(err.into())
    }
}
