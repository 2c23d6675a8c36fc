//! The cue payload codec.
//!
//! A payload is a `bincode` encoded [`CueBundle`]. The bundle carries its
//! own duration; the start time comes from the input buffer timestamp.

use bincode::Options;
use cueforge_common::TimeUs;
use serde::{Deserialize, Serialize};

use crate::cue::{Cue, CuesWithTiming};
use crate::error::DecodeError;

/// Payloads larger than this are rejected before deserializing.
const MAX_BUNDLE_BYTES: u64 = 1024 * 1024;

/// Turns one encoded payload into a cue window.
///
/// Implementations must be synchronous and free of side effects. Errors are
/// handed to the caller of [`crate::SubtitleDecoder::dequeue_output_buffer`]
/// untouched.
pub trait CueDecoder {
    fn decode(&self, time_us: TimeUs, data: &[u8]) -> Result<CuesWithTiming, DecodeError>;
}

impl<F> CueDecoder for F
where
    F: Fn(TimeUs, &[u8]) -> Result<CuesWithTiming, DecodeError>,
{
    fn decode(&self, time_us: TimeUs, data: &[u8]) -> Result<CuesWithTiming, DecodeError> {
        self(time_us, data)
    }
}

/// Wire form of a cue payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CueBundle {
    pub cues: Vec<Cue>,
    /// `None` keeps the cues active until replaced
    pub duration_us: Option<i64>,
}

#[derive(Serialize)]
struct CueBundleRef<'a> {
    cues: &'a [Cue],
    duration_us: Option<i64>,
}

fn bundle_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(MAX_BUNDLE_BYTES)
        .reject_trailing_bytes()
}

/// Encode cues into a payload [`BundleCueDecoder`] understands.
pub fn encode_cues(cues: &[Cue], duration_us: Option<i64>) -> bincode::Result<Vec<u8>> {
    bundle_options().serialize(&CueBundleRef { cues, duration_us })
}

/// Default [`CueDecoder`] for payloads produced by [`encode_cues`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BundleCueDecoder;

impl CueDecoder for BundleCueDecoder {
    fn decode(&self, time_us: TimeUs, data: &[u8]) -> Result<CuesWithTiming, DecodeError> {
        let bundle: CueBundle = bundle_options().deserialize(data)?;
        Ok(CuesWithTiming::new(bundle.cues, time_us, bundle.duration_us)?)
    }
}
