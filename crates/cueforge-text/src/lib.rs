//! # cueforge-text
//!
//! Pull-driven decoding of inline cue payloads into time-addressable
//! subtitles.
//!
//! A single caller drives a [`CuesDecoder`] one step at a time:
//!
//! 1. [`dequeue_input_buffer`](SubtitleDecoder::dequeue_input_buffer) hands out
//!    the one input slot
//! 2. the caller fills it with an encoded cue bundle (or marks end of stream)
//!    and gives it back with [`queue_input_buffer`](SubtitleDecoder::queue_input_buffer)
//! 3. [`dequeue_output_buffer`](SubtitleDecoder::dequeue_output_buffer) decodes
//!    into one of two pooled output buffers
//! 4. the caller reads the [`Subtitle`] and returns the buffer with
//!    [`release_output_buffer`](SubtitleDecoder::release_output_buffer)
//!
//! Nothing blocks. "Not ready yet" is `Ok(None)`, protocol violations are
//! errors.
//!
//! ## Example
//!
//! ```
//! use cueforge_common::TimeUs;
//! use cueforge_text::{encode_cues, Cue, CuesDecoder, Subtitle, SubtitleDecoder};
//!
//! let mut decoder = CuesDecoder::new();
//!
//! let mut input = decoder.dequeue_input_buffer()?.expect("slot is available");
//! input.set_time_us(TimeUs::from_micros(1_000));
//! input.set_data(&encode_cues(&[Cue::text("Hello")], Some(500))?);
//! decoder.queue_input_buffer(input)?;
//!
//! let output = decoder.dequeue_output_buffer()?.expect("input is queued");
//! assert_eq!(output.event_time_count(), 2);
//! assert_eq!(output.cues(TimeUs::from_micros(1_200)).len(), 1);
//! assert!(output.cues(TimeUs::from_micros(1_500)).is_empty());
//!
//! decoder.release_output_buffer(output)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod buffer;
pub mod codec;
pub mod cue;
pub mod decoder;
mod error;
pub mod pool;
pub mod subtitle;

pub use buffer::{InputBuffer, OutputBuffer};
pub use codec::{encode_cues, BundleCueDecoder, CueBundle, CueDecoder};
pub use cue::{Anchor, Cue, CuesWithTiming, LineType, TextAlignment, VerticalType};
pub use decoder::{CuesDecoder, InputState, SubtitleDecoder};
pub use error::{DecodeError, Error, Result};
pub use pool::{OutputBufferPool, OUTPUT_BUFFERS_COUNT};
pub use subtitle::{CuesSubtitle, Subtitle};
