//! The buffer-exchange state machine.
//!
//! ```text
//!             dequeue_input_buffer          queue_input_buffer
//!  Available ---------------------> Dequeued ------------------> Queued
//!      ^                                                            |
//!      +------------------ dequeue_output_buffer -------------------+
//!
//!  flush: any state -> Available        release: any state -> released
//! ```
//!
//! Output is only produced while an input is queued and the pool has a free
//! buffer; otherwise `dequeue_output_buffer` returns `Ok(None)`.

use std::fmt;

use cueforge_common::TimeUs;

use crate::buffer::{InputBuffer, OutputBuffer};
use crate::codec::{BundleCueDecoder, CueDecoder};
use crate::error::{Error, Result};
use crate::pool::{OutputBufferPool, OUTPUT_BUFFERS_COUNT};
use crate::subtitle::CuesSubtitle;

/// Pull-based decoder driven by a single caller.
///
/// All methods are non-blocking. `Ok(None)` means "try again later".
pub trait SubtitleDecoder {
    /// Human-readable name identifying this decoder implementation.
    fn name(&self) -> &'static str;

    /// Take the input slot, if it is free.
    fn dequeue_input_buffer(&mut self) -> Result<Option<InputBuffer>>;

    /// Hand a filled input slot back for decoding.
    fn queue_input_buffer(&mut self, buffer: InputBuffer) -> Result<()>;

    /// Decode the queued input into a pooled output buffer.
    fn dequeue_output_buffer(&mut self) -> Result<Option<OutputBuffer>>;

    /// Return an output buffer to the pool.
    fn release_output_buffer(&mut self, buffer: OutputBuffer) -> Result<()>;

    /// Discard any in-flight input.
    fn flush(&mut self) -> Result<()>;

    /// Shut the decoder down. Idempotent.
    fn release(&mut self);

    /// Inform the decoder of the playback position.
    fn set_position_us(&mut self, position_us: TimeUs);
}

/// Where the input slot currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputState {
    /// The slot is home and can be dequeued.
    Available,
    /// The caller holds the slot.
    Dequeued,
    /// The slot is home, filled, and waiting for an output buffer.
    Queued,
}

impl fmt::Display for InputState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::Dequeued => write!(f, "dequeued"),
            Self::Queued => write!(f, "queued"),
        }
    }
}

/// [`SubtitleDecoder`] for serialized cue bundles.
///
/// Owns one input slot and [`OUTPUT_BUFFERS_COUNT`] output buffers for its
/// whole life. Decoding itself is delegated to a [`CueDecoder`].
#[derive(Debug)]
pub struct CuesDecoder<D = BundleCueDecoder> {
    cue_decoder: D,
    /// `None` exactly while the caller holds the slot.
    input: Option<InputBuffer>,
    generation: u64,
    state: InputState,
    pool: OutputBufferPool,
    released: bool,
}

impl CuesDecoder<BundleCueDecoder> {
    pub fn new() -> Self {
        Self::with_decoder(BundleCueDecoder)
    }
}

impl Default for CuesDecoder<BundleCueDecoder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: CueDecoder> CuesDecoder<D> {
    /// Create a decoder around a custom [`CueDecoder`].
    pub fn with_decoder(cue_decoder: D) -> Self {
        let pool = OutputBufferPool::new(OUTPUT_BUFFERS_COUNT);
        let input = InputBuffer::new(pool.id(), 0);
        Self {
            cue_decoder,
            input: Some(input),
            generation: 0,
            state: InputState::Available,
            pool,
            released: false,
        }
    }

    pub fn input_state(&self) -> InputState {
        self.state
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Output buffers currently checked in.
    pub fn available_output_buffers(&self) -> usize {
        self.pool.available()
    }

    fn ensure_not_released(&self) -> Result<()> {
        if self.released {
            return Err(Error::Released);
        }
        Ok(())
    }

    fn id(&self) -> u64 {
        self.pool.id()
    }

    fn reset_input(&mut self) {
        if let Some(input) = self.input.as_mut() {
            input.clear();
        }
        self.state = InputState::Available;
    }
}

impl<D: CueDecoder> SubtitleDecoder for CuesDecoder<D> {
    fn name(&self) -> &'static str {
        "CuesDecoder"
    }

    fn dequeue_input_buffer(&mut self) -> Result<Option<InputBuffer>> {
        self.ensure_not_released()?;
        if self.state != InputState::Available {
            return Ok(None);
        }
        // The slot is always home while available.
        let Some(input) = self.input.take() else {
            return Ok(None);
        };
        self.state = InputState::Dequeued;
        tracing::debug!(decoder = self.id(), "input buffer dequeued");
        Ok(Some(input))
    }

    fn queue_input_buffer(&mut self, buffer: InputBuffer) -> Result<()> {
        self.ensure_not_released()?;
        if self.state != InputState::Dequeued {
            tracing::warn!(decoder = self.id(), state = %self.state, "queue without dequeue");
            return Err(Error::invalid_state(InputState::Dequeued, self.state));
        }
        if !buffer.is_slot(self.id(), self.generation) {
            tracing::warn!(decoder = self.id(), "queued a stale or foreign input buffer");
            return Err(Error::ForeignInputBuffer(Box::new(buffer)));
        }

        tracing::debug!(
            decoder = self.id(),
            time_us = %buffer.time_us(),
            bytes = buffer.data().len(),
            end_of_stream = buffer.is_end_of_stream(),
            "input buffer queued"
        );
        self.input = Some(buffer);
        self.state = InputState::Queued;
        Ok(())
    }

    fn dequeue_output_buffer(&mut self) -> Result<Option<OutputBuffer>> {
        self.ensure_not_released()?;
        if self.state != InputState::Queued || self.pool.available() == 0 {
            return Ok(None);
        }
        let Some(input) = self.input.as_ref() else {
            return Ok(None);
        };
        let Some(mut output) = self.pool.checkout() else {
            return Ok(None);
        };

        let time_us = input.time_us();
        if input.is_end_of_stream() {
            output.set_end_of_stream(time_us);
            tracing::debug!(decoder = self.id(), "end of stream reached");
        } else {
            match self.cue_decoder.decode(time_us, input.data()) {
                Ok(timed) => {
                    tracing::debug!(
                        decoder = self.id(),
                        time_us = %time_us,
                        cues = timed.cues().len(),
                        duration_us = ?timed.duration_us(),
                        "decoded cues"
                    );
                    output.set_content(time_us, CuesSubtitle::new(timed));
                }
                Err(e) => {
                    tracing::debug!(decoder = self.id(), error = %e, "cue decode failed");
                    self.reset_input();
                    self.pool.release(output)?;
                    return Err(e.into());
                }
            }
        }

        self.reset_input();
        Ok(Some(output))
    }

    fn release_output_buffer(&mut self, buffer: OutputBuffer) -> Result<()> {
        self.pool.release(buffer)
    }

    fn flush(&mut self) -> Result<()> {
        self.ensure_not_released()?;
        if self.input.is_none() {
            // The caller still holds the slot; retire that handle.
            self.generation += 1;
            self.input = Some(InputBuffer::new(self.id(), self.generation));
        }
        self.reset_input();
        tracing::debug!(decoder = self.id(), generation = self.generation, "flushed");
        Ok(())
    }

    fn release(&mut self) {
        if !self.released {
            self.released = true;
            tracing::debug!(
                decoder = self.id(),
                outstanding = self.pool.capacity() - self.pool.available(),
                "released"
            );
        }
    }

    fn set_position_us(&mut self, position_us: TimeUs) {
        tracing::trace!(decoder = self.id(), position_us = %position_us, "position ignored");
    }
}
