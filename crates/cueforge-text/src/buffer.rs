//! Input and output buffers exchanged with the decoder.
//!
//! Both kinds are created once by the decoder and moved back and forth with
//! the caller. Neither is `Clone`, so a buffer can only be in one place at a
//! time.

use cueforge_common::TimeUs;

use crate::cue::Cue;
use crate::error::{Error, Result};
use crate::subtitle::{CuesSubtitle, Subtitle};

/// The single input slot of a decoder.
///
/// Filled by the caller between `dequeue_input_buffer` and
/// `queue_input_buffer`. The payload `Vec` keeps its capacity across units.
#[derive(Debug)]
pub struct InputBuffer {
    time_us: TimeUs,
    data: Vec<u8>,
    end_of_stream: bool,
    owner: u64,
    generation: u64,
}

impl InputBuffer {
    pub(crate) fn new(owner: u64, generation: u64) -> Self {
        Self {
            time_us: TimeUs::UNSET,
            data: Vec::new(),
            end_of_stream: false,
            owner,
            generation,
        }
    }

    pub fn time_us(&self) -> TimeUs {
        self.time_us
    }

    pub fn set_time_us(&mut self, time_us: TimeUs) {
        self.time_us = time_us;
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Direct access to the payload for callers that write in place.
    pub fn data_mut(&mut self) -> &mut Vec<u8> {
        &mut self.data
    }

    /// Replace the payload, reusing the existing allocation.
    pub fn set_data(&mut self, data: &[u8]) {
        self.data.clear();
        self.data.extend_from_slice(data);
    }

    pub fn is_end_of_stream(&self) -> bool {
        self.end_of_stream
    }

    /// Mark this unit as the end of the stream. The payload is ignored.
    pub fn set_end_of_stream(&mut self) {
        self.end_of_stream = true;
    }

    /// Reset to an empty unit.
    pub fn clear(&mut self) {
        self.time_us = TimeUs::UNSET;
        self.data.clear();
        self.end_of_stream = false;
    }

    pub(crate) fn is_slot(&self, owner: u64, generation: u64) -> bool {
        self.owner == owner && self.generation == generation
    }
}

/// A pooled output unit holding one decoded subtitle or an end-of-stream
/// marker.
///
/// Return it with `release_output_buffer` once done; a dropped buffer is
/// lost to the pool for good.
#[derive(Debug)]
pub struct OutputBuffer {
    time_us: TimeUs,
    subtitle: Option<CuesSubtitle>,
    end_of_stream: bool,
    pool_id: u64,
    index: usize,
}

impl OutputBuffer {
    pub(crate) fn new(pool_id: u64, index: usize) -> Self {
        Self {
            time_us: TimeUs::UNSET,
            subtitle: None,
            end_of_stream: false,
            pool_id,
            index,
        }
    }

    /// Timestamp of the input this buffer was decoded from.
    pub fn time_us(&self) -> TimeUs {
        self.time_us
    }

    /// Decoded content, `None` for end of stream.
    pub fn subtitle(&self) -> Option<&CuesSubtitle> {
        self.subtitle.as_ref()
    }

    pub fn is_end_of_stream(&self) -> bool {
        self.end_of_stream
    }

    /// Slot index within the owning pool.
    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn pool_id(&self) -> u64 {
        self.pool_id
    }

    pub(crate) fn set_content(&mut self, time_us: TimeUs, subtitle: CuesSubtitle) {
        self.time_us = time_us;
        self.subtitle = Some(subtitle);
    }

    pub(crate) fn set_end_of_stream(&mut self, time_us: TimeUs) {
        self.time_us = time_us;
        self.end_of_stream = true;
    }

    pub(crate) fn clear(&mut self) {
        self.time_us = TimeUs::UNSET;
        self.subtitle = None;
        self.end_of_stream = false;
    }
}

/// An empty buffer has no events and no cues.
impl Subtitle for OutputBuffer {
    fn next_event_time_index(&self, time_us: TimeUs) -> Option<usize> {
        self.subtitle
            .as_ref()
            .and_then(|s| s.next_event_time_index(time_us))
    }

    fn event_time_count(&self) -> usize {
        self.subtitle.as_ref().map_or(0, |s| s.event_time_count())
    }

    fn event_time(&self, index: usize) -> Result<TimeUs> {
        match &self.subtitle {
            Some(subtitle) => subtitle.event_time(index),
            None => Err(Error::index_out_of_bounds(index, 0)),
        }
    }

    fn cues(&self, time_us: TimeUs) -> &[Cue] {
        match &self.subtitle {
            Some(subtitle) => subtitle.cues(time_us),
            None => &[],
        }
    }
}
