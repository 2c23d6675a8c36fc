//! Fixed-size pool of output buffers.
//!
//! Buffers carry their pool id and slot index, so releasing one needs no
//! back-reference from the buffer to the pool. The free list is allocated
//! once at full capacity and never grows.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::buffer::OutputBuffer;
use crate::error::{Error, Result};

/// Number of output buffers a decoder owns.
pub const OUTPUT_BUFFERS_COUNT: usize = 2;

static NEXT_POOL_ID: AtomicU64 = AtomicU64::new(1);

/// A bounded set of reusable [`OutputBuffer`]s.
#[derive(Debug)]
pub struct OutputBufferPool {
    id: u64,
    capacity: usize,
    available: Vec<OutputBuffer>,
}

impl OutputBufferPool {
    /// Create a pool pre-filled with `capacity` buffers.
    pub fn new(capacity: usize) -> Self {
        let id = NEXT_POOL_ID.fetch_add(1, Ordering::Relaxed);
        let mut available = Vec::with_capacity(capacity);
        available.extend((0..capacity).map(|index| OutputBuffer::new(id, index)));
        Self {
            id,
            capacity,
            available,
        }
    }

    /// Process-unique id of this pool.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of buffers currently checked in.
    pub fn available(&self) -> usize {
        self.available.len()
    }

    /// Take a free buffer, most recently released first.
    ///
    /// `None` means every buffer is checked out.
    pub fn checkout(&mut self) -> Option<OutputBuffer> {
        let buffer = self.available.pop()?;
        tracing::debug!(
            pool = self.id,
            index = buffer.index(),
            available = self.available.len(),
            "output buffer checked out"
        );
        Some(buffer)
    }

    /// Clear a buffer and check it back in.
    ///
    /// # Errors
    ///
    /// - [`Error::ForeignOutputBuffer`] if the buffer came from another pool.
    ///   The error carries the buffer back to the caller.
    /// - [`Error::DoubleRelease`] if its slot is already checked in. The
    ///   duplicate is dropped.
    pub fn release(&mut self, mut buffer: OutputBuffer) -> Result<()> {
        if buffer.pool_id() != self.id || buffer.index() >= self.capacity {
            tracing::warn!(
                pool = self.id,
                buffer_pool = buffer.pool_id(),
                "released output buffer from another pool"
            );
            return Err(Error::ForeignOutputBuffer(Box::new(buffer)));
        }
        let index = buffer.index();
        if self.available.len() >= self.capacity
            || self.available.iter().any(|b| b.index() == index)
        {
            tracing::warn!(pool = self.id, index, "output buffer released twice");
            return Err(Error::DoubleRelease { index });
        }

        buffer.clear();
        self.available.push(buffer);
        tracing::debug!(
            pool = self.id,
            index,
            available = self.available.len(),
            "output buffer released"
        );
        Ok(())
    }
}

impl Default for OutputBufferPool {
    fn default() -> Self {
        Self::new(OUTPUT_BUFFERS_COUNT)
    }
}
