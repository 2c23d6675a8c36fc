//! Microsecond media timestamps.
//!
//! Media time is a signed microsecond count. One value is reserved as
//! [`TimeUs::UNSET`] so "no timestamp yet" can travel through buffers
//! without wrapping every field in an `Option`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// A media timestamp in microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeUs(i64);

impl TimeUs {
    /// Sentinel for "no timestamp". Never a valid media time.
    pub const UNSET: TimeUs = TimeUs(i64::MIN + 1);

    /// The zero timestamp.
    pub const ZERO: TimeUs = TimeUs(0);

    /// Wrap a raw microsecond count.
    #[must_use]
    pub const fn from_micros(us: i64) -> Self {
        Self(us)
    }

    /// Raw microsecond count, including the sentinel value when unset.
    #[must_use]
    pub const fn as_micros(self) -> i64 {
        self.0
    }

    /// Whether this is a real timestamp.
    #[must_use]
    pub const fn is_set(self) -> bool {
        self.0 != Self::UNSET.0
    }

    /// `Some(us)` for a real timestamp, `None` for [`TimeUs::UNSET`].
    #[must_use]
    pub const fn get(self) -> Option<i64> {
        if self.is_set() {
            Some(self.0)
        } else {
            None
        }
    }

    /// Add a non-negative duration.
    ///
    /// # Errors
    ///
    /// Fails if `self` is unset, `duration_us` is negative, or the sum does
    /// not fit.
    pub fn checked_add_duration(self, duration_us: i64) -> Result<TimeUs> {
        if !self.is_set() {
            return Err(Error::UnsetTime);
        }
        if duration_us < 0 {
            return Err(Error::NegativeDuration(duration_us));
        }
        self.0
            .checked_add(duration_us)
            .map(TimeUs)
            .ok_or(Error::Overflow {
                time_us: self.0,
                delta_us: duration_us,
            })
    }
}

impl Default for TimeUs {
    fn default() -> Self {
        Self::UNSET
    }
}

impl From<i64> for TimeUs {
    fn from(us: i64) -> Self {
        Self(us)
    }
}

impl fmt::Display for TimeUs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(us) => write!(f, "{}us", us),
            None => write!(f, "unset"),
        }
    }
}
