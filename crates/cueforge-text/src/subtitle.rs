//! Time queries over decoded cues.

use cueforge_common::TimeUs;

use crate::cue::{Cue, CuesWithTiming};
use crate::error::{Error, Result};

/// A decoded subtitle answering "what is shown at time T".
///
/// Event times are the instants at which the active cue list changes.
/// They are sorted, and [`Subtitle::cues`] is constant between two
/// consecutive events.
pub trait Subtitle {
    /// Index of the first event strictly after `time_us`, or `None` if no
    /// event follows.
    fn next_event_time_index(&self, time_us: TimeUs) -> Option<usize>;

    /// Number of event times.
    fn event_time_count(&self) -> usize;

    /// Event time at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] unless `index < event_time_count()`.
    fn event_time(&self, index: usize) -> Result<TimeUs>;

    /// Cues active at `time_us`.
    fn cues(&self, time_us: TimeUs) -> &[Cue];
}

/// [`Subtitle`] over a single cue window.
///
/// Has one event (the start) when unbounded, two (start and end) otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct CuesSubtitle {
    timed: CuesWithTiming,
}

impl CuesSubtitle {
    pub fn new(timed: CuesWithTiming) -> Self {
        Self { timed }
    }

    pub fn cues_with_timing(&self) -> &CuesWithTiming {
        &self.timed
    }
}

impl From<CuesWithTiming> for CuesSubtitle {
    fn from(timed: CuesWithTiming) -> Self {
        Self::new(timed)
    }
}

impl Subtitle for CuesSubtitle {
    fn next_event_time_index(&self, time_us: TimeUs) -> Option<usize> {
        if time_us < self.timed.start_time_us() {
            return Some(0);
        }
        match self.timed.end_time_us() {
            Some(end) if time_us < end => Some(1),
            _ => None,
        }
    }

    fn event_time_count(&self) -> usize {
        if self.timed.end_time_us().is_some() {
            2
        } else {
            1
        }
    }

    fn event_time(&self, index: usize) -> Result<TimeUs> {
        match (index, self.timed.end_time_us()) {
            (0, _) => Ok(self.timed.start_time_us()),
            (1, Some(end)) => Ok(end),
            _ => Err(Error::index_out_of_bounds(index, self.event_time_count())),
        }
    }

    fn cues(&self, time_us: TimeUs) -> &[Cue] {
        if time_us < self.timed.start_time_us() {
            return &[];
        }
        match self.timed.end_time_us() {
            Some(end) if time_us >= end => &[],
            _ => self.timed.cues(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn t(us: i64) -> TimeUs {
        TimeUs::from_micros(us)
    }

    fn subtitle(start: i64, duration: Option<i64>) -> CuesSubtitle {
        let cues = vec![Cue::text("one"), Cue::text("two")];
        CuesSubtitle::new(CuesWithTiming::new(cues, t(start), duration).unwrap())
    }

    #[test]
    fn test_unbounded_window() {
        let sub = subtitle(1_000, None);
        assert_eq!(sub.event_time_count(), 1);
        assert_eq!(sub.event_time(0).unwrap(), t(1_000));
        assert!(sub.cues(t(500)).is_empty());
        assert_eq!(sub.cues(t(1_000)).len(), 2);
        assert_eq!(sub.cues(t(10_000)).len(), 2);
        assert_eq!(sub.cues(t(i64::MAX)).len(), 2);
    }

    #[test]
    fn test_bounded_window() {
        let sub = subtitle(1_000, Some(500));
        assert_eq!(sub.event_time_count(), 2);
        assert_eq!(sub.event_time(0).unwrap(), t(1_000));
        assert_eq!(sub.event_time(1).unwrap(), t(1_500));
        assert!(sub.cues(t(999)).is_empty());
        assert_eq!(sub.cues(t(1_000)).len(), 2);
        assert_eq!(sub.cues(t(1_200)).len(), 2);
        assert_eq!(sub.cues(t(1_499)).len(), 2);
        assert!(sub.cues(t(1_500)).is_empty());
    }

    #[test]
    fn test_event_index_out_of_range() {
        let unbounded = subtitle(1_000, None);
        assert_matches!(
            unbounded.event_time(1),
            Err(Error::IndexOutOfBounds { index: 1, count: 1 })
        );

        let bounded = subtitle(1_000, Some(500));
        assert_matches!(
            bounded.event_time(2),
            Err(Error::IndexOutOfBounds { index: 2, count: 2 })
        );
    }

    #[test]
    fn test_zero_duration_never_shows() {
        let sub = subtitle(1_000, Some(0));
        assert_eq!(sub.event_time_count(), 2);
        assert!(sub.cues(t(1_000)).is_empty());
        assert_eq!(sub.next_event_time_index(t(1_000)), None);
    }

    #[test]
    fn test_next_event_time_index() {
        let bounded = subtitle(1_000, Some(500));
        assert_eq!(bounded.next_event_time_index(t(0)), Some(0));
        assert_eq!(bounded.next_event_time_index(t(1_000)), Some(1));
        assert_eq!(bounded.next_event_time_index(t(1_499)), Some(1));
        assert_eq!(bounded.next_event_time_index(t(1_500)), None);

        let unbounded = subtitle(1_000, None);
        assert_eq!(unbounded.next_event_time_index(t(999)), Some(0));
        assert_eq!(unbounded.next_event_time_index(t(1_000)), None);
    }

    /// The cue list may only change at event times.
    #[test]
    fn test_cues_change_only_at_event_times() {
        for sub in [subtitle(1_000, None), subtitle(1_000, Some(500))] {
            let events: Vec<TimeUs> = (0..sub.event_time_count())
                .map(|i| sub.event_time(i).unwrap())
                .collect();

            let mut previous = sub.cues(t(0)).len();
            for us in 1..3_000 {
                let current = sub.cues(t(us)).len();
                if current != previous {
                    assert!(events.contains(&t(us)), "cues changed at {us} without an event");
                }
                previous = current;
            }

            for us in [0, 999, 1_000, 1_200, 1_500, 2_000] {
                let expected = events.iter().position(|&e| e > t(us));
                assert_eq!(sub.next_event_time_index(t(us)), expected, "at {us}");
            }
        }
    }
}
