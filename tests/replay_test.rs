//! Integration tests for the replay driver.

use assert_matches::assert_matches;
use cueforge::replay::{self, ReplayOptions, Script, ScriptUnit};
use cueforge_common::TimeUs;
use cueforge_text::{Cue, CuesDecoder, InputBuffer, OutputBuffer, SubtitleDecoder};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/scripts")
        .join(name)
}

fn options(step_us: i64) -> ReplayOptions {
    ReplayOptions {
        step_us,
        max_idle_polls: 4,
    }
}

#[test]
fn test_end_of_stream_only() {
    let script = Script {
        units: vec![ScriptUnit::end_of_stream()],
    };
    let mut decoder = CuesDecoder::new();
    let report = replay::replay(&mut decoder, &script, options(100)).unwrap();

    assert_eq!(report.decoder, "CuesDecoder");
    assert_eq!(report.units.len(), 1);
    assert!(report.units[0].end_of_stream);
    assert!(report.units[0].samples.is_empty());

    assert!(decoder.is_released());
    assert_matches!(
        decoder.dequeue_input_buffer(),
        Err(cueforge_text::Error::Released)
    );
}

#[test]
fn test_unbounded_window() {
    let script = Script {
        units: vec![ScriptUnit::cues(1_000, None, vec![Cue::text("a"), Cue::text("b")])],
    };
    let mut decoder = CuesDecoder::new();
    let report = replay::replay(&mut decoder, &script, options(9_000)).unwrap();

    let unit = &report.units[0];
    assert_eq!(unit.event_times_us, vec![1_000]);
    let at = |t: i64| {
        unit.samples
            .iter()
            .find(|s| s.time_us == t)
            .map(|s| s.cues.clone())
    };
    assert_eq!(at(-8_000), Some(vec![]));
    assert_eq!(at(1_000), Some(vec!["a".to_string(), "b".to_string()]));
    assert_eq!(at(10_000), Some(vec!["a".to_string(), "b".to_string()]));
}

#[test]
fn test_bounded_window() {
    let script = Script {
        units: vec![ScriptUnit::cues(1_000, Some(500), vec![Cue::text("x")])],
    };
    let mut decoder = CuesDecoder::new();
    let report = replay::replay(&mut decoder, &script, options(200)).unwrap();

    let unit = &report.units[0];
    assert_eq!(unit.time_us, Some(1_000));
    assert_eq!(unit.event_times_us, vec![1_000, 1_500]);

    let times: Vec<i64> = unit.samples.iter().map(|s| s.time_us).collect();
    assert_eq!(times, vec![800, 1_000, 1_200, 1_400, 1_500]);

    let active: Vec<usize> = unit.samples.iter().map(|s| s.cues.len()).collect();
    assert_eq!(active, vec![0, 1, 1, 1, 0]);
}

#[test]
fn test_fixture_script_reports_each_unit() {
    let script = replay::load_script(&fixture("basic.json")).unwrap();
    let mut decoder = CuesDecoder::new();
    let report = replay::replay(&mut decoder, &script, options(100)).unwrap();

    assert_eq!(report.units.len(), 4);
    assert_eq!(report.units[0].event_times_us, vec![1_000, 1_500]);
    assert_eq!(report.units[0].samples[1].cues, vec!["Hello", "world"]);
    assert_eq!(report.units[1].event_times_us, vec![2_000]);

    // The malformed unit is reported and the replay carries on.
    assert_eq!(report.units[2].time_us, Some(3_000));
    assert!(report.units[2].error.is_some());
    assert!(report.units[2].samples.is_empty());

    assert!(report.units[3].end_of_stream);
    // Every output buffer went back to the pool.
    assert_eq!(decoder.available_output_buffers(), 2);
}

#[test]
fn test_stops_at_end_of_stream() {
    let script = Script {
        units: vec![
            ScriptUnit::cues(0, Some(10), vec![Cue::text("first")]),
            ScriptUnit::end_of_stream(),
            ScriptUnit::cues(100, Some(10), vec![Cue::text("ignored")]),
        ],
    };
    let mut decoder = CuesDecoder::new();
    let report = replay::replay(&mut decoder, &script, options(5)).unwrap();

    assert_eq!(report.units.len(), 2);
    assert!(report.units[1].end_of_stream);
}

#[test]
fn test_invalid_timing_reported() {
    let script = Script {
        units: vec![
            ScriptUnit {
                time_us: None,
                cues: vec![Cue::text("no start")],
                ..ScriptUnit::default()
            },
            ScriptUnit::cues(0, Some(-5), vec![Cue::text("negative")]),
            ScriptUnit::end_of_stream(),
        ],
    };
    let mut decoder = CuesDecoder::new();
    let report = replay::replay(&mut decoder, &script, options(5)).unwrap();

    assert_eq!(report.units.len(), 3);
    assert!(report.units[0].error.is_some());
    assert_eq!(report.units[0].time_us, None);
    assert!(report.units[1].error.is_some());
}

/// Accepts input but never produces output.
struct SilentDecoder {
    inner: CuesDecoder,
}

impl SubtitleDecoder for SilentDecoder {
    fn name(&self) -> &'static str {
        "SilentDecoder"
    }

    fn dequeue_input_buffer(&mut self) -> cueforge_text::Result<Option<InputBuffer>> {
        self.inner.dequeue_input_buffer()
    }

    fn queue_input_buffer(&mut self, buffer: InputBuffer) -> cueforge_text::Result<()> {
        self.inner.queue_input_buffer(buffer)
    }

    fn dequeue_output_buffer(&mut self) -> cueforge_text::Result<Option<OutputBuffer>> {
        Ok(None)
    }

    fn release_output_buffer(&mut self, buffer: OutputBuffer) -> cueforge_text::Result<()> {
        self.inner.release_output_buffer(buffer)
    }

    fn flush(&mut self) -> cueforge_text::Result<()> {
        self.inner.flush()
    }

    fn release(&mut self) {
        self.inner.release();
    }

    fn set_position_us(&mut self, position_us: TimeUs) {
        self.inner.set_position_us(position_us);
    }
}

#[test]
fn test_silent_decoder_gives_up() {
    let script = Script {
        units: vec![ScriptUnit::cues(0, None, vec![Cue::text("lost")])],
    };
    let mut decoder = SilentDecoder {
        inner: CuesDecoder::new(),
    };
    let err = replay::replay(&mut decoder, &script, options(5)).unwrap_err();
    assert!(err.to_string().contains("after 4 polls"));
    assert!(decoder.inner.is_released());
}

#[test]
fn test_protocol_error_still_releases() {
    let script = Script {
        units: vec![
            ScriptUnit::cues(0, None, vec![Cue::text("one")]),
            ScriptUnit::cues(10, None, vec![Cue::text("two")]),
        ],
    };
    // Released up front, so the first dequeue fails.
    let mut decoder = CuesDecoder::new();
    decoder.release();

    let err = replay::replay(&mut decoder, &script, options(5)).unwrap_err();
    assert_matches!(
        err.downcast_ref::<cueforge_text::Error>(),
        Some(cueforge_text::Error::Released)
    );
    assert!(decoder.is_released());
}

#[test]
fn test_render_text() {
    let script = replay::load_script(&fixture("basic.json")).unwrap();
    let mut decoder = CuesDecoder::new();
    let report = replay::replay(&mut decoder, &script, options(250)).unwrap();
    let text = replay::render_text(&report);

    assert!(text.starts_with("Decoder: CuesDecoder"));
    assert!(text.contains("Hello | world"));
    assert!(text.contains("decode error"));
    assert!(text.contains("end of stream"));
}
