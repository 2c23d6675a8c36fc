//! Drive a [`SubtitleDecoder`] through a replay script.
//!
//! The driver plays the caller's side of the buffer exchange. For each unit
//! it dequeues the input slot, fills and queues it, then polls for output
//! and samples the active cues across the decoded window.

mod script;

pub use script::{load_script, parse_script, Script, ScriptUnit};

use anyhow::{Context, Result};
use cueforge_common::TimeUs;
use cueforge_text::{encode_cues, Cue, Subtitle, SubtitleDecoder};
use serde::Serialize;
use std::fmt::Write;

use crate::config::ReplayConfig;

/// Upper bound on samples listed for one unit.
const MAX_SAMPLES_PER_UNIT: usize = 1_000;

/// Replay tuning, usually taken from [`ReplayConfig`].
#[derive(Debug, Clone, Copy)]
pub struct ReplayOptions {
    pub step_us: i64,
    pub max_idle_polls: u32,
}

impl From<&ReplayConfig> for ReplayOptions {
    fn from(config: &ReplayConfig) -> Self {
        Self {
            step_us: config.step_us,
            max_idle_polls: config.max_idle_polls,
        }
    }
}

impl Default for ReplayOptions {
    fn default() -> Self {
        Self::from(&ReplayConfig::default())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReplayReport {
    pub decoder: String,
    pub units: Vec<UnitReport>,
}

/// What one input unit turned into.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UnitReport {
    pub time_us: Option<i64>,
    pub end_of_stream: bool,
    pub event_times_us: Vec<i64>,
    pub samples: Vec<CueSample>,
    /// Decoder error message when the unit failed to decode
    pub error: Option<String>,
}

/// Cue texts active at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CueSample {
    pub time_us: i64,
    pub cues: Vec<String>,
}

/// Feed every unit of `script` through `decoder` and release it afterwards.
///
/// Units that fail to decode are reported and skipped. Protocol errors, or
/// a decoder that stays silent for `max_idle_polls` polls, abort the replay.
/// The decoder is released on every path.
pub fn replay<D: SubtitleDecoder>(
    decoder: &mut D,
    script: &Script,
    options: ReplayOptions,
) -> Result<ReplayReport> {
    let mut report = ReplayReport {
        decoder: decoder.name().to_string(),
        units: Vec::with_capacity(script.units.len()),
    };

    let result = drive(decoder, script, options, &mut report);
    decoder.release();
    result.map(|()| report)
}

fn drive<D: SubtitleDecoder>(
    decoder: &mut D,
    script: &Script,
    options: ReplayOptions,
    report: &mut ReplayReport,
) -> Result<()> {
    for (position, unit) in script.units.iter().enumerate() {
        let time_us = unit.time_us.map_or(TimeUs::UNSET, TimeUs::from_micros);
        let payload = encode_unit(unit)
            .with_context(|| format!("Failed to encode unit {}", position))?;

        decoder.set_position_us(time_us);
        let mut input = decoder
            .dequeue_input_buffer()?
            .with_context(|| format!("Input slot unavailable for unit {}", position))?;
        input.set_time_us(time_us);
        if unit.end_of_stream {
            input.set_end_of_stream();
        } else {
            input.set_data(&payload);
        }
        decoder.queue_input_buffer(input)?;

        let mut idle_polls = 0;
        let output = loop {
            match decoder.dequeue_output_buffer() {
                Ok(Some(output)) => break Some(output),
                Ok(None) => {
                    idle_polls += 1;
                    if idle_polls >= options.max_idle_polls {
                        anyhow::bail!(
                            "Decoder produced no output for unit {} after {} polls",
                            position,
                            idle_polls
                        );
                    }
                }
                Err(cueforge_text::Error::Decode(e)) => {
                    tracing::warn!(unit = position, error = %e, "Unit failed to decode");
                    report.units.push(UnitReport {
                        time_us: unit.time_us,
                        error: Some(e.to_string()),
                        ..UnitReport::default()
                    });
                    break None;
                }
                Err(e) => return Err(e.into()),
            }
        };
        let Some(output) = output else {
            continue;
        };

        let entry = if output.is_end_of_stream() {
            UnitReport {
                time_us: output.time_us().get(),
                end_of_stream: true,
                ..UnitReport::default()
            }
        } else {
            describe(&output, output.time_us(), options.step_us)
        };
        decoder.release_output_buffer(output)?;

        let done = entry.end_of_stream;
        report.units.push(entry);
        if done {
            break;
        }
    }

    Ok(())
}

fn encode_unit(unit: &ScriptUnit) -> Result<Vec<u8>> {
    if unit.end_of_stream {
        return Ok(Vec::new());
    }
    match &unit.payload {
        Some(raw) => Ok(raw.as_bytes().to_vec()),
        None => Ok(encode_cues(&unit.cues, unit.duration_us)?),
    }
}

fn describe<S: Subtitle>(subtitle: &S, time_us: TimeUs, step_us: i64) -> UnitReport {
    let event_times: Vec<TimeUs> = (0..subtitle.event_time_count())
        .filter_map(|index| subtitle.event_time(index).ok())
        .collect();

    let samples = sample_times(&event_times, step_us)
        .into_iter()
        .map(|at| CueSample {
            time_us: at.as_micros(),
            cues: subtitle.cues(at).iter().map(cue_label).collect(),
        })
        .collect();

    UnitReport {
        time_us: time_us.get(),
        end_of_stream: false,
        event_times_us: event_times.iter().map(|t| t.as_micros()).collect(),
        samples,
        error: None,
    }
}

/// One step before the window, every step inside it, and the end.
///
/// Unbounded windows get a single sample one step past the start.
fn sample_times(events: &[TimeUs], step_us: i64) -> Vec<TimeUs> {
    let Some(start) = events.first().map(|t| t.as_micros()) else {
        return Vec::new();
    };

    let mut times = vec![start.saturating_sub(step_us)];
    match events.get(1).map(|t| t.as_micros()) {
        Some(end) => {
            let mut at = start;
            while at < end && times.len() < MAX_SAMPLES_PER_UNIT {
                times.push(at);
                at = at.saturating_add(step_us);
            }
            times.push(end);
        }
        None => {
            times.push(start);
            times.push(start.saturating_add(step_us));
        }
    }

    times.into_iter().map(TimeUs::from_micros).collect()
}

fn cue_label(cue: &Cue) -> String {
    cue.text.clone().unwrap_or_default()
}

/// Human-readable listing of a report.
pub fn render_text(report: &ReplayReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Decoder: {}", report.decoder);

    for (i, unit) in report.units.iter().enumerate() {
        let time = unit
            .time_us
            .map_or_else(|| "unset".to_string(), |t| format!("{}us", t));

        if unit.end_of_stream {
            let _ = writeln!(out, "\n[{}] end of stream", i);
            continue;
        }
        if let Some(ref error) = unit.error {
            let _ = writeln!(out, "\n[{}] {} decode error: {}", i, time, error);
            continue;
        }

        let _ = writeln!(out, "\n[{}] {} events: {:?}", i, time, unit.event_times_us);
        for sample in &unit.samples {
            if sample.cues.is_empty() {
                let _ = writeln!(out, "  {:>12}us  -", sample.time_us);
            } else {
                let _ = writeln!(out, "  {:>12}us  {}", sample.time_us, sample.cues.join(" | "));
            }
        }
    }

    out
}
