//! Replay scripts: a JSON list of input units.

use anyhow::{Context, Result};
use cueforge_text::Cue;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A sequence of units fed to the decoder in order.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Script {
    pub units: Vec<ScriptUnit>,
}

/// One input unit.
///
/// Cue units are encoded before queueing. `payload` bypasses encoding and
/// is queued as raw UTF-8 bytes, which is how malformed input is exercised.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScriptUnit {
    #[serde(default)]
    pub end_of_stream: bool,

    /// Start time in microseconds; unset if omitted
    #[serde(default)]
    pub time_us: Option<i64>,

    /// Window length in microseconds; unbounded if omitted
    #[serde(default)]
    pub duration_us: Option<i64>,

    #[serde(default)]
    pub cues: Vec<Cue>,

    #[serde(default)]
    pub payload: Option<String>,
}

impl ScriptUnit {
    /// A unit showing `cues` from `time_us`.
    pub fn cues(time_us: i64, duration_us: Option<i64>, cues: Vec<Cue>) -> Self {
        Self {
            time_us: Some(time_us),
            duration_us,
            cues,
            ..Self::default()
        }
    }

    pub fn end_of_stream() -> Self {
        Self {
            end_of_stream: true,
            ..Self::default()
        }
    }
}

/// Parse a script from JSON text.
pub fn parse_script(json: &str) -> Result<Script> {
    serde_json::from_str(json).context("Failed to parse replay script")
}

/// Load a script from a JSON file.
pub fn load_script(path: &Path) -> Result<Script> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read replay script: {:?}", path))?;
    parse_script(&content).with_context(|| format!("Invalid replay script: {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_units() {
        let script = parse_script(
            r#"{
                "units": [
                    {"time_us": 1000, "duration_us": 500, "cues": [{"text": "Hello"}]},
                    {"time_us": 2000, "payload": "garbage"},
                    {"end_of_stream": true}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(script.units.len(), 3);
        assert_eq!(script.units[0].time_us, Some(1000));
        assert_eq!(script.units[0].cues[0].text.as_deref(), Some("Hello"));
        assert_eq!(script.units[1].payload.as_deref(), Some("garbage"));
        assert!(script.units[2].end_of_stream);
        assert_eq!(script.units[2].time_us, None);
    }

    #[test]
    fn test_parse_rejects_non_json() {
        assert!(parse_script("units = []").is_err());
    }
}
