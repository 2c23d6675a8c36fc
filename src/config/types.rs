use cueforge_offload::Encoding;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub replay: ReplayConfig,

    #[serde(default)]
    pub offload: OffloadConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReplayConfig {
    /// Interval between active-cue samples, in microseconds
    #[serde(default = "default_step_us")]
    pub step_us: i64,

    /// Consecutive empty output polls before a replay gives up
    #[serde(default = "default_max_idle_polls")]
    pub max_idle_polls: u32,
}

fn default_step_us() -> i64 {
    250_000
}

fn default_max_idle_polls() -> u32 {
    4
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            step_us: default_step_us(),
            max_idle_polls: default_max_idle_polls(),
        }
    }
}

/// Static description of the platform's offload capabilities.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OffloadConfig {
    /// Disable to answer every query as unsupported
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Whether playback speed can change while offloaded
    #[serde(default)]
    pub variable_rate_supported: bool,

    /// Encodings the platform can decode offloaded
    #[serde(default = "default_supported_encodings")]
    pub supported: Vec<Encoding>,

    /// Subset of `supported` with gapless transitions
    #[serde(default)]
    pub gapless: Vec<Encoding>,
}

fn default_true() -> bool {
    true
}

fn default_supported_encodings() -> Vec<Encoding> {
    vec![Encoding::Ac3, Encoding::EAc3, Encoding::EAc3Joc]
}

impl Default for OffloadConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            variable_rate_supported: false,
            supported: default_supported_encodings(),
            gapless: Vec::new(),
        }
    }
}
