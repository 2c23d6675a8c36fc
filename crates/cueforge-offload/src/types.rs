//! Format, attribute, and capability types.

use serde::{Deserialize, Serialize};

use crate::channels::ChannelLayout;
use crate::encoding::Encoding;

/// An audio track format as reported by the demuxer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioFormat {
    /// Sample MIME type (e.g., "audio/eac3")
    pub sample_mime_type: String,
    /// RFC 6381 codecs string, if known
    pub codecs: Option<String>,
    pub channel_count: u32,
    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl AudioFormat {
    pub fn new(sample_mime_type: impl Into<String>, channel_count: u32, sample_rate: u32) -> Self {
        Self {
            sample_mime_type: sample_mime_type.into(),
            codecs: None,
            channel_count,
            sample_rate,
        }
    }

    pub fn with_codecs(mut self, codecs: impl Into<String>) -> Self {
        self.codecs = Some(codecs.into());
        self
    }
}

/// Why audio is being played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioUsage {
    #[default]
    Media,
    Game,
    Assistant,
    Notification,
    Alarm,
    VoiceCommunication,
}

/// What kind of audio is being played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioContentType {
    #[default]
    Unknown,
    Music,
    Movie,
    Speech,
    Sonification,
}

/// Output attributes the platform routes on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AudioAttributes {
    pub usage: AudioUsage,
    pub content_type: AudioContentType,
    /// Platform-specific attribute flags
    pub flags: u32,
}

/// A format resolved into the terms the platform understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlatformFormat {
    pub encoding: Encoding,
    pub channel_layout: ChannelLayout,
    pub sample_rate: u32,
}

/// Platform answer for a single offload query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackOffloadMode {
    NotSupported,
    Supported,
    /// Supported, including gapless transitions between tracks.
    GaplessSupported,
}

/// Offload capabilities of one format/attributes combination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OffloadSupport {
    pub format_supported: bool,
    pub gapless_supported: bool,
    pub speed_change_supported: bool,
}

impl OffloadSupport {
    /// Nothing is supported.
    pub const UNSUPPORTED: OffloadSupport = OffloadSupport {
        format_supported: false,
        gapless_supported: false,
        speed_change_supported: false,
    };
}
