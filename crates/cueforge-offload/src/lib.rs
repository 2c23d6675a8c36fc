//! # cueforge-offload
//!
//! Answers "can this audio format be played with offloaded decoding" for the
//! audio output layer.
//!
//! The platform is reached through the [`AudioPlatform`] trait. The
//! provider maps the format to an [`Encoding`] and a [`ChannelLayout`],
//! asks the platform, and combines the answer with a variable-rate probe
//! that runs at most once per provider.
//!
//! ## Example
//!
//! ```
//! use cueforge_offload::{
//!     AudioAttributes, AudioFormat, AudioPlatform, OffloadSupportProvider,
//!     PlatformFormat, PlaybackOffloadMode,
//! };
//!
//! struct Passthrough;
//!
//! impl AudioPlatform for Passthrough {
//!     fn parameter(&self, key: &str) -> Option<String> {
//!         Some(format!("{key}=1"))
//!     }
//!
//!     fn playback_offload_support(
//!         &self,
//!         _format: &PlatformFormat,
//!         _attributes: &AudioAttributes,
//!     ) -> PlaybackOffloadMode {
//!         PlaybackOffloadMode::GaplessSupported
//!     }
//! }
//!
//! let provider = OffloadSupportProvider::new(Passthrough);
//! let format = AudioFormat::new("audio/eac3", 6, 48_000);
//! let support = provider.offload_support(&format, &AudioAttributes::default());
//!
//! assert!(support.format_supported);
//! assert!(support.gapless_supported);
//! assert!(support.speed_change_supported);
//! ```

mod channels;
mod encoding;
mod error;
mod platform;
mod provider;
mod types;

pub use channels::ChannelLayout;
pub use encoding::{encoding_for, Encoding};
pub use error::{Error, Result};
pub use platform::{AudioPlatform, OFFLOAD_VARIABLE_RATE_SUPPORTED_KEY};
pub use provider::OffloadSupportProvider;
pub use types::{
    AudioAttributes, AudioContentType, AudioFormat, AudioUsage, OffloadSupport,
    PlatformFormat, PlaybackOffloadMode,
};
