//! The platform seam.

use std::sync::Arc;

use crate::types::{AudioAttributes, PlatformFormat, PlaybackOffloadMode};

/// Parameter key reporting variable playback speed support during offload.
///
/// The platform answers `"offloadVariableRateSupported=1"` when supported.
pub const OFFLOAD_VARIABLE_RATE_SUPPORTED_KEY: &str = "offloadVariableRateSupported";

/// Access to the platform audio manager.
///
/// Implementations must be safe to share across threads (`Send + Sync`).
pub trait AudioPlatform: Send + Sync {
    /// Read a raw `key=value` parameter string, `None` if unavailable.
    fn parameter(&self, key: &str) -> Option<String>;

    /// Whether `format` can be played offloaded with `attributes`.
    fn playback_offload_support(
        &self,
        format: &PlatformFormat,
        attributes: &AudioAttributes,
    ) -> PlaybackOffloadMode;
}

impl<P: AudioPlatform + ?Sized> AudioPlatform for Arc<P> {
    fn parameter(&self, key: &str) -> Option<String> {
        (**self).parameter(key)
    }

    fn playback_offload_support(
        &self,
        format: &PlatformFormat,
        attributes: &AudioAttributes,
    ) -> PlaybackOffloadMode {
        (**self).playback_offload_support(format, attributes)
    }
}
