//! The offload support provider.

use parking_lot::Mutex;

use crate::channels::ChannelLayout;
use crate::encoding::encoding_for;
use crate::platform::{AudioPlatform, OFFLOAD_VARIABLE_RATE_SUPPORTED_KEY};
use crate::types::{AudioAttributes, AudioFormat, OffloadSupport, PlatformFormat, PlaybackOffloadMode};

/// Answers offload capability queries against an [`AudioPlatform`].
///
/// The variable-rate parameter is read from the platform on the first query
/// and remembered for the provider's lifetime. Queries may come from any
/// thread.
pub struct OffloadSupportProvider<P> {
    platform: Option<P>,
    /// `None` until the platform has been asked.
    variable_rate_supported: Mutex<Option<bool>>,
}

impl<P: AudioPlatform> OffloadSupportProvider<P> {
    pub fn new(platform: P) -> Self {
        Self {
            platform: Some(platform),
            variable_rate_supported: Mutex::new(None),
        }
    }

    /// A provider with no platform access. Every query is unsupported.
    pub fn without_platform() -> Self {
        Self {
            platform: None,
            variable_rate_supported: Mutex::new(None),
        }
    }

    /// Offload capabilities for `format` played with `attributes`.
    pub fn offload_support(
        &self,
        format: &AudioFormat,
        attributes: &AudioAttributes,
    ) -> OffloadSupport {
        let Some(platform) = self.platform.as_ref() else {
            return OffloadSupport::UNSUPPORTED;
        };

        // Probed here rather than in `new` so the first querying thread pays
        // for it.
        let speed_change_supported = self.variable_rate_supported(platform);

        let Some(encoding) = encoding_for(&format.sample_mime_type, format.codecs.as_deref())
        else {
            tracing::debug!(
                mime = %format.sample_mime_type,
                codecs = ?format.codecs,
                "no offload encoding for format"
            );
            return OffloadSupport::UNSUPPORTED;
        };
        let Some(channel_layout) = ChannelLayout::for_channel_count(format.channel_count) else {
            tracing::debug!(channels = format.channel_count, "no channel layout for format");
            return OffloadSupport::UNSUPPORTED;
        };

        let platform_format = PlatformFormat {
            encoding,
            channel_layout,
            sample_rate: format.sample_rate,
        };
        match platform.playback_offload_support(&platform_format, attributes) {
            PlaybackOffloadMode::NotSupported => OffloadSupport::UNSUPPORTED,
            mode => OffloadSupport {
                format_supported: true,
                gapless_supported: mode == PlaybackOffloadMode::GaplessSupported,
                speed_change_supported,
            },
        }
    }

    fn variable_rate_supported(&self, platform: &P) -> bool {
        let mut cached = self.variable_rate_supported.lock();
        if let Some(supported) = *cached {
            return supported;
        }

        let expected = format!("{OFFLOAD_VARIABLE_RATE_SUPPORTED_KEY}=1");
        let supported = platform
            .parameter(OFFLOAD_VARIABLE_RATE_SUPPORTED_KEY)
            .is_some_and(|value| value == expected);
        *cached = Some(supported);

        tracing::debug!(supported, "probed offload variable rate support");
        supported
    }
}
