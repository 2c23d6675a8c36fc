//! Offload capability queries against a platform described in config.

use std::collections::HashSet;

use cueforge_offload::{
    AudioAttributes, AudioPlatform, Encoding, OffloadSupportProvider, PlatformFormat,
    PlaybackOffloadMode, OFFLOAD_VARIABLE_RATE_SUPPORTED_KEY,
};

use crate::config::OffloadConfig;

/// An [`AudioPlatform`] whose answers come from [`OffloadConfig`].
#[derive(Debug, Clone)]
pub struct StaticPlatform {
    supported: HashSet<Encoding>,
    gapless: HashSet<Encoding>,
    variable_rate_supported: bool,
}

impl StaticPlatform {
    pub fn from_config(config: &OffloadConfig) -> Self {
        Self {
            supported: config.supported.iter().copied().collect(),
            gapless: config.gapless.iter().copied().collect(),
            variable_rate_supported: config.variable_rate_supported,
        }
    }
}

impl AudioPlatform for StaticPlatform {
    fn parameter(&self, key: &str) -> Option<String> {
        if key != OFFLOAD_VARIABLE_RATE_SUPPORTED_KEY {
            return None;
        }
        let value = if self.variable_rate_supported { 1 } else { 0 };
        Some(format!("{key}={value}"))
    }

    fn playback_offload_support(
        &self,
        format: &PlatformFormat,
        _attributes: &AudioAttributes,
    ) -> PlaybackOffloadMode {
        if !self.supported.contains(&format.encoding) {
            PlaybackOffloadMode::NotSupported
        } else if self.gapless.contains(&format.encoding) {
            PlaybackOffloadMode::GaplessSupported
        } else {
            PlaybackOffloadMode::Supported
        }
    }
}

/// Build a provider for the configured platform.
///
/// A disabled config yields a provider without platform access.
pub fn provider_from_config(config: &OffloadConfig) -> OffloadSupportProvider<StaticPlatform> {
    if config.enabled {
        OffloadSupportProvider::new(StaticPlatform::from_config(config))
    } else {
        OffloadSupportProvider::without_platform()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cueforge_offload::{AudioFormat, OffloadSupport};

    fn config() -> OffloadConfig {
        OffloadConfig {
            enabled: true,
            variable_rate_supported: true,
            supported: vec![Encoding::Ac3, Encoding::EAc3Joc],
            gapless: vec![Encoding::EAc3Joc],
        }
    }

    #[test]
    fn test_static_platform_modes() {
        let provider = provider_from_config(&config());
        let attributes = AudioAttributes::default();

        let ac3 = provider.offload_support(&AudioFormat::new("audio/ac3", 6, 48_000), &attributes);
        assert!(ac3.format_supported);
        assert!(!ac3.gapless_supported);
        assert!(ac3.speed_change_supported);

        let joc = AudioFormat::new("audio/eac3", 6, 48_000).with_codecs("ec+3");
        assert!(provider.offload_support(&joc, &attributes).gapless_supported);

        let plain_eac3 = AudioFormat::new("audio/eac3", 6, 48_000);
        assert_eq!(
            provider.offload_support(&plain_eac3, &attributes),
            OffloadSupport::UNSUPPORTED
        );
    }

    #[test]
    fn test_disabled_config() {
        let mut config = config();
        config.enabled = false;
        let provider = provider_from_config(&config);
        let format = AudioFormat::new("audio/ac3", 2, 48_000);
        assert_eq!(
            provider.offload_support(&format, &AudioAttributes::default()),
            OffloadSupport::UNSUPPORTED
        );
    }

    #[test]
    fn test_variable_rate_parameter() {
        let platform = StaticPlatform::from_config(&config());
        assert_eq!(
            platform.parameter(OFFLOAD_VARIABLE_RATE_SUPPORTED_KEY).as_deref(),
            Some("offloadVariableRateSupported=1")
        );
        assert_eq!(platform.parameter("somethingElse"), None);
    }
}
