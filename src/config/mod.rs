mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./cueforge.toml",
        "./config.toml",
        "~/.config/cueforge/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.replay.step_us <= 0 {
        anyhow::bail!("Replay step_us must be positive");
    }

    if config.replay.max_idle_polls == 0 {
        anyhow::bail!("Replay max_idle_polls cannot be 0");
    }

    for encoding in &config.offload.gapless {
        if !config.offload.supported.contains(encoding) {
            anyhow::bail!(
                "Encoding '{}' is listed as gapless but not as supported",
                encoding
            );
        }
    }

    if config.offload.enabled && config.offload.supported.is_empty() {
        tracing::warn!("Offload is enabled but no encodings are supported");
    }

    Ok(())
}
