mod cli;

use cueforge::{config, offload, replay};
use cueforge_offload::{AudioAttributes, AudioFormat};
use cueforge_text::CuesDecoder;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "cueforge=trace,cueforge_text=trace,cueforge_offload=trace,cueforge_common=debug"
                .to_string()
        } else {
            "cueforge=info,cueforge_text=info,cueforge_offload=info".to_string()
        }
    });

    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Replay {
            script,
            json,
            step_us,
        } => replay_script(&script, cli.config.as_deref(), json, step_us),
        Commands::Offload {
            mime,
            codecs,
            channels,
            sample_rate,
            json,
        } => {
            let mut format = AudioFormat::new(mime, channels, sample_rate);
            if let Some(codecs) = codecs {
                format = format.with_codecs(codecs);
            }
            probe_offload(&format, cli.config.as_deref(), json)
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("cueforge {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn replay_script(
    script_path: &Path,
    config_path: Option<&Path>,
    json: bool,
    step_us: Option<i64>,
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;

    let mut options = replay::ReplayOptions::from(&config.replay);
    if let Some(step_us) = step_us {
        if step_us <= 0 {
            anyhow::bail!("--step-us must be positive");
        }
        options.step_us = step_us;
    }

    let script = replay::load_script(script_path)?;
    tracing::info!("Replaying {} units from {:?}", script.units.len(), script_path);

    let mut decoder = CuesDecoder::new();
    let report = replay::replay(&mut decoder, &script, options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", replay::render_text(&report));
    }

    Ok(())
}

fn probe_offload(format: &AudioFormat, config_path: Option<&Path>, json: bool) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let provider = offload::provider_from_config(&config.offload);
    let support = provider.offload_support(format, &AudioAttributes::default());

    if json {
        println!("{}", serde_json::to_string_pretty(&support)?);
    } else {
        println!("Format: {} {}ch {}Hz", format.sample_mime_type, format.channel_count, format.sample_rate);
        if let Some(ref codecs) = format.codecs {
            println!("Codecs: {}", codecs);
        }
        println!("Offload supported: {}", support.format_supported);
        println!("Gapless supported: {}", support.gapless_supported);
        println!("Speed change supported: {}", support.speed_change_supported);
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Replay step: {}us", config.replay.step_us);
            println!("  Max idle polls: {}", config.replay.max_idle_polls);
            println!("  Offload enabled: {}", config.offload.enabled);
            println!("  Supported encodings: {}", config.offload.supported.len());
            println!("  Gapless encodings: {}", config.offload.gapless.len());
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Replay step: {}us", config.replay.step_us);
        }
    }

    Ok(())
}
