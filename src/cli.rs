use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cueforge")]
#[command(author, version, about = "Cue decoder replay and audio offload probing tool")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay a JSON script of cue units through the decoder
    Replay {
        /// Script file to replay
        #[arg(required = true)]
        script: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Sampling interval in microseconds (overrides config)
        #[arg(long)]
        step_us: Option<i64>,
    },

    /// Query offload support for an audio format
    Offload {
        /// Sample MIME type (e.g., audio/eac3)
        #[arg(long, required = true)]
        mime: String,

        /// RFC 6381 codecs string
        #[arg(long)]
        codecs: Option<String>,

        /// Channel count
        #[arg(long, default_value = "2")]
        channels: u32,

        /// Sample rate in Hz
        #[arg(long, default_value = "48000")]
        sample_rate: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
