//! Cueforge - cue decoding and offload probing tool
//!
//! This library crate exposes the driver pieces for integration testing.

pub mod config;
pub mod offload;
pub mod replay;
