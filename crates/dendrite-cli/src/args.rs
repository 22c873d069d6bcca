//! Command-line argument definitions for the Dendrite CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, canvas dimensions,
//! configuration file selection, seeding, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Dendrite layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input outline (JSON)
    #[arg(help = "Path to the input outline file")]
    pub input: String,

    /// Path to the output placement file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to a layout configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 700.0)]
    pub width: f32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 500.0)]
    pub height: f32,

    /// Seed for the placement random-number stream; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
