//! Command-line argument definitions for the Armature CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, validate-only mode, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Armature scheme tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input scheme file (TOML)
    #[arg(help = "Path to the input scheme file")]
    pub input: String,

    /// Path to the output layout document (JSON)
    #[arg(short, long, default_value = "layout.json")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Validate the scheme and print the report without computing a layout
    #[arg(long)]
    pub check: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
