//! Command-line argument definitions for the claimdraw CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select a single claim file or a directory of
//! claim files, where the Mermaid output goes, which configuration file to
//! load, and how verbose logging is.

use clap::Parser;

/// Command-line arguments for the claimdraw diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a claim text file, or a directory of `.txt` claim files
    #[arg(help = "Path to the input file or directory")]
    pub input: String,

    /// Output `.mmd` file, or output directory in batch mode
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Diagram title; defaults to `PATENT SYSTEM - <INPUT STEM>`
    #[arg(short, long)]
    pub title: Option<String>,

    /// Skip writing the `.json` metadata file next to each diagram
    #[arg(long)]
    pub no_metadata: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
