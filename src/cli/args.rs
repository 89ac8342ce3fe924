//! Command-line argument definitions for NDBC extractor
//!
//! This module defines the CLI interface using the clap derive API.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the NDBC buoy observation extractor
///
/// Extracts sea-surface temperature and significant wave height observations
/// from NDBC buoy text feeds in tabular and freeform layouts.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ndbc-extractor",
    version,
    about = "Extract sea-surface temperature and wave height from NDBC buoy text feeds",
    long_about = "Extracts sea-surface temperature, significant wave height, and an observation \
                  timestamp from NDBC buoy text feeds. Handles both whitespace-delimited tabular \
                  feeds (realtime2 style) and freeform label: value feeds, tolerating varying \
                  column order, missing headers, and the MM missing-value convention."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the NDBC extractor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Extract observations from feed files (main command)
    Extract(ExtractArgs),
}

/// Arguments for the extract command
#[derive(Debug, Clone, Parser)]
pub struct ExtractArgs {
    /// Path to a tabular (realtime2-style) feed file
    ///
    /// Whitespace-delimited columns, optionally preceded by a #-prefixed
    /// header row naming columns such as WVHT and WTMP.
    #[arg(
        short = 't',
        long = "tabular",
        value_name = "FILE",
        help = "Path to a tabular feed file"
    )]
    pub tabular_path: Option<PathBuf>,

    /// Path to a freeform (label: value) feed file
    ///
    /// Line-oriented text with explicit labels such as "water temperature:"
    /// and "wave height:". Falls back to tabular parsing when no labels match.
    #[arg(
        short = 'f',
        long = "freeform",
        value_name = "FILE",
        help = "Path to a freeform feed file"
    )]
    pub freeform_path: Option<PathBuf>,

    /// Output format for extracted observations
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options for extracted observations
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl ExtractArgs {
    /// Validate the extract command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.tabular_path.is_none() && self.freeform_path.is_none() {
            return Err(Error::configuration(
                "At least one of --tabular or --freeform must be provided".to_string(),
            ));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
