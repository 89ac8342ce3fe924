//! Command implementations for NDBC extractor CLI
//!
//! This module contains the main command execution logic, report formatting,
//! and error handling for the CLI interface.

use std::path::Path;

use chrono::{TimeZone, Utc};
use colored::Colorize;
use serde::Serialize;
use tracing::{debug, info};

use crate::app::adapters::filesystem;
use crate::app::models::Observation;
use crate::app::services::feed_parser;
use crate::cli::args::{Args, Commands, ExtractArgs, OutputFormat};
use crate::{Error, Result};

/// Extraction results for both feed kinds
///
/// `None` is the absence signal: the feed was missing, empty, or carried no
/// extractable measurement. Serialized as explicit `null` so scripted
/// consumers can distinguish absence without probing for keys.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionReport {
    pub tabular: Option<Observation>,
    pub freeform: Option<Observation>,
}

/// Main command runner for the NDBC extractor
pub fn run(args: Args) -> Result<ExtractionReport> {
    match args.command {
        Some(Commands::Extract(extract_args)) => run_extract(extract_args),
        None => Err(Error::configuration("No command provided".to_string())),
    }
}

/// Execute the extract command
///
/// Parses whichever feeds were supplied and prints both results. A feed
/// that fails to read or to parse yields the absence signal; it is never
/// fatal, so the command succeeds even when both results are absent.
pub fn run_extract(args: ExtractArgs) -> Result<ExtractionReport> {
    setup_logging(&args)?;

    info!("Starting NDBC extraction");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let report = ExtractionReport {
        tabular: extract_feed(args.tabular_path.as_deref(), feed_parser::parse_tabular),
        freeform: extract_feed(args.freeform_path.as_deref(), feed_parser::parse_freeform),
    };

    match args.output_format {
        OutputFormat::Human => print_human_report(&args, &report),
        OutputFormat::Json => print_json_report(&report)?,
    }

    Ok(report)
}

/// Read one feed and run it through a parse strategy
///
/// Missing path, unreadable file, and unparseable content all collapse to
/// the absence signal.
fn extract_feed(
    path: Option<&Path>,
    parse: impl Fn(&str) -> Option<Observation>,
) -> Option<Observation> {
    let path = path?;
    let text = filesystem::read_feed(path)?;
    let observation = parse(&text);

    match &observation {
        Some(obs) => info!(path = %path.display(), ?obs, "extracted observation"),
        None => info!(path = %path.display(), "no observation extracted"),
    }

    observation
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &ExtractArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ndbc_extractor={}", log_level)));

    // Set up subscriber based on output format preference
    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Print the human-readable report to stdout
fn print_human_report(args: &ExtractArgs, report: &ExtractionReport) {
    print_feed_result("Tabular feed", args.tabular_path.as_deref(), &report.tabular);
    print_feed_result(
        "Freeform feed",
        args.freeform_path.as_deref(),
        &report.freeform,
    );
}

fn print_feed_result(label: &str, path: Option<&Path>, observation: &Option<Observation>) {
    let heading = match path {
        Some(path) => format!("{} ({})", label, path.display()),
        None => format!("{} (not provided)", label),
    };
    println!("{}", heading.bold());

    match observation {
        Some(obs) => {
            match obs.sst_c {
                Some(sst) => println!("  sea-surface temperature: {}", format!("{:.2} °C", sst).green()),
                None => println!("  sea-surface temperature: {}", "not reported".dimmed()),
            }
            match obs.wave_m {
                Some(wave) => println!("  significant wave height: {}", format!("{:.2} m", wave).green()),
                None => println!("  significant wave height: {}", "not reported".dimmed()),
            }
            println!("  observed at: {}", format_timestamp(obs.ts).cyan());
        }
        None => println!("  {}", "no observation extracted".yellow()),
    }
}

/// Print the JSON report to stdout
fn print_json_report(report: &ExtractionReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| Error::report_serialization("Failed to serialize report", e))?;
    println!("{}", json);
    Ok(())
}

/// Render epoch milliseconds as an RFC 3339 UTC instant
fn format_timestamp(ts: i64) -> String {
    match Utc.timestamp_millis_opt(ts).single() {
        Some(instant) => instant.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        None => format!("{} ms", ts),
    }
}
