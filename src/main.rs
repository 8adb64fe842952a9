//! CLI entry point for the EV analytics tool.
//!
//! Provides subcommands for building the full dashboard report from a
//! registration dataset and for logging the headline metrics.

use anyhow::Result;
use clap::{Parser, Subcommand};
use ev_analytics::{
    aggregate::report::build_report,
    fetch::fetch_bytes,
    loader::parse_records,
    output::{print_json, write_report},
};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "ev_analytics")]
#[command(about = "A tool to aggregate EV registration data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the full dashboard report from a dataset file or URL
    Report {
        /// Path to CSV file or URL to fetch
        #[arg(value_name = "FILE_OR_URL")]
        source: String,

        /// JSON file to write the report to; logs to stdout when omitted
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Log the headline summary metrics for a dataset
    Summary {
        /// Path to CSV file or URL to fetch
        #[arg(value_name = "FILE_OR_URL")]
        source: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/ev_analytics.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("ev_analytics.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report { source, output } => {
            let bytes = fetcher(&source)?;
            let records = parse_records(&bytes)?;
            let report = build_report(&records);

            match output {
                Some(path) => {
                    write_report(&path, &report)?;
                    info!(path = %path, "Report written");
                }
                None => print_json(&report)?,
            }
        }
        Commands::Summary { source } => {
            let bytes = fetcher(&source)?;
            let records = parse_records(&bytes)?;
            let summary = build_report(&records).summary;

            info!(
                total_vehicles = summary.total_vehicle_count,
                avg_range = summary.avg_range,
                unique_makes = summary.unique_makes_count,
                bev = summary.bevcount,
                phev = summary.phevcount,
                "Dataset summary"
            );
        }
    }

    Ok(())
}

/// Loads dataset bytes from a local file path or fetches them over HTTP.
#[tracing::instrument(fields(source = %source))]
fn fetcher(source: &str) -> Result<Vec<u8>> {
    let bytes = if source.starts_with("http") {
        fetch_bytes(source)?
    } else {
        std::fs::read(source)?
    };
    Ok(bytes)
}
