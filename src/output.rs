//! Output formatting and persistence for aggregation reports.
//!
//! Supports pretty-printing, JSON logging, and writing the report file.

use anyhow::Result;
use tracing::{debug, info};

use crate::aggregate::types::Report;
use std::fs;
use std::path::Path;

/// Logs a report using Rust's debug pretty-print format.
pub fn print_pretty(report: &Report) {
    debug!("{:#?}", report);
}

/// Logs a report as pretty-printed JSON.
pub fn print_json(report: &Report) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Writes a report as pretty-printed JSON, creating parent directories
/// as needed. Overwrites any existing file at the path.
pub fn write_report(path: &str, report: &Report) -> Result<()> {
    debug!(path, "Writing report JSON");

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_vec_pretty(report)?;
    fs::write(path, json)?;

    Ok(())
}
