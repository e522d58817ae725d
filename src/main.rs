//! Prime Report - Prime Number Theorem verification
//!
//! Loads precomputed prime datasets from the working directory and prints
//! a statistical report comparing π(x) with its classical approximations.

mod config;
mod data;
mod report;
mod stats;

use anyhow::{Context, Result};
use config::DatasetPaths;
use data::DatasetLoader;
use report::ReportWriter;
use std::io::{self, BufWriter};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_logging();

    let loader = DatasetLoader::new(DatasetPaths::default());
    debug!(paths = ?loader.paths(), "loading datasets");
    let datasets = loader.load_all().context("failed to load prime datasets")?;

    let stdout = io::stdout();
    let mut writer = ReportWriter::new(BufWriter::new(stdout.lock()));
    writer
        .write_report(&datasets)
        .context("failed to produce report")?;

    Ok(())
}

/// Log to stderr so stdout carries only the report. Level from `RUST_LOG`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}
