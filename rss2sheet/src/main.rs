//! rss2sheet
//!
//! Walks a paginated RSS/Atom feed (`?paged=N`), normalizes every article
//! into a fixed row shape and writes them to a styled spreadsheet.
//! Uses a ports & adapters layout: the feed source and the sheet writer
//! are traits, with HTTP, ODS and XLSX implementations wired up here.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod adapters;
mod app;
mod cli;
mod config;
mod domain;
mod error;
mod sheet;

#[cfg(test)]
mod test_utils;

use adapters::{HttpFeedSource, OdsSheetWriter, XlsxSheetWriter};
use app::export_service::RunSummary;
use app::ExportService;
use cli::Cli;
use config::{RunConfig, SheetFormat};
use domain::ports::SheetWriter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout stays free for the final summary
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = RunConfig::from_cli(Cli::parse()).context("Invalid arguments")?;

    let source = Arc::new(
        HttpFeedSource::new(config.request_timeout).context("Failed to build HTTP client")?,
    );
    let summary = match config.output_format {
        SheetFormat::Ods => export(&config, source, OdsSheetWriter::new()).await?,
        SheetFormat::Xlsx => export(&config, source, XlsxSheetWriter::new()).await?,
    };

    println!(
        "{}: {} articles, {} columns ({} fetched, {} outside the date range)",
        summary.output.display(),
        summary.rows,
        summary.columns,
        summary.fetched,
        summary.skipped
    );

    Ok(())
}

async fn export<W: SheetWriter>(
    config: &RunConfig,
    source: Arc<HttpFeedSource>,
    writer: W,
) -> Result<RunSummary> {
    ExportService::new(source, Arc::new(writer))
        .run(config)
        .await
        .with_context(|| format!("Export of {} failed", config.feed_url))
}
