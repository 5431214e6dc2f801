//! Export service
//!
//! One run of the tool: fetch every page, normalize and filter the entries,
//! lay the rows out and hand them to the sheet writer. Nothing is written
//! unless at least one row survives.

use std::path::PathBuf;
use std::sync::Arc;

use crate::app::fetch_service::PaginatedFetcher;
use crate::app::normalizer::normalize_entries;
use crate::config::RunConfig;
use crate::domain::ports::{FeedSource, SheetWriter};
use crate::error::ExportError;
use crate::sheet::build_layout;

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Unique entries retrieved from the feed
    pub fetched: usize,
    /// Entries dropped by the date window
    pub skipped: usize,
    pub rows: usize,
    pub columns: usize,
    pub output: PathBuf,
}

/// Service running the fetch → normalize → render pipeline
pub struct ExportService<S, W>
where
    S: FeedSource,
    W: SheetWriter,
{
    source: Arc<S>,
    writer: Arc<W>,
}

impl<S, W> ExportService<S, W>
where
    S: FeedSource,
    W: SheetWriter,
{
    pub fn new(source: Arc<S>, writer: Arc<W>) -> Self {
        Self { source, writer }
    }

    pub async fn run(&self, config: &RunConfig) -> Result<RunSummary, ExportError> {
        if config.window.is_bounded() {
            tracing::info!("Date filter: {}", config.window);
        }

        let fetcher = PaginatedFetcher::new(self.source.clone(), config.fetch_settings());
        let outcome = fetcher.fetch_all(&config.feed_url).await?;

        if outcome.entries.is_empty() {
            return Err(ExportError::NoEntries);
        }
        tracing::info!(
            fetched = outcome.entries.len(),
            pages = outcome.pages_fetched,
            stop = %outcome.stop_reason,
            "Total: {} articles retrieved",
            outcome.entries.len()
        );

        let normalized = normalize_entries(&outcome.entries, &config.window);
        if normalized.rows.is_empty() {
            return Err(ExportError::NoRowsInWindow {
                skipped: normalized.skipped,
            });
        }

        let layout = build_layout(&normalized.rows);
        let report = self.writer.write(&layout, &config.output)?;
        tracing::info!(
            rows = report.rows,
            columns = report.columns,
            output = %config.output.display(),
            "Spreadsheet written: {} articles, {} columns",
            report.rows,
            report.columns
        );

        Ok(RunSummary {
            fetched: outcome.entries.len(),
            skipped: normalized.skipped,
            rows: report.rows,
            columns: report.columns,
            output: config.output.clone(),
        })
    }
}
