//! Unified error types for rss2sheet
//!
//! This module defines error types for each layer:
//! - `ConfigError`: invalid command-line or environment input
//! - `FeedError`: feed source transport errors (no usable response)
//! - `FetchError`: fatal pagination errors
//! - `ExportError`: run-level errors surfaced to the operator

use std::path::PathBuf;

use thiserror::Error;

/// Input validation errors, raised before any network activity
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid date '{0}': use DD/MM/YYYY or YYYY-MM-DD")]
    InvalidDate(String),

    #[error("--from ({from}) must not be later than --to ({to})")]
    InvertedWindow { from: String, to: String },

    #[error("Invalid feed URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

/// Feed source errors - the page could not be retrieved at all
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Fatal pagination errors
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Feed {url} is unreachable or malformed: {reason}")]
    FirstPageUnavailable { url: String, reason: String },
}

/// Run-level errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("No articles found in the feed")]
    NoEntries,

    #[error("No articles left after date filtering ({skipped} outside the date range)")]
    NoRowsInWindow { skipped: usize },

    #[error("Cannot prepare output location {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Spreadsheet error: {0}")]
    Ods(#[from] spreadsheet_ods::OdsError),

    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_is_transparent_in_export_error() {
        let err: ExportError = FetchError::FirstPageUnavailable {
            url: "https://example.com/feed/".to_string(),
            reason: "not a feed".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Feed https://example.com/feed/ is unreachable or malformed: not a feed"
        );
    }

    #[test]
    fn no_rows_in_window_reports_skipped_count() {
        let err = ExportError::NoRowsInWindow { skipped: 7 };
        assert!(err.to_string().contains("7 outside the date range"));
    }

    #[test]
    fn invalid_date_mentions_accepted_formats() {
        let err = ConfigError::InvalidDate("2025/01/01".to_string());
        let msg = err.to_string();
        assert!(msg.contains("2025/01/01"));
        assert!(msg.contains("DD/MM/YYYY"));
        assert!(msg.contains("YYYY-MM-DD"));
    }
}
