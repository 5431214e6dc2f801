use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

use crate::app::FetchSettings;
use crate::cli::Cli;
use crate::domain::entities::{parse_user_date, DateWindow};
use crate::error::ConfigError;

/// Spreadsheet file format, picked from the output extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Ods,
    Xlsx,
}

impl SheetFormat {
    /// `.xlsx` selects Excel; anything else is written as OpenDocument
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("xlsx") => SheetFormat::Xlsx,
            _ => SheetFormat::Ods,
        }
    }
}

/// Validated settings for one export run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub feed_url: Url,
    pub output: PathBuf,
    pub output_format: SheetFormat,
    pub paginate: bool,
    pub max_items: Option<usize>,
    pub delay: Duration,
    pub window: DateWindow,
    /// Per-request timeout for feed pages
    pub request_timeout: Duration,
}

impl RunConfig {
    /// Validate the parsed command line. Runs before any network activity.
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let feed_url = Url::parse(cli.url.trim()).map_err(|e| ConfigError::InvalidUrl {
            url: cli.url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(feed_url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: cli.url,
                reason: "only http and https feeds are supported".to_string(),
            });
        }

        let from = cli.date_from.as_deref().map(parse_user_date).transpose()?;
        let to = cli.date_to.as_deref().map(parse_user_date).transpose()?;
        let window = DateWindow::new(from, to)?;

        if cli.max == Some(0) {
            return Err(ConfigError::InvalidValue {
                name: "--max",
                reason: "must be at least 1".to_string(),
            });
        }

        let request_timeout = seconds("--timeout", cli.timeout)?;
        if request_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                name: "--timeout",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            feed_url,
            output_format: SheetFormat::for_path(&cli.output),
            output: cli.output,
            paginate: !cli.no_paginate,
            max_items: cli.max,
            delay: seconds("--delay", cli.delay)?,
            window,
            request_timeout,
        })
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            paginate: self.paginate,
            max_items: self.max_items,
            delay: self.delay,
        }
    }
}

fn seconds(name: &'static str, value: f64) -> Result<Duration, ConfigError> {
    Duration::try_from_secs_f64(value).map_err(|e| ConfigError::InvalidValue {
        name,
        reason: e.to_string(),
    })
}
