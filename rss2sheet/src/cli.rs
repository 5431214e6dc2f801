//! Command-line arguments
//!
//! Every option except the date bounds and `--no-paginate` can also be set
//! through an `RSS2SHEET_*` environment variable (or a `.env` file).

use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_FEED_URL: &str = "https://www.uneiaparjour.fr/feed/";
pub const DEFAULT_OUTPUT: &str = "uneiaparjour.ods";

#[derive(Debug, Parser)]
#[command(name = "rss2sheet", version)]
#[command(about = "Export a paginated RSS feed to a styled spreadsheet")]
pub struct Cli {
    /// Feed URL
    #[arg(short, long, env = "RSS2SHEET_URL", default_value = DEFAULT_FEED_URL)]
    pub url: String,

    /// Output spreadsheet path (.ods, or .xlsx for an Excel workbook)
    #[arg(short, long, env = "RSS2SHEET_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Maximum number of articles to export
    #[arg(long, env = "RSS2SHEET_MAX")]
    pub max: Option<usize>,

    /// Only fetch the first page
    #[arg(long)]
    pub no_paginate: bool,

    /// Delay between page requests, in seconds
    #[arg(long, env = "RSS2SHEET_DELAY", default_value_t = 1.0, allow_negative_numbers = true)]
    pub delay: f64,

    /// Start date, inclusive (DD/MM/YYYY or YYYY-MM-DD)
    #[arg(long = "from", value_name = "DATE")]
    pub date_from: Option<String>,

    /// End date, inclusive (DD/MM/YYYY or YYYY-MM-DD)
    #[arg(long = "to", value_name = "DATE")]
    pub date_to: Option<String>,

    /// Timeout for each page request, in seconds
    #[arg(long, env = "RSS2SHEET_TIMEOUT", default_value_t = 30.0, allow_negative_numbers = true)]
    pub timeout: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["rss2sheet"]).unwrap();
        assert_eq!(cli.url, DEFAULT_FEED_URL);
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(cli.max, None);
        assert!(!cli.no_paginate);
        assert_eq!(cli.delay, 1.0);
        assert_eq!(cli.timeout, 30.0);
        assert!(cli.date_from.is_none());
        assert!(cli.date_to.is_none());
    }

    #[test]
    fn all_flags() {
        let cli = Cli::try_parse_from([
            "rss2sheet",
            "-u",
            "https://blog.example.com/feed/",
            "-o",
            "out/articles.xlsx",
            "--max",
            "50",
            "--no-paginate",
            "--delay",
            "0.5",
            "--from",
            "25/04/2025",
            "--to",
            "2026-02-14",
        ])
        .unwrap();

        assert_eq!(cli.url, "https://blog.example.com/feed/");
        assert_eq!(cli.output, PathBuf::from("out/articles.xlsx"));
        assert_eq!(cli.max, Some(50));
        assert!(cli.no_paginate);
        assert_eq!(cli.delay, 0.5);
        assert_eq!(cli.date_from.as_deref(), Some("25/04/2025"));
        assert_eq!(cli.date_to.as_deref(), Some("2026-02-14"));
    }

    #[test]
    fn rejects_non_numeric_max() {
        assert!(Cli::try_parse_from(["rss2sheet", "--max", "lots"]).is_err());
    }
}
