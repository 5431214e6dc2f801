//! Feed source port trait
//!
//! Defines the interface for retrieving and parsing one page of a feed.

use async_trait::async_trait;

use crate::domain::entities::FeedEntry;
use crate::error::FeedError;

/// One fetched feed page
#[derive(Debug, Clone, Default)]
pub struct FeedPage {
    pub entries: Vec<FeedEntry>,
    /// Set when the body could not be parsed as a feed
    pub parse_error: Option<String>,
    /// HTTP status of the response, when one was received
    pub http_status: Option<u16>,
}

impl FeedPage {
    #[cfg(test)]
    pub fn with_entries(entries: Vec<FeedEntry>) -> Self {
        Self {
            entries,
            parse_error: None,
            http_status: Some(200),
        }
    }

    pub fn unparsable(reason: impl Into<String>, http_status: Option<u16>) -> Self {
        Self {
            entries: Vec::new(),
            parse_error: Some(reason.into()),
            http_status,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.parse_error.is_some() && self.entries.is_empty()
    }
}

/// Fetches and parses a single feed page.
///
/// `Err` means no response was obtained at all; a response whose body is not
/// a feed is reported through `FeedPage::parse_error` instead.
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch_page(&self, url: &str) -> Result<FeedPage, FeedError>;
}
