//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{FeedPage, FeedSource, SheetReport, SheetWriter};
use crate::error::{ExportError, FeedError};
use crate::sheet::SheetLayout;

// ============================================================================
// Mock Feed Source
// ============================================================================

enum MockResponse {
    Page(FeedPage),
    Error,
}

/// Serves canned pages by exact URL. Unknown URLs return an empty page.
#[derive(Default)]
pub struct MockFeedSource {
    responses: HashMap<String, MockResponse>,
    requested: Arc<RwLock<Vec<String>>>,
}

impl MockFeedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, page: FeedPage) -> Self {
        self.responses
            .insert(url.to_string(), MockResponse::Page(page));
        self
    }

    /// Make `url` fail as if no response was received
    pub fn with_error(mut self, url: &str) -> Self {
        self.responses.insert(url.to_string(), MockResponse::Error);
        self
    }

    /// URLs requested so far, in order
    pub fn requested(&self) -> Vec<String> {
        self.requested.read().unwrap().clone()
    }
}

#[async_trait]
impl FeedSource for MockFeedSource {
    async fn fetch_page(&self, url: &str) -> Result<FeedPage, FeedError> {
        self.requested.write().unwrap().push(url.to_string());
        match self.responses.get(url) {
            Some(MockResponse::Page(page)) => Ok(page.clone()),
            Some(MockResponse::Error) => Err(request_error()),
            None => Ok(FeedPage::with_entries(Vec::new())),
        }
    }
}

/// A genuine `reqwest::Error`, produced without touching the network
fn request_error() -> FeedError {
    let err = reqwest::Client::new()
        .get("not-an-absolute-url")
        .build()
        .expect_err("relative URLs are rejected");
    FeedError::Request(err)
}

// ============================================================================
// In-Memory Sheet Writer
// ============================================================================

/// Records every layout it is asked to write
#[derive(Default)]
pub struct InMemorySheetWriter {
    written: Arc<RwLock<Vec<(PathBuf, SheetLayout)>>>,
}

impl InMemorySheetWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn written(&self) -> Vec<(PathBuf, SheetLayout)> {
        self.written.read().unwrap().clone()
    }
}

impl SheetWriter for InMemorySheetWriter {
    fn write(&self, layout: &SheetLayout, path: &Path) -> Result<SheetReport, ExportError> {
        self.written
            .write()
            .unwrap()
            .push((path.to_path_buf(), layout.clone()));
        Ok(SheetReport {
            rows: layout.data_rows(),
            columns: layout.column_count(),
        })
    }
}
