//! Paginated fetch service
//!
//! Walks `?paged=N` feed pages one after another until the feed runs out,
//! starts repeating itself, or the item cap is reached.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::entities::FeedEntry;
use crate::domain::ports::{FeedPage, FeedSource};
use crate::error::FetchError;

/// Query parameter carrying the page number
pub const PAGE_PARAM: &str = "paged";

/// Pagination settings for one run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FetchSettings {
    pub paginate: bool,
    pub max_items: Option<usize>,
    /// Pause between two page requests
    pub delay: Duration,
}

/// Why pagination ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// A page after the first could not be fetched or parsed
    Unreachable(String),
    EmptyPage,
    NotFound,
    /// Every entry on the page had been seen already
    Duplicates,
    LimitReached(usize),
    SinglePage,
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StopReason::Unreachable(reason) => write!(f, "page unreachable ({})", reason),
            StopReason::EmptyPage => write!(f, "empty page"),
            StopReason::NotFound => write!(f, "404"),
            StopReason::Duplicates => write!(f, "duplicates detected"),
            StopReason::LimitReached(max) => write!(f, "limit of {} articles reached", max),
            StopReason::SinglePage => write!(f, "pagination disabled"),
        }
    }
}

/// Everything gathered by one `fetch_all` call
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// Unique entries (by link) in first-seen order
    pub entries: Vec<FeedEntry>,
    pub pages_fetched: usize,
    pub stop_reason: StopReason,
}

/// Sequential feed page walker
pub struct PaginatedFetcher<S>
where
    S: FeedSource,
{
    source: Arc<S>,
    settings: FetchSettings,
}

impl<S> PaginatedFetcher<S>
where
    S: FeedSource,
{
    pub fn new(source: Arc<S>, settings: FetchSettings) -> Self {
        Self { source, settings }
    }

    /// Fetch pages starting from `base_url` until a stop condition is met.
    ///
    /// Only an unusable first page is an error; every other stop returns
    /// what has been accumulated so far.
    pub async fn fetch_all(&self, base_url: &Url) -> Result<FetchOutcome, FetchError> {
        let mut entries: Vec<FeedEntry> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut page: usize = 1;

        let stop_reason = loop {
            let url = if page == 1 {
                base_url.clone()
            } else {
                build_paged_url(base_url, page)
            };
            tracing::info!(page, url = %url, "Fetching feed page");

            let result = match self.source.fetch_page(url.as_str()).await {
                Ok(result) => result,
                Err(e) => FeedPage::unparsable(e.to_string(), None),
            };

            if result.is_failed() {
                let reason = result.parse_error.unwrap_or_default();
                if page == 1 {
                    return Err(FetchError::FirstPageUnavailable {
                        url: url.to_string(),
                        reason,
                    });
                }
                break StopReason::Unreachable(reason);
            }

            if result.entries.is_empty() {
                break StopReason::EmptyPage;
            }

            if result.http_status == Some(404) {
                break StopReason::NotFound;
            }

            let before = entries.len();
            for entry in result.entries {
                if seen.insert(entry.link.clone()) {
                    entries.push(entry);
                }
            }
            let new_count = entries.len() - before;
            tracing::info!(
                page,
                new = new_count,
                total = entries.len(),
                "{} new articles (total: {})",
                new_count,
                entries.len()
            );

            if new_count == 0 {
                break StopReason::Duplicates;
            }

            if let Some(max) = self.settings.max_items {
                if entries.len() >= max {
                    entries.truncate(max);
                    break StopReason::LimitReached(max);
                }
            }

            if !self.settings.paginate {
                break StopReason::SinglePage;
            }

            page += 1;
            tokio::time::sleep(self.settings.delay).await;
        };

        tracing::info!(page, reason = %stop_reason, "End of pagination");

        Ok(FetchOutcome {
            entries,
            pages_fetched: page,
            stop_reason,
        })
    }
}

/// Base URL with `paged=<page>` merged into its query.
///
/// Other query pairs keep their order; an existing `paged` value is replaced in place.
pub fn build_paged_url(base: &Url, page: usize) -> Url {
    let page = page.to_string();
    let mut replaced = false;
    let mut pairs: Vec<(String, String)> = base
        .query_pairs()
        .filter_map(|(k, v)| {
            if k == PAGE_PARAM {
                if replaced {
                    return None;
                }
                replaced = true;
                Some((k.into_owned(), page.clone()))
            } else {
                Some((k.into_owned(), v.into_owned()))
            }
        })
        .collect();
    if !replaced {
        pairs.push((PAGE_PARAM.to_string(), page));
    }

    let mut url = base.clone();
    url.query_pairs_mut().clear().extend_pairs(pairs);
    url
}
