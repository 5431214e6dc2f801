//! HTTP feed source implementation
//!
//! Fetches a page with `reqwest` and parses it as RSS, falling back to Atom.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::entities::FeedEntry;
use crate::domain::ports::{FeedPage, FeedSource};
use crate::error::FeedError;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Feed source fetching one page per HTTP GET
pub struct HttpFeedSource {
    http: Client,
}

impl HttpFeedSource {
    pub fn new(timeout: Duration) -> Result<Self, FeedError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch_page(&self, url: &str) -> Result<FeedPage, FeedError> {
        let response = self.http.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        let page = parse_feed(&body, Some(status));
        if let Some(reason) = &page.parse_error {
            tracing::warn!(url, status, "Feed body could not be parsed: {}", reason);
        }
        Ok(page)
    }
}

/// Parse a response body as RSS, then as Atom.
///
/// When neither parser accepts it, the page carries the RSS parser's error.
pub fn parse_feed(body: &[u8], http_status: Option<u16>) -> FeedPage {
    let rss_error = match rss::Channel::read_from(body) {
        Ok(channel) => {
            return FeedPage {
                entries: channel.items().iter().map(rss_entry).collect(),
                parse_error: None,
                http_status,
            }
        }
        Err(e) => e,
    };

    match atom_syndication::Feed::read_from(body) {
        Ok(feed) => FeedPage {
            entries: feed.entries().iter().map(atom_entry).collect(),
            parse_error: None,
            http_status,
        },
        Err(_) => FeedPage::unparsable(rss_error.to_string(), http_status),
    }
}

fn rss_entry(item: &rss::Item) -> FeedEntry {
    let link = item
        .link()
        .or_else(|| item.guid().map(|g| g.value()))
        .unwrap_or_default();
    let published = item.pub_date().map(str::to_string).or_else(|| {
        item.dublin_core_ext()
            .and_then(|dc| dc.dates().first().cloned())
    });

    FeedEntry {
        link: link.to_string(),
        title: item.title().unwrap_or_default().to_string(),
        description: item.description().map(str::to_string),
        summary: item.content().map(str::to_string),
        published,
        categories: item
            .categories()
            .iter()
            .map(|c| c.name().to_string())
            .collect(),
    }
}

fn atom_entry(entry: &atom_syndication::Entry) -> FeedEntry {
    let link = entry
        .links()
        .iter()
        .find(|l| l.rel() == "alternate")
        .or_else(|| entry.links().first())
        .map(|l| l.href().to_string())
        .unwrap_or_else(|| entry.id().to_string());

    FeedEntry {
        link,
        title: entry.title().value.clone(),
        description: entry.summary().map(|s| s.value.clone()),
        summary: entry
            .content()
            .and_then(|c| c.value())
            .map(str::to_string),
        published: entry.published().map(|d| d.to_rfc2822()),
        categories: entry
            .categories()
            .iter()
            .map(|c| c.term().to_string())
            .collect(),
    }
}
