//! Feed entry domain entity
//!
//! A single item as reported by a feed source, before normalization.

/// One raw feed item, read-only for the duration of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedEntry {
    /// Link to the article; doubles as the de-duplication key
    pub link: String,
    pub title: String,
    /// RSS `<description>` / Atom `<summary>`
    pub description: Option<String>,
    /// Secondary body text (RSS `content:encoded`, Atom `<content>`)
    pub summary: Option<String>,
    /// Raw publication timestamp, as found in the feed
    pub published: Option<String>,
    /// Category labels in source order, verbatim
    pub categories: Vec<String>,
}

impl FeedEntry {
    /// Body text to use for the row: the description unless it is empty
    pub fn body(&self) -> &str {
        match self.description.as_deref() {
            Some(d) if !d.is_empty() => d,
            _ => self.summary.as_deref().unwrap_or_default(),
        }
    }
}
