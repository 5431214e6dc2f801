//! Entry normalizer
//!
//! Turns raw feed entries into fixed-shape rows and applies the
//! publication date window.

use std::borrow::Cow;

use chrono::{DateTime, FixedOffset};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::domain::entities::{fixed_categories, DateWindow, FeedEntry, NormalizedRow};

/// RSS 2.0 publication date layout, once the leading weekday is dropped
const FEED_DATE_FORMAT: &str = "%d %b %Y %H:%M:%S %z";

/// Output format for the publication date column
const ROW_DATE_FORMAT: &str = "%d/%m/%Y";

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("valid tag regex"));
static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));
static WEEKDAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]+,\s*").expect("valid weekday regex"));
/// Entities browsers also accept without the closing semicolon
static LEGACY_ENTITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(?:amp|lt|gt|quot|nbsp|copy|reg|AMP|LT|GT|QUOT)").expect("valid entity regex")
});

/// Result of normalizing a batch of entries
#[derive(Debug, Clone, Default)]
pub struct Normalized {
    pub rows: Vec<NormalizedRow>,
    /// Entries dropped by the date window
    pub skipped: usize,
}

/// Normalize entries in order, dropping those dated outside `window`.
///
/// Entries whose date cannot be parsed are always kept.
pub fn normalize_entries(entries: &[FeedEntry], window: &DateWindow) -> Normalized {
    let mut out = Normalized::default();

    for entry in entries {
        if window.is_bounded() {
            let published = entry.published.as_deref().and_then(parse_feed_date);
            if published.is_some_and(|p| !window.contains(&p)) {
                out.skipped += 1;
                continue;
            }
        }
        out.rows.push(normalize_entry(entry));
    }

    if out.skipped > 0 {
        tracing::info!(
            skipped = out.skipped,
            "{} articles outside the date range ({}) were ignored",
            out.skipped,
            window
        );
    }

    out
}

/// Map one entry onto a row, without any filtering
pub fn normalize_entry(entry: &FeedEntry) -> NormalizedRow {
    NormalizedRow {
        title: entry.title.clone(),
        description: strip_html(entry.body()),
        url: entry.link.clone(),
        categories: fixed_categories(entry.categories.iter().cloned()),
        publication_date: format_feed_date(entry.published.as_deref()),
    }
}

/// Strip markup tags, decode HTML entities and collapse whitespace
pub fn strip_html(html: &str) -> String {
    let without_tags = TAG_RE.replace_all(html, "");
    let terminated = terminate_legacy_entities(&without_tags);
    let decoded = html_escape::decode_html_entities(&terminated);
    WHITESPACE_RE.replace_all(&decoded, " ").trim().to_string()
}

/// Add the missing `;` to `&amp`-style entities so they decode like `&amp;`.
///
/// A name directly followed by a letter or digit is left alone (`&ample`).
fn terminate_legacy_entities(text: &str) -> Cow<'_, str> {
    LEGACY_ENTITY_RE.replace_all(text, |caps: &Captures| {
        let entity = &caps[0];
        let end = caps.get(0).map_or(text.len(), |m| m.end());
        match text[end..].chars().next() {
            Some(c) if c == ';' || c.is_ascii_alphanumeric() => entity.to_string(),
            _ => format!("{};", entity),
        }
    })
}

/// Parse a feed publication timestamp.
///
/// The leading weekday is ignored, so a feed that gets it wrong still dates
/// its entries. Tries the fixed RSS layout first, then general RFC 2822
/// (named zones such as `GMT`), then RFC 3339 as used by `dc:date`.
pub fn parse_feed_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    let without_weekday = WEEKDAY_RE.replace(raw, "");
    DateTime::parse_from_str(&without_weekday, FEED_DATE_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc2822(&without_weekday))
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
}

/// `DD/MM/YYYY` in the timestamp's own offset, the raw text if unparsable,
/// or an empty string when there is no date.
pub fn format_feed_date(raw: Option<&str>) -> String {
    match raw {
        None => String::new(),
        Some(raw) => match parse_feed_date(raw) {
            Some(dt) => dt.format(ROW_DATE_FORMAT).to_string(),
            None => {
                tracing::debug!(raw, "unparsable publication date kept verbatim");
                raw.to_string()
            }
        },
    }
}
