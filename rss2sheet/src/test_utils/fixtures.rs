//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture creates a valid value that tests can customize.

use chrono::NaiveDate;

use crate::domain::entities::{fixed_categories, FeedEntry, NormalizedRow};

/// Create a feed entry whose link and title are derived from `index`
pub fn test_entry(index: usize) -> FeedEntry {
    FeedEntry {
        link: format!("https://example.com/articles/{}", index),
        title: format!("Article {}", index),
        description: Some(format!("<p>Summary of <b>article {}</b></p>", index)),
        summary: None,
        published: Some("Wed, 01 Jan 2025 09:00:00 +0000".to_string()),
        categories: vec!["AI".to_string(), "Tools".to_string()],
    }
}

/// Create one entry per index
pub fn test_entries(indices: impl IntoIterator<Item = usize>) -> Vec<FeedEntry> {
    indices.into_iter().map(test_entry).collect()
}

/// Create an entry published at 10:00 UTC on the given day, linked as `articles/<day>`
pub fn dated_entry(year: i32, month: u32, day: u32) -> FeedEntry {
    let published = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(10, 0, 0))
        .expect("valid fixture date")
        .format("%a, %d %b %Y %H:%M:%S +0000")
        .to_string();
    FeedEntry {
        published: Some(published),
        ..test_entry(day as usize)
    }
}

/// Create a normalized row derived from `index`
pub fn test_row(index: usize) -> NormalizedRow {
    NormalizedRow {
        title: format!("Article {}", index),
        description: format!("Summary of article {}", index),
        url: format!("https://example.com/articles/{}", index),
        categories: fixed_categories(["AI", "Tools", "Open Source"]),
        publication_date: "01/01/2025".to_string(),
    }
}
