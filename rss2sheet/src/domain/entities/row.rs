//! Normalized row domain entity
//!
//! The fixed-shape record written to the spreadsheet, one per article.

/// Number of category columns in the output table
pub const MAX_CATEGORIES: usize = 6;

/// A normalized article row. Built once, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRow {
    pub title: String,
    /// Plain text: markup stripped, entities decoded, whitespace collapsed
    pub description: String,
    pub url: String,
    pub categories: [String; MAX_CATEGORIES],
    /// `DD/MM/YYYY`, the raw feed value if unparsable, or empty
    pub publication_date: String,
}

/// Keep the first `MAX_CATEGORIES` labels and pad the rest with empty strings
pub fn fixed_categories<I, S>(labels: I) -> [String; MAX_CATEGORIES]
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out: [String; MAX_CATEGORIES] = Default::default();
    for (slot, label) in out.iter_mut().zip(labels) {
        *slot = label.into();
    }
    out
}
