//! Publication date window
//!
//! Inclusive `[from, to]` bounds used to filter articles by publication date.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};

use crate::error::ConfigError;

/// Inclusive date window. `from` starts at 00:00:00 UTC, `to` ends at 23:59:59 UTC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateWindow {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl DateWindow {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<Self, ConfigError> {
        if let (Some(f), Some(t)) = (from, to) {
            if f > t {
                return Err(ConfigError::InvertedWindow {
                    from: f.format("%d/%m/%Y").to_string(),
                    to: t.format("%d/%m/%Y").to_string(),
                });
            }
        }
        Ok(Self { from, to })
    }

    /// Window with no bounds; nothing is filtered
    #[cfg(test)]
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn is_bounded(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    fn lower(&self) -> Option<DateTime<Utc>> {
        self.from
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| Utc.from_utc_datetime(&dt))
    }

    fn upper(&self) -> Option<DateTime<Utc>> {
        self.to
            .and_then(|d| d.and_hms_opt(23, 59, 59))
            .map(|dt| Utc.from_utc_datetime(&dt))
    }

    /// Whether a parsed publication timestamp falls inside the window
    pub fn contains(&self, published: &DateTime<FixedOffset>) -> bool {
        let at = published.with_timezone(&Utc);
        if self.lower().is_some_and(|lower| at < lower) {
            return false;
        }
        if self.upper().is_some_and(|upper| at > upper) {
            return false;
        }
        true
    }
}

impl std::fmt::Display for DateWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let show = |d: Option<NaiveDate>| {
            d.map(|d| d.format("%d/%m/%Y").to_string())
                .unwrap_or_else(|| "…".to_string())
        };
        write!(f, "{} to {}", show(self.from), show(self.to))
    }
}

/// Parse a user-supplied date in `DD/MM/YYYY` or `YYYY-MM-DD` form
pub fn parse_user_date(input: &str) -> Result<NaiveDate, ConfigError> {
    ["%d/%m/%Y", "%Y-%m-%d"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(input.trim(), fmt).ok())
        .ok_or_else(|| ConfigError::InvalidDate(input.to_string()))
}
