//! Domain entities
//!
//! Pure domain models: the raw feed entry, the normalized row
//! and the publication date window.

pub mod entry;
pub mod row;
pub mod window;

pub use entry::FeedEntry;
pub use row::{fixed_categories, NormalizedRow, MAX_CATEGORIES};
pub use window::{parse_user_date, DateWindow};
