//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod feed_source;
pub mod sheet_writer;

pub use feed_source::{FeedPage, FeedSource};
pub use sheet_writer::{SheetReport, SheetWriter};
