//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod http;
pub mod ods;
pub mod xlsx;

pub use http::HttpFeedSource;
pub use ods::OdsSheetWriter;
pub use xlsx::XlsxSheetWriter;
