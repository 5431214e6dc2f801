//! Application layer
//!
//! Contains the export use case and the services it orchestrates.
//! Services coordinate between domain entities and ports.

pub mod export_service;
pub mod fetch_service;
pub mod normalizer;

pub use export_service::ExportService;
pub use fetch_service::FetchSettings;
