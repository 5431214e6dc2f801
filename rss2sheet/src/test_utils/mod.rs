//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Mocks are hand-written in-memory implementations of the port traits:
//! they return canned pages keyed by URL and record what was written,
//! so tests can assert on requests and output without network or disk.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
