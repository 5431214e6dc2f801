//! HTTP feed source adapter

mod client;

pub use client::HttpFeedSource;
