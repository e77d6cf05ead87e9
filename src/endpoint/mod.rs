//! Endpoint module
//!
//! Binds the abstract page request to a concrete list endpoint.
//!
//! # Overview
//!
//! The endpoint module provides:
//! - `EndpointProfile` - paging field names, page size cap, response paths
//! - `HttpPageFetcher` - a `PageFetcher` that calls the endpoint over HTTP
//! - Response extraction helpers for items and cursors

mod fetcher;
mod types;

pub use fetcher::{extract_cursor, extract_items, HttpPageFetcher};
pub use types::EndpointProfile;
