//! Pagination module
//!
//! Bounded cursor pagination over a remote list operation.
//!
//! # Overview
//!
//! A [`PageFetcher`] performs one remote call per page. The [`Paginator`]
//! drives it: each request asks for at most the service's page size cap,
//! shrunk to whatever remains of an optional `max_items` budget. A traversal
//! stops when:
//!
//! - the remote returns no continuation cursor
//! - the `max_items` budget is used up
//! - a bounded request returns an empty page
//! - manual mode has fetched its single page
//!
//! Fetch errors propagate unchanged, except that a bounded traversal which
//! already produced items may keep them under
//! [`PartialResultPolicy::StopEarly`].

mod fetcher;
mod paginator;
mod types;

pub use fetcher::{fetch_fn, FnFetcher, PageFetcher};
pub use paginator::{paginate, PaginationOutcome, Paginator};
pub use types::{
    normalize_cursor, PageRequest, PageResult, PaginationConfig, PaginationPhase,
    PaginationState, PartialResultPolicy, StopReason,
};
