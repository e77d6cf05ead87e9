// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Cursor Pager
//!
//! Bounded cursor pagination over remote list operations.
//!
//! A list operation returns one page of items plus an opaque continuation
//! cursor. This crate drives such an operation page by page, never asking for
//! more than the service allows per page and never returning more than the
//! caller's `max_items` budget.
//!
//! ## Features
//!
//! - **Bounded traversal**: page size shrinks to the remaining budget
//! - **Lazy streaming**: the next page is fetched only when needed
//! - **Manual mode**: fetch one page and hand back the cursor to resume
//! - **HTTP endpoint profiles**: YAML descriptions of JSON list APIs, with
//!   built-in profiles for the AWS SSM list operations
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cursor_pager::{fetch_fn, paginate, PageResult, PaginationConfig};
//!
//! #[tokio::main]
//! async fn main() -> cursor_pager::Result<()> {
//!     let fetcher = fetch_fn(|request| async move {
//!         // Call the remote service with request.cursor / request.page_size
//!         Ok(PageResult::last(vec![1, 2, 3]))
//!     });
//!
//!     let config = PaginationConfig::new(50).with_max_items(120);
//!     let outcome = paginate(fetcher, config).await?;
//!     println!("{} items, stopped: {}", outcome.len(), outcome.stop_reason);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                          CLI                              │
//! │      profiles   show   validate   fetch                   │
//! └───────────────────────────────────────────────────────────┘
//!                              │
//! ┌──────────────┬─────────────┴──────────┬───────────────────┐
//! │   Loader     │      Paginator         │   Endpoint        │
//! ├──────────────┼────────────────────────┼───────────────────┤
//! │ Profiles     │ Budget / page size     │ Request building  │
//! │ Run configs  │ Stop rules             │ Item extraction   │
//! │ Validation   │ Stream / collect       │ HTTP + rate limit │
//! └──────────────┴────────────────────────┴───────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Bounded cursor pagination
pub mod pagination;

/// HTTP client with rate limiting
pub mod http;

/// HTTP list endpoints described by profiles
pub mod endpoint;

/// Run configuration
pub mod config;

/// YAML loader for profiles and run configs
pub mod loader;

/// Built-in endpoint profiles
pub mod profiles;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::RunConfig;
pub use endpoint::{EndpointProfile, HttpPageFetcher};
pub use loader::{load_profile, load_run_config, resolve_profile};
pub use pagination::{
    fetch_fn, paginate, PageFetcher, PageRequest, PageResult, PaginationConfig,
    PaginationOutcome, Paginator, PartialResultPolicy, StopReason,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
