//! CLI module
//!
//! Command-line interface for paging through remote list operations.
//!
//! # Commands
//!
//! - `profiles` - List built-in endpoint profiles
//! - `show` - Print an endpoint profile
//! - `validate` - Check a run configuration
//! - `fetch` - Page through an endpoint and print its items

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::{FetchOverrides, Runner};
