//! YAML Loader module
//!
//! Parse endpoint profiles and run configs from YAML.
//!
//! # Overview
//!
//! The loader module provides:
//! - Profile lookup by built-in name or file path
//! - Run config loading
//! - Validation of both

mod parser;

pub use parser::{
    load_profile, load_profile_from_str, load_run_config, load_run_config_from_str,
    resolve_profile, validate_profile,
};

#[cfg(test)]
mod tests;
