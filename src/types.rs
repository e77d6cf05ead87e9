//! Common types used throughout cursor-pager
//!
//! This module contains shared type definitions and type aliases
//! used across multiple modules.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Request filters: each key maps to one or more values.
///
/// Ordered so that requests built from the same filters are byte-identical.
pub type Filters = BTreeMap<String, Vec<String>>;

/// Parse a `KEY=VALUE` pair and append it to a filter map.
///
/// Repeating a key appends another value; a value containing `=` keeps
/// everything after the first separator.
pub fn push_filter(filters: &mut Filters, pair: &str) -> Option<()> {
    let (key, value) = pair.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    filters
        .entry(key.to_string())
        .or_default()
        .push(value.to_string());
    Some(())
}

// ============================================================================
// HTTP Types
// ============================================================================

/// HTTP method used by a list endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    GET,
    POST,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::GET => reqwest::Method::GET,
            Method::POST => reqwest::Method::POST,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::GET => f.write_str("GET"),
            Method::POST => f.write_str("POST"),
        }
    }
}
