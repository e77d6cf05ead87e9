//! HTTP page fetcher
//!
//! Calls a list endpoint described by an [`EndpointProfile`] and decodes
//! each JSON response into a page of items plus a continuation cursor.

use super::types::EndpointProfile;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::pagination::{PageFetcher, PageRequest, PageResult, PaginationConfig};
use crate::types::{Filters, JsonObject, JsonValue};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Fetches pages from a JSON list endpoint over HTTP
#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    client: Arc<HttpClient>,
    profile: EndpointProfile,
    filters: Filters,
    body: Option<JsonObject>,
}

impl HttpPageFetcher {
    /// Create a fetcher for an endpoint
    pub fn new(client: Arc<HttpClient>, profile: EndpointProfile) -> Self {
        Self {
            client,
            profile,
            filters: Filters::new(),
            body: None,
        }
    }

    /// Set request filters
    #[must_use]
    pub fn with_filters(mut self, filters: Filters) -> Self {
        self.filters = filters;
        self
    }

    /// Set extra JSON fields for POST bodies; must be an object
    pub fn with_body(mut self, body: JsonValue) -> Result<Self> {
        match body {
            JsonValue::Object(object) => {
                self.body = Some(object);
                Ok(self)
            }
            JsonValue::Null => {
                self.body = None;
                Ok(self)
            }
            _ => Err(Error::invalid_value("body", "must be a JSON object")),
        }
    }

    /// Get the endpoint profile
    pub fn profile(&self) -> &EndpointProfile {
        &self.profile
    }

    /// Get the request filters
    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    /// Pagination config capped at the endpoint's page size
    pub fn pagination_config(&self) -> PaginationConfig {
        self.profile.pagination_config()
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    type Item = JsonValue;

    async fn fetch_page(&self, request: PageRequest) -> Result<PageResult<JsonValue>> {
        let config = self
            .profile
            .build_request(&request, &self.filters, self.body.as_ref());

        let response: JsonValue = self
            .client
            .request_json(self.profile.method.into(), &self.profile.path, config)
            .await?;

        let items = extract_items(&response, &self.profile.items_path)?;
        let next_cursor = extract_cursor(&response, &self.profile.cursor_path);

        debug!(
            endpoint = %self.profile.name,
            items = items.len(),
            has_more = next_cursor.is_some(),
            "Decoded page"
        );

        Ok(PageResult::new(items, next_cursor))
    }
}

// ============================================================================
// Response Extraction
// ============================================================================

/// Extract the item list from a response.
///
/// Dotted paths (`Parameters`, `$.data.items`) are walked directly; paths
/// with wildcards, filters or indexes go through JSONPath. A missing or null
/// value is an empty page and a non-array value is a single item.
pub fn extract_items(body: &JsonValue, path: &str) -> Result<Vec<JsonValue>> {
    if is_jsonpath_expression(path) {
        return extract_with_jsonpath(body, path);
    }

    let path = path.strip_prefix("$.").unwrap_or(path);
    let path = path.strip_prefix('$').unwrap_or(path);
    let mut current = body;
    if !path.is_empty() {
        for part in path.split('.') {
            match current {
                JsonValue::Object(map) => match map.get(part) {
                    Some(next) => current = next,
                    None => return Ok(Vec::new()),
                },
                JsonValue::Null => return Ok(Vec::new()),
                _ => {
                    return Err(Error::item_extraction(
                        path,
                        format!("expected an object at '{part}'"),
                    ))
                }
            }
        }
    }

    match current {
        JsonValue::Array(items) => Ok(items.clone()),
        JsonValue::Null => Ok(Vec::new()),
        other => Ok(vec![other.clone()]),
    }
}

/// Extract the continuation cursor from a response
pub fn extract_cursor(body: &JsonValue, path: &str) -> Option<String> {
    let path = path.strip_prefix("$.").unwrap_or(path);

    let mut current = body;
    for part in path.split('.') {
        match current {
            JsonValue::Object(map) => {
                current = map.get(part)?;
            }
            _ => return None,
        }
    }

    match current {
        JsonValue::String(s) if !s.is_empty() => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn is_jsonpath_expression(path: &str) -> bool {
    path.contains('[') || path.contains('*') || path.contains("..")
}

/// Extract items using jsonpath-rust
fn extract_with_jsonpath(body: &JsonValue, path: &str) -> Result<Vec<JsonValue>> {
    use jsonpath_rust::JsonPath;

    let jp = JsonPath::try_from(path)
        .map_err(|e| Error::json_path(format!("Invalid JSONPath: {e}")))?;

    match jp.find(body) {
        JsonValue::Array(arr) => Ok(arr),
        JsonValue::Null => Ok(vec![]),
        other => Ok(vec![other]),
    }
}
