//! Endpoint profile types
//!
//! A profile describes how one remote list operation spells its paging
//! fields and how large a page it accepts.

use crate::http::RequestConfig;
use crate::pagination::{PageRequest, PaginationConfig};
use crate::types::{Filters, JsonObject, JsonValue, Method};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Declarative description of a cursor-paginated list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointProfile {
    /// Unique profile name (e.g., "get-parameters-by-path")
    pub name: String,

    /// Remote operation name (e.g., "GetParametersByPath")
    #[serde(default)]
    pub operation: Option<String>,

    /// Human-readable description
    #[serde(default)]
    pub description: Option<String>,

    /// HTTP method; GET sends paging fields as query parameters, POST as a JSON body
    #[serde(default)]
    pub method: Method,

    /// Path appended to the base URL
    #[serde(default)]
    pub path: String,

    /// Largest page the service accepts
    pub max_page_size: u32,

    /// Request field carrying the cursor
    #[serde(default = "default_cursor_param")]
    pub cursor_param: String,

    /// Request field carrying the page size
    #[serde(default = "default_page_size_param")]
    pub page_size_param: String,

    /// Path to the item array in the response
    pub items_path: String,

    /// Path to the next cursor in the response
    #[serde(default = "default_cursor_path")]
    pub cursor_path: String,

    /// Static headers sent with every request
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

fn default_cursor_param() -> String {
    "NextToken".to_string()
}

fn default_page_size_param() -> String {
    "MaxResults".to_string()
}

fn default_cursor_path() -> String {
    "NextToken".to_string()
}

impl EndpointProfile {
    /// Create a profile with the conventional `NextToken`/`MaxResults` fields
    pub fn new(name: impl Into<String>, max_page_size: u32, items_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            operation: None,
            description: None,
            method: Method::default(),
            path: String::new(),
            max_page_size,
            cursor_param: default_cursor_param(),
            page_size_param: default_page_size_param(),
            items_path: items_path.into(),
            cursor_path: default_cursor_path(),
            headers: BTreeMap::new(),
        }
    }

    /// Set the HTTP method
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Set the request path
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Add a static header
    #[must_use]
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Pagination config capped at this endpoint's page size
    pub fn pagination_config(&self) -> PaginationConfig {
        PaginationConfig::new(self.max_page_size)
    }

    /// Build the HTTP request for one page.
    ///
    /// `body` is merged into POST bodies before filters and paging fields,
    /// so those win on key collisions.
    pub fn build_request(
        &self,
        page: &PageRequest,
        filters: &Filters,
        body: Option<&JsonObject>,
    ) -> RequestConfig {
        let mut config = RequestConfig::new();
        for (key, value) in &self.headers {
            config = config.header(key, value);
        }

        match self.method {
            Method::GET => {
                for (key, values) in filters {
                    for value in values {
                        config = config.query(key, value);
                    }
                }
                config = config.query(&self.page_size_param, page.page_size.to_string());
                if let Some(cursor) = &page.cursor {
                    config = config.query(&self.cursor_param, cursor);
                }
                config
            }
            Method::POST => {
                let mut object = body.cloned().unwrap_or_default();
                for (key, values) in filters {
                    object.insert(key.clone(), filter_value(values));
                }
                object.insert(self.page_size_param.clone(), page.page_size.into());
                if let Some(cursor) = &page.cursor {
                    object.insert(self.cursor_param.clone(), cursor.clone().into());
                }
                config.json(JsonValue::Object(object))
            }
        }
    }
}

/// A single filter value is sent as a string, several as an array
fn filter_value(values: &[String]) -> JsonValue {
    match values {
        [single] => JsonValue::String(single.clone()),
        many => JsonValue::Array(many.iter().cloned().map(JsonValue::String).collect()),
    }
}
