//! Configuration types for pagination runs
//!
//! A run configuration names the endpoint to page through and how: base URL,
//! endpoint profile, request filters, HTTP settings and pagination settings.

use crate::endpoint::EndpointProfile;
use crate::http::{HttpClientConfig, RateLimiterConfig};
use crate::pagination::{PaginationConfig, PartialResultPolicy};
use crate::types::{Filters, JsonValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

// ============================================================================
// Top-Level Run Config
// ============================================================================

/// Complete run configuration loaded from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Base URL of the remote service
    pub base_url: String,

    /// Built-in profile name or path to a profile YAML file
    #[serde(default)]
    pub profile: Option<String>,

    /// Inline endpoint profile (alternative to `profile`)
    #[serde(default)]
    pub endpoint: Option<EndpointProfile>,

    /// Request filters
    #[serde(default)]
    pub filters: Filters,

    /// Extra JSON fields merged into POST bodies
    #[serde(default)]
    pub body: Option<JsonValue>,

    /// Headers sent with every request
    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpSettings,

    /// Pagination settings
    #[serde(default)]
    pub pagination: PaginationSettings,
}

// ============================================================================
// HTTP Settings
// ============================================================================

/// HTTP client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Rate limit; `null` disables limiting
    #[serde(default = "default_rate_limit")]
    pub rate_limit: Option<RateLimiterConfig>,

    /// Custom user agent
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_rate_limit() -> Option<RateLimiterConfig> {
    Some(RateLimiterConfig::default())
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            rate_limit: default_rate_limit(),
            user_agent: None,
        }
    }
}

impl HttpSettings {
    /// Build the HTTP client config for a base URL and default headers
    pub fn client_config(
        &self,
        base_url: &str,
        headers: &BTreeMap<String, String>,
    ) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(base_url)
            .timeout(Duration::from_secs(self.timeout_secs));

        builder = match &self.rate_limit {
            Some(limit) => builder.rate_limit(limit.clone()),
            None => builder.no_rate_limit(),
        };

        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent);
        }

        for (key, value) in headers {
            builder = builder.header(key, value);
        }

        builder.build()
    }
}

// ============================================================================
// Pagination Settings
// ============================================================================

/// Pagination settings as written in a run config
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationSettings {
    /// Cap on the total number of items
    #[serde(default)]
    pub max_items: Option<u64>,

    /// Cursor to resume from
    #[serde(default)]
    pub start_cursor: Option<String>,

    /// Fetch a single page only
    #[serde(default)]
    pub manual: bool,

    /// Handling of mid-stream failures under `max_items`
    #[serde(default)]
    pub partial_results: PartialResultPolicy,

    /// Lower the endpoint's page size cap (never raises it)
    #[serde(default)]
    pub page_size: Option<u32>,
}

impl PaginationSettings {
    /// Apply these settings on top of an endpoint's pagination config
    pub fn apply(&self, mut config: PaginationConfig) -> PaginationConfig {
        if let Some(page_size) = self.page_size {
            config.service_max_page_size = config.service_max_page_size.min(page_size);
        }
        if let Some(cursor) = &self.start_cursor {
            config = config.with_start_cursor(cursor.clone());
        }
        config.max_items = self.max_items;
        config.manual = self.manual;
        config.partial_results = self.partial_results;
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_config_minimal() {
        let yaml = r"
base_url: https://ssm.us-east-1.amazonaws.com
profile: get-inventory
";
        let config: RunConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.profile.as_deref(), Some("get-inventory"));
        assert!(config.endpoint.is_none());
        assert!(config.filters.is_empty());
        assert_eq!(config.http, HttpSettings::default());
        assert_eq!(config.pagination, PaginationSettings::default());
    }

    #[test]
    fn test_run_config_full() {
        let yaml = r#"
base_url: https://ssm.us-east-1.amazonaws.com
profile: get-parameters-by-path
filters:
  Path: ["/app"]
body:
  Recursive: true
http:
  timeout_secs: 5
  rate_limit: null
pagination:
  max_items: 120
  start_cursor: abc
  partial_results: stop_early
"#;
        let config: RunConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.filters["Path"], vec!["/app"]);
        assert_eq!(config.body, Some(serde_json::json!({"Recursive": true})));
        assert_eq!(config.http.timeout_secs, 5);
        assert!(config.http.rate_limit.is_none());
        assert_eq!(config.pagination.max_items, Some(120));
        assert_eq!(
            config.pagination.partial_results,
            PartialResultPolicy::StopEarly
        );
    }

    #[test]
    fn test_client_config_from_settings() {
        let mut headers = BTreeMap::new();
        headers.insert("X-Trace".to_string(), "1".to_string());
        let settings = HttpSettings {
            timeout_secs: 7,
            rate_limit: None,
            user_agent: Some("pager-test".to_string()),
        };

        let config = settings.client_config("https://example.com", &headers);
        assert_eq!(config.base_url.as_deref(), Some("https://example.com"));
        assert_eq!(config.timeout, Duration::from_secs(7));
        assert!(config.rate_limit.is_none());
        assert_eq!(config.user_agent, "pager-test");
        assert_eq!(config.default_headers.get("X-Trace"), Some(&"1".to_string()));
    }

    #[test]
    fn test_pagination_settings_apply() {
        let settings = PaginationSettings {
            max_items: Some(30),
            start_cursor: Some("tok".to_string()),
            manual: true,
            partial_results: PartialResultPolicy::StopEarly,
            page_size: Some(20),
        };
        let config = settings.apply(PaginationConfig::new(50));

        assert_eq!(config.service_max_page_size, 20);
        assert_eq!(config.max_items, Some(30));
        assert_eq!(config.start_cursor.as_deref(), Some("tok"));
        assert!(config.manual);
        assert_eq!(config.partial_results, PartialResultPolicy::StopEarly);
    }

    #[test]
    fn test_page_size_never_raises_cap() {
        let settings = PaginationSettings {
            page_size: Some(500),
            ..Default::default()
        };
        assert_eq!(
            settings.apply(PaginationConfig::new(10)).service_max_page_size,
            10
        );
    }
}
