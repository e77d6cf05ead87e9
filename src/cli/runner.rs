//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::RunConfig;
use crate::endpoint::{EndpointProfile, HttpPageFetcher};
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::loader::{load_profile, load_run_config, resolve_profile};
use crate::pagination::{PartialResultPolicy, Paginator};
use crate::profiles;
use crate::types::push_filter;
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Command-line values that override a run config for one `fetch`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchOverrides {
    /// Item budget
    pub max_items: Option<u64>,
    /// Cursor to resume from
    pub start_cursor: Option<String>,
    /// Single-page mode
    pub manual: bool,
    /// Switch to [`PartialResultPolicy::StopEarly`]
    pub stop_early: bool,
    /// Replacement base URL
    pub base_url: Option<String>,
    /// Extra `KEY=VALUE` filters, appended to configured ones
    pub filters: Vec<String>,
}

impl FetchOverrides {
    /// Apply the overrides to a loaded run config
    pub fn apply(&self, config: &mut RunConfig) -> Result<()> {
        if let Some(max_items) = self.max_items {
            if max_items == 0 {
                return Err(Error::invalid_value("max-items", "must be at least 1"));
            }
            config.pagination.max_items = Some(max_items);
        }
        if let Some(cursor) = &self.start_cursor {
            config.pagination.start_cursor = Some(cursor.clone());
        }
        if self.manual {
            config.pagination.manual = true;
        }
        if self.stop_early {
            config.pagination.partial_results = PartialResultPolicy::StopEarly;
        }
        if let Some(base_url) = &self.base_url {
            url::Url::parse(base_url)?;
            config.base_url.clone_from(base_url);
        }
        for pair in &self.filters {
            push_filter(&mut config.filters, pair).ok_or_else(|| {
                Error::invalid_value("filter", format!("expected KEY=VALUE, got '{pair}'"))
            })?;
        }
        Ok(())
    }
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Profiles => self.list_profiles(),
            Commands::Show { profile } => self.show(profile),
            Commands::Validate { config } => self.validate(config),
            Commands::Fetch {
                config,
                max_items,
                start_cursor,
                manual,
                stop_early,
                base_url,
                filters,
            } => {
                let overrides = FetchOverrides {
                    max_items: *max_items,
                    start_cursor: start_cursor.clone(),
                    manual: *manual,
                    stop_early: *stop_early,
                    base_url: base_url.clone(),
                    filters: filters.clone(),
                };
                self.fetch(config, &overrides).await
            }
        }
    }

    /// List built-in profiles
    fn list_profiles(&self) -> Result<()> {
        let mut entries = Vec::new();
        for name in profiles::list_builtin() {
            let profile = load_profile(name)?;
            entries.push(json!({
                "name": profile.name,
                "operation": profile.operation,
                "description": profile.description,
                "max_page_size": profile.max_page_size,
            }));
        }

        self.output_message(&json!({
            "type": "PROFILES",
            "profiles": entries
        }));

        Ok(())
    }

    /// Print a profile as YAML
    fn show(&self, name: &str) -> Result<()> {
        let profile = load_profile(name)?;
        print!("{}", serde_yaml::to_string(&profile)?);
        Ok(())
    }

    /// Validate a run config
    fn validate(&self, path: &Path) -> Result<()> {
        let config = load_run_config(path)?;
        let profile = resolve_profile(&config)?;
        let pagination = config.pagination.apply(profile.pagination_config());
        pagination.validate()?;

        self.output_message(&json!({
            "type": "LOG",
            "log": {
                "level": "INFO",
                "message": format!(
                    "Config is valid: profile '{}' at {} (page size cap {})",
                    profile.name,
                    config.base_url,
                    pagination.service_max_page_size
                )
            }
        }));

        Ok(())
    }

    /// Page through the configured endpoint
    async fn fetch(&self, path: &Path, overrides: &FetchOverrides) -> Result<()> {
        let mut config = load_run_config(path)?;
        overrides.apply(&mut config)?;

        let profile = resolve_profile(&config)?;
        let pagination = config.pagination.apply(profile.pagination_config());
        let fetcher = Self::build_fetcher(&config, profile)?;
        let paginator = Paginator::new(fetcher, pagination);

        let start = Instant::now();

        if paginator.config().manual {
            let page = paginator.fetch_single().await?;
            for item in &page.items {
                self.output_item(item);
            }
            info!(
                items = page.items.len(),
                next_cursor = ?page.next_cursor,
                "Fetched single page"
            );
            self.output_summary(&json!({
                "type": "SUMMARY",
                "pages": 1,
                "items": page.items.len(),
                "stop_reason": "single_page",
                "next_cursor": page.next_cursor,
            }));
            return Ok(());
        }

        let outcome = paginator.collect().await?;
        for item in &outcome.items {
            self.output_item(item);
        }

        info!(
            pages = outcome.pages_fetched,
            items = outcome.len(),
            stop_reason = %outcome.stop_reason,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Pagination finished"
        );

        self.output_summary(&json!({
            "type": "SUMMARY",
            "pages": outcome.pages_fetched,
            "items": outcome.len(),
            "stop_reason": outcome.stop_reason.to_string(),
            "next_cursor": outcome.next_cursor,
            "error": outcome.interrupted_by.as_ref().map(ToString::to_string),
        }));

        Ok(())
    }

    /// Build the HTTP fetcher for a run config
    fn build_fetcher(config: &RunConfig, profile: EndpointProfile) -> Result<HttpPageFetcher> {
        let client_config = config.http.client_config(&config.base_url, &config.headers);
        let client = Arc::new(HttpClient::with_config(client_config)?);

        let mut fetcher =
            HttpPageFetcher::new(client, profile).with_filters(config.filters.clone());
        if let Some(body) = &config.body {
            fetcher = fetcher.with_body(body.clone())?;
        }
        Ok(fetcher)
    }

    fn output_message(&self, msg: &Value) {
        println!("{}", self.render(msg));
    }

    fn output_item(&self, item: &Value) {
        println!("{}", self.render(item));
    }

    fn output_summary(&self, msg: &Value) {
        eprintln!("{}", self.render(msg));
    }

    fn render(&self, msg: &Value) -> String {
        match self.cli.format {
            OutputFormat::Json => serde_json::to_string(msg).unwrap_or_default(),
            OutputFormat::Pretty => serde_json::to_string_pretty(msg).unwrap_or_default(),
        }
    }
}
