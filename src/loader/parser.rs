//! YAML parser for endpoint profiles and run configs
//!
//! Parses and validates profile and run config YAML files.
//! Profiles can be referenced by built-in name or by file path.

use crate::config::RunConfig;
use crate::endpoint::EndpointProfile;
use crate::error::{Error, Result, ResultExt};
use crate::profiles;
use std::fs;
use std::path::Path;

/// Load an endpoint profile from a built-in name or a file path
///
/// Bare names without path separators or a YAML extension are looked up in
/// the built-in registry first.
///
/// # Examples
///
/// ```ignore
/// // Built-in profile by name
/// let profile = load_profile("get-inventory")?;
///
/// // Custom profile from file
/// let profile = load_profile("./my-endpoint.yaml")?;
/// ```
pub fn load_profile(path: impl AsRef<Path>) -> Result<EndpointProfile> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy();

    if !path_str.contains('/')
        && !path_str.contains('\\')
        && !path_str.ends_with(".yaml")
        && !path_str.ends_with(".yml")
    {
        if let Some(yaml) = profiles::get_builtin(&path_str) {
            return load_profile_from_str(yaml);
        }
    }

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            let builtin_list = profiles::list_builtin().join(", ");
            Error::config(format!(
                "Profile '{}' not found. Built-in profiles: {}. Or provide a path to a YAML file.",
                path.display(),
                builtin_list
            ))
        } else {
            Error::config(format!(
                "Failed to read profile file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;
    load_profile_from_str(&content)
}

/// Load an endpoint profile from a YAML string
pub fn load_profile_from_str(yaml: &str) -> Result<EndpointProfile> {
    let profile: EndpointProfile = serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse profile YAML: {e}")))?;

    validate_profile(&profile)?;
    Ok(profile)
}

/// Load a run config from a file
pub fn load_run_config(path: impl AsRef<Path>) -> Result<RunConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
    load_run_config_from_str(&content)
}

/// Load a run config from a YAML string
pub fn load_run_config_from_str(yaml: &str) -> Result<RunConfig> {
    let config: RunConfig = serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse config YAML: {e}")))?;

    validate_run_config(&config)?;
    Ok(config)
}

/// Resolve the endpoint profile a run config points at
pub fn resolve_profile(config: &RunConfig) -> Result<EndpointProfile> {
    match (&config.profile, &config.endpoint) {
        (Some(name), None) => load_profile(name),
        (None, Some(endpoint)) => {
            validate_profile(endpoint)?;
            Ok(endpoint.clone())
        }
        (Some(_), Some(_)) => Err(Error::config(
            "Config must set either 'profile' or 'endpoint', not both",
        )),
        (None, None) => Err(Error::missing_field("profile")),
    }
}

/// Validate an endpoint profile
pub fn validate_profile(profile: &EndpointProfile) -> Result<()> {
    if profile.name.is_empty() {
        return Err(Error::config("Profile name cannot be empty"));
    }

    if profile.max_page_size == 0 {
        return Err(Error::invalid_value(
            "max_page_size",
            format!("profile '{}' must allow at least 1 item per page", profile.name),
        ));
    }

    let required = [
        ("cursor_param", &profile.cursor_param),
        ("page_size_param", &profile.page_size_param),
        ("items_path", &profile.items_path),
        ("cursor_path", &profile.cursor_path),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(Error::invalid_value(
                field,
                format!("profile '{}' must not leave it empty", profile.name),
            ));
        }
    }

    Ok(())
}

/// Validate a run config
fn validate_run_config(config: &RunConfig) -> Result<()> {
    if config.base_url.trim().is_empty() {
        return Err(Error::missing_field("base_url"));
    }
    url::Url::parse(&config.base_url)?;

    match (&config.profile, &config.endpoint) {
        (Some(_), Some(_)) => {
            return Err(Error::config(
                "Config must set either 'profile' or 'endpoint', not both",
            ))
        }
        (None, None) => return Err(Error::missing_field("profile")),
        (None, Some(endpoint)) => validate_profile(endpoint)?,
        (Some(_), None) => {}
    }

    if config.pagination.max_items == Some(0) {
        return Err(Error::invalid_value(
            "pagination.max_items",
            "must be at least 1",
        ));
    }
    if config.pagination.page_size == Some(0) {
        return Err(Error::invalid_value(
            "pagination.page_size",
            "must be at least 1",
        ));
    }

    if let Some(body) = &config.body {
        if !body.is_object() && !body.is_null() {
            return Err(Error::invalid_value("body", "must be a mapping"));
        }
    }

    for (key, values) in &config.filters {
        if values.is_empty() {
            return Err(Error::invalid_value(
                format!("filters.{key}"),
                "must have at least one value",
            ));
        }
    }

    Ok(())
}
