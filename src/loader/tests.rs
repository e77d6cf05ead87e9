//! Tests for the loader module

use super::*;
use crate::error::Error;
use crate::profiles;
use crate::types::Method;
use std::io::Write;
use tempfile::NamedTempFile;
use test_case::test_case;

const CUSTOM_PROFILE: &str = r"
name: list-widgets
operation: ListWidgets
method: GET
path: /widgets
max_page_size: 25
cursor_param: cursor
page_size_param: limit
items_path: data.widgets
cursor_path: meta.next_cursor
";

// ============================================================================
// Profile Loading
// ============================================================================

#[test]
fn test_every_builtin_profile_parses() {
    for name in profiles::list_builtin() {
        let profile = load_profile(name).unwrap();
        assert_eq!(profile.name, name);
        assert_eq!(profile.method, Method::POST);
        assert!(profile.headers.contains_key("X-Amz-Target"));
    }
}

#[test_case("get-parameters-by-path", 10, "Parameters")]
#[test_case("get-inventory", 50, "Entities")]
#[test_case("get-inventory-schema", 200, "Schemas")]
#[test_case("list-inventory-entries", 50, "Entries")]
#[test_case("list-command-invocations", 50, "CommandInvocations")]
fn test_builtin_page_size_caps(name: &str, cap: u32, items_path: &str) {
    let profile = load_profile(name).unwrap();
    assert_eq!(profile.max_page_size, cap);
    assert_eq!(profile.items_path, items_path);
}

#[test]
fn test_load_profile_from_str() {
    let profile = load_profile_from_str(CUSTOM_PROFILE).unwrap();
    assert_eq!(profile.name, "list-widgets");
    assert_eq!(profile.path, "/widgets");
    assert_eq!(profile.cursor_param, "cursor");
    assert_eq!(profile.cursor_path, "meta.next_cursor");
}

#[test]
fn test_load_profile_from_file() {
    let mut file = NamedTempFile::with_suffix(".yaml").unwrap();
    file.write_all(CUSTOM_PROFILE.as_bytes()).unwrap();

    let profile = load_profile(file.path()).unwrap();
    assert_eq!(profile.max_page_size, 25);
}

#[test]
fn test_missing_profile_lists_builtins() {
    let err = load_profile("no-such-profile").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("not found"));
    assert!(message.contains("get-inventory"));
}

#[test]
fn test_profile_zero_page_size_rejected() {
    let yaml = "name: broken\nmax_page_size: 0\nitems_path: Items\n";
    let err = load_profile_from_str(yaml).unwrap_err();
    assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "max_page_size"));
}

#[test]
fn test_profile_empty_items_path_rejected() {
    let yaml = "name: broken\nmax_page_size: 10\nitems_path: ''\n";
    let err = load_profile_from_str(yaml).unwrap_err();
    assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "items_path"));
}

#[test]
fn test_profile_invalid_yaml() {
    assert!(matches!(
        load_profile_from_str("name: [unclosed"),
        Err(Error::Config { .. })
    ));
}

// ============================================================================
// Run Config Loading
// ============================================================================

#[test]
fn test_load_run_config_with_builtin_profile() {
    let yaml = r#"
base_url: https://ssm.eu-west-1.amazonaws.com
profile: get-parameters-by-path
filters:
  Path: ["/app"]
pagination:
  max_items: 25
"#;
    let config = load_run_config_from_str(yaml).unwrap();
    let profile = resolve_profile(&config).unwrap();

    assert_eq!(profile.max_page_size, 10);
    let pagination = config.pagination.apply(profile.pagination_config());
    assert_eq!(pagination.max_items, Some(25));
}

#[test]
fn test_load_run_config_with_inline_endpoint() {
    let yaml = format!(
        "base_url: https://api.example.com\nendpoint:\n{}",
        CUSTOM_PROFILE
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| format!("  {l}\n"))
            .collect::<String>()
    );
    let config = load_run_config_from_str(&yaml).unwrap();
    let profile = resolve_profile(&config).unwrap();
    assert_eq!(profile.name, "list-widgets");
}

#[test]
fn test_load_run_config_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "base_url: https://api.example.com").unwrap();
    writeln!(file, "profile: get-inventory").unwrap();

    let config = load_run_config(file.path()).unwrap();
    assert_eq!(config.profile.as_deref(), Some("get-inventory"));
}

#[test_case("profile: get-inventory\n" ; "missing base url")]
#[test_case("base_url: ''\nprofile: get-inventory\n" ; "empty base url")]
#[test_case("base_url: not a url\nprofile: get-inventory\n" ; "unparseable base url")]
#[test_case("base_url: https://x.io\n" ; "no profile")]
#[test_case("base_url: https://x.io\nprofile: a\nendpoint: {name: b, max_page_size: 1, items_path: I}\n" ; "profile and endpoint")]
#[test_case("base_url: https://x.io\nprofile: a\npagination: {max_items: 0}\n" ; "zero max items")]
#[test_case("base_url: https://x.io\nprofile: a\npagination: {page_size: 0}\n" ; "zero page size")]
#[test_case("base_url: https://x.io\nprofile: a\nbody: [1, 2]\n" ; "body not a mapping")]
#[test_case("base_url: https://x.io\nprofile: a\nfilters: {Path: []}\n" ; "empty filter")]
fn test_invalid_run_config(yaml: &str) {
    assert!(load_run_config_from_str(yaml).is_err());
}

#[test]
fn test_resolve_profile_requires_one_source() {
    let mut config = load_run_config_from_str("base_url: https://x.io\nprofile: get-inventory\n")
        .unwrap();
    config.profile = None;
    assert!(matches!(
        resolve_profile(&config),
        Err(Error::MissingConfigField { .. })
    ));
}
