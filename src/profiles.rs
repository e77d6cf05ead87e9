//! Built-in endpoint profiles embedded in the binary
//!
//! Lets users pass `--profile get-inventory` instead of a YAML file path.
//! Page size caps follow each operation's documented `MaxResults` range.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Built-in profile YAML definitions
pub static BUILTIN_PROFILES: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();

        // Parameter Store
        m.insert(
            "get-parameters-by-path",
            include_str!("../profiles/get-parameters-by-path.yaml"),
        );
        m.insert(
            "parameters-by-path",
            include_str!("../profiles/get-parameters-by-path.yaml"),
        );
        m.insert(
            "describe-parameters",
            include_str!("../profiles/describe-parameters.yaml"),
        );

        // Inventory
        m.insert("get-inventory", include_str!("../profiles/get-inventory.yaml"));
        m.insert(
            "get-inventory-schema",
            include_str!("../profiles/get-inventory-schema.yaml"),
        );
        m.insert(
            "list-inventory-entries",
            include_str!("../profiles/list-inventory-entries.yaml"),
        );
        m.insert(
            "get-inventory-entry-list",
            include_str!("../profiles/list-inventory-entries.yaml"),
        );

        // Run Command
        m.insert(
            "list-command-invocations",
            include_str!("../profiles/list-command-invocations.yaml"),
        );
        m.insert(
            "get-command-invocation",
            include_str!("../profiles/list-command-invocations.yaml"),
        );

        // State Manager, fleet, documents
        m.insert(
            "list-associations",
            include_str!("../profiles/list-associations.yaml"),
        );
        m.insert(
            "describe-instance-information",
            include_str!("../profiles/describe-instance-information.yaml"),
        );
        m.insert("list-documents", include_str!("../profiles/list-documents.yaml"));

        m
    });

/// Get a built-in profile by name
pub fn get_builtin(name: &str) -> Option<&'static str> {
    BUILTIN_PROFILES.get(name).copied()
}

/// Check if a name refers to a built-in profile
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_PROFILES.contains_key(name)
}

/// List all built-in profile names (primary names only, no aliases)
pub fn list_builtin() -> Vec<&'static str> {
    vec![
        "get-parameters-by-path",
        "describe-parameters",
        "get-inventory",
        "get-inventory-schema",
        "list-inventory-entries",
        "list-command-invocations",
        "list-associations",
        "describe-instance-information",
        "list-documents",
    ]
}
