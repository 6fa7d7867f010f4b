//! Catalog directory resolution.

use std::path::PathBuf;

/// Environment variable for pointing the planner at an on-disk catalog.
pub const CATALOG_ENV_VAR: &str = "IIA_CATALOG_DIR";

/// File name of the module list inside a catalog directory.
pub const MODULE_LIST_FILE: &str = "ModuleList.csv";

/// File name of the area list inside a catalog directory.
pub const AREAS_FILE: &str = "Areas.csv";

/// File name of the rule book inside a catalog directory.
pub const RULES_FILE: &str = "rules.toml";

/// Resolve the catalog directory.
///
/// Resolution order:
/// 1. `explicit` (e.g. a `--catalog-dir` flag)
/// 2. `IIA_CATALOG_DIR` environment variable
///
/// Returns `None` when neither is set; callers then fall back to the
/// embedded catalog.
pub fn catalog_dir(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| {
        std::env::var_os(CATALOG_ENV_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    })
}
