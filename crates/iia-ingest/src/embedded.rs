//! Embedded default catalog.
//!
//! The IIA module list, area list, and rule book are compiled into the binary
//! with `include_str!()` so the planner works without any files on disk.

/// Module list (`code,name,term,set,prerequisite`).
pub const MODULE_LIST: &str = include_str!("../data/ModuleList.csv");

/// Area list (`name,description,codes...`).
pub const AREAS: &str = include_str!("../data/Areas.csv");

/// Area rule book.
pub const RULES: &str = include_str!("../data/rules.toml");
