//! CLI library components for the IIA planner.

pub mod logging;
pub mod shell;
pub mod summary;
