//! Quota policy applied by the availability propagator.

use serde::{Deserialize, Serialize};

/// Quotas and category marker used when recomputing module availability.
///
/// The defaults are the IIA examination rules: five modules per term, at most
/// two management modules, and at least one management module once nine
/// modules are chosen. Any field can be overridden from the `[policy]` table
/// of a rule book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectionPolicy {
    /// Selected modules per term before the rest of that term locks.
    pub term_quota: usize,
    /// Selected management modules before the rest of the category locks.
    pub management_quota: usize,
    /// Management modules required once the selection reaches
    /// `management_minimum_at`.
    pub management_minimum: usize,
    /// Exact selection size at which the management minimum is enforced.
    pub management_minimum_at: usize,
    /// Character marking a management module code.
    pub management_marker: char,
    /// Character position (0-based) of the marker inside the code.
    pub management_marker_index: usize,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            term_quota: 5,
            management_quota: 2,
            management_minimum: 1,
            management_minimum_at: 9,
            management_marker: 'E',
            management_marker_index: 1,
        }
    }
}

impl SelectionPolicy {
    /// Returns true if `code` carries the management marker.
    pub fn is_management(&self, code: &str) -> bool {
        code.chars().nth(self.management_marker_index) == Some(self.management_marker)
    }
}
