//! View-state snapshots published to the presentation layer.

use serde::{Deserialize, Serialize};

/// Per-module state after a recompute pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleState {
    pub code: String,
    pub selected: bool,
    pub available: bool,
}

/// Per-area state after a recompute pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaState {
    pub name: String,
    pub eligible: bool,
}

/// Immutable snapshot of the whole session.
///
/// `modules` follows catalog order (one entry per record, so paired modules
/// appear twice); `areas` follows catalog order as well.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub modules: Vec<ModuleState>,
    pub areas: Vec<AreaState>,
}

impl ViewState {
    /// Number of selected module records.
    pub fn selected_count(&self) -> usize {
        self.modules.iter().filter(|m| m.selected).count()
    }

    /// Distinct selected codes, in catalog order.
    pub fn selected_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = Vec::new();
        for module in self.modules.iter().filter(|m| m.selected) {
            if !codes.contains(&module.code.as_str()) {
                codes.push(module.code.as_str());
            }
        }
        codes
    }

    /// Names of the areas the selection qualifies for.
    pub fn eligible_areas(&self) -> Vec<&str> {
        self.areas
            .iter()
            .filter(|a| a.eligible)
            .map(|a| a.name.as_str())
            .collect()
    }

    /// State of the first record carrying `code`.
    pub fn module(&self, code: &str) -> Option<&ModuleState> {
        self.modules.iter().find(|m| m.code == code)
    }

    pub fn area(&self, name: &str) -> Option<&AreaState> {
        self.areas.iter().find(|a| a.name == name)
    }

    /// Whether every record carrying `code` is available.
    pub fn is_available(&self, code: &str) -> bool {
        let mut records = self.modules.iter().filter(|m| m.code == code).peekable();
        records.peek().is_some() && records.all(|m| m.available)
    }

    pub fn is_selected(&self, code: &str) -> bool {
        self.modules.iter().any(|m| m.code == code && m.selected)
    }

    pub fn is_eligible(&self, area: &str) -> bool {
        self.area(area).is_some_and(|a| a.eligible)
    }
}

/// Area details returned by the description lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaDescription {
    pub name: String,
    pub description: String,
    /// Codes the area's rule looks at; presentation layers highlight these.
    pub codes: Vec<String>,
    /// Human-readable summary of the registered rule.
    pub rule: String,
}
