//! The selection controller: the only mutator of a session's selection.

use iia_model::{AreaDescription, AreaState, Catalog, ModuleState, ViewState};

use crate::availability::{Availability, propagate};
use crate::eligibility::{Eligibility, evaluate};
use crate::selection::SelectionSet;

/// One planning session over a borrowed catalog.
///
/// Every mutation runs the full recompute pipeline (propagate, then
/// evaluate) and returns a fresh [`ViewState`]. The pipeline is a function of
/// the catalog and the selection only, so two passes without a mutation in
/// between yield identical snapshots.
#[derive(Debug, Clone)]
pub struct SelectionController<'c> {
    catalog: &'c Catalog,
    selection: SelectionSet,
    availability: Availability,
    eligibility: Eligibility,
}

impl<'c> SelectionController<'c> {
    /// Start a session with an empty selection.
    ///
    /// Runs one pass immediately so prerequisite-gated modules start out
    /// unavailable.
    pub fn new(catalog: &'c Catalog) -> Self {
        let mut controller = Self {
            catalog,
            selection: SelectionSet::new(),
            availability: Availability::all_available(catalog.module_count()),
            eligibility: Eligibility::default(),
        };
        controller.recompute();
        controller
    }

    /// Flip membership of every record carrying `code`.
    ///
    /// Paired records move together: if any of them is selected they are all
    /// removed, otherwise they are all added. Unknown codes and unavailable
    /// modules are accepted; the recompute pass evicts whatever is not
    /// allowed.
    pub fn toggle(&mut self, code: &str) -> ViewState {
        let span = tracing::debug_span!("toggle", code);
        let _guard = span.enter();

        let ids = self.catalog.modules_with_code(code);
        if ids.is_empty() {
            tracing::debug!("unknown module code");
        } else if ids.iter().any(|id| self.selection.contains(*id)) {
            for id in ids {
                self.selection.remove(*id);
            }
        } else {
            for id in ids {
                self.selection.insert(*id);
            }
        }

        self.recompute();
        self.snapshot()
    }

    /// Clear the selection and recompute.
    pub fn reset(&mut self) -> ViewState {
        tracing::debug!(cleared = self.selection.len(), "reset selection");
        self.selection.clear();
        self.recompute();
        self.snapshot()
    }

    /// Recompute without mutating the selection.
    pub fn refresh(&mut self) -> ViewState {
        self.recompute();
        self.snapshot()
    }

    /// The state computed by the last pass.
    pub fn snapshot(&self) -> ViewState {
        let modules = self
            .catalog
            .modules()
            .iter()
            .map(|module| ModuleState {
                code: module.code.clone(),
                selected: self.selection.contains(module.id),
                available: self.availability.is_available(module.id),
            })
            .collect();
        let areas = self
            .catalog
            .areas()
            .iter()
            .map(|area| AreaState {
                name: area.name.clone(),
                eligible: self.eligibility.is_eligible(area.id),
            })
            .collect();
        ViewState { modules, areas }
    }

    /// Name, description and listed codes of the area called `name`
    /// (case-insensitive).
    pub fn describe_area(&self, name: &str) -> Option<AreaDescription> {
        let area = self.catalog.find_area(name)?;
        Some(AreaDescription {
            name: area.name.clone(),
            description: area.description.clone(),
            codes: area.codes.clone(),
            rule: area.rule.to_string(),
        })
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    fn recompute(&mut self) {
        self.availability = propagate(self.catalog, &mut self.selection);
        self.eligibility = evaluate(self.catalog, &self.selection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iia_model::{AreaRecord, ModuleRecord, RuleBook};

    fn catalog() -> Catalog {
        let modules = vec![
            ModuleRecord::new("3A1", "Fluid Mechanics I", "M", "1", ""),
            ModuleRecord::new("3A3", "Fluid Mechanics II", "L", "1", "3A1"),
            ModuleRecord::new("3M1", "Mathematical Methods", "M", "8", ""),
            ModuleRecord::new("3M1", "Mathematical Methods", "L", "8", ""),
        ];
        let areas = vec![AreaRecord::new(
            "Aerospace",
            "Take 3A1 and 3A3.",
            ["3A1", "3A3"],
        )];
        let mut rules = RuleBook::default();
        rules
            .areas
            .insert("Aerospace".to_string(), iia_model::AreaRule::FullCoverage);
        Catalog::from_records(&modules, &areas, &rules).unwrap()
    }

    #[test]
    fn test_initial_pass_gates_prerequisites() {
        let catalog = catalog();
        let controller = SelectionController::new(&catalog);
        let view = controller.snapshot();
        assert!(view.is_available("3A1"));
        assert!(!view.is_available("3A3"));
        assert_eq!(view.selected_count(), 0);
    }

    #[test]
    fn test_paired_records_move_together() {
        let catalog = catalog();
        let mut controller = SelectionController::new(&catalog);
        let view = controller.toggle("3M1");
        assert_eq!(view.selected_count(), 2);
        assert_eq!(view.selected_codes(), vec!["3M1"]);

        let view = controller.toggle("3M1");
        assert_eq!(view.selected_count(), 0);
    }

    #[test]
    fn test_area_becomes_eligible() {
        let catalog = catalog();
        let mut controller = SelectionController::new(&catalog);
        controller.toggle("3A1");
        let view = controller.toggle("3A3");
        assert!(view.is_eligible("Aerospace"));

        let view = controller.toggle("3A1");
        assert!(!view.is_selected("3A3"));
        assert!(!view.is_eligible("Aerospace"));
    }

    #[test]
    fn test_describe_area_ignores_case() {
        let catalog = catalog();
        let controller = SelectionController::new(&catalog);
        let description = controller.describe_area("aerospace").unwrap();
        assert_eq!(description.name, "Aerospace");
        assert_eq!(description.codes, vec!["3A1", "3A3"]);
        assert_eq!(description.rule, "all listed");
        assert!(controller.describe_area("Astrology").is_none());
    }
}
