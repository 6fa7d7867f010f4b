//! Property tests: invariants that hold after any sequence of toggles.

use std::collections::BTreeSet;

use iia_engine::SelectionController;
use iia_model::{Catalog, ViewState};
use proptest::prelude::*;

fn catalog() -> Catalog {
    iia_ingest::load_embedded().unwrap()
}

fn codes(catalog: &Catalog) -> Vec<String> {
    catalog
        .modules()
        .iter()
        .map(|module| module.code.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn check_view(catalog: &Catalog, view: &ViewState) -> Result<(), TestCaseError> {
    for module in &view.modules {
        if module.selected {
            prop_assert!(module.available, "{} selected but unavailable", module.code);
        }
    }

    for code in catalog.paired_codes() {
        let records: Vec<_> = view.modules.iter().filter(|m| m.code == code).collect();
        prop_assert!(
            records.iter().all(|m| m.available == records[0].available),
            "{code} halves disagree on availability"
        );
        prop_assert!(
            records.iter().all(|m| m.selected == records[0].selected),
            "{code} halves disagree on selection"
        );
    }

    let policy = catalog.policy();
    for term in iia_model::Term::ALL {
        let in_term = catalog
            .modules()
            .iter()
            .filter(|m| m.term == term && view.modules[m.id.index()].selected)
            .count();
        prop_assert!(in_term <= policy.term_quota, "{term} over quota");
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn selected_modules_stay_available(picks in prop::collection::vec(0usize..64, 0..40)) {
        let catalog = catalog();
        let codes = codes(&catalog);
        let mut controller = SelectionController::new(&catalog);

        for pick in picks {
            let view = controller.toggle(&codes[pick % codes.len()]);
            check_view(&catalog, &view)?;
        }
    }

    #[test]
    fn refresh_is_idempotent(picks in prop::collection::vec(0usize..64, 0..40)) {
        let catalog = catalog();
        let codes = codes(&catalog);
        let mut controller = SelectionController::new(&catalog);

        let mut view = controller.snapshot();
        for pick in picks {
            view = controller.toggle(&codes[pick % codes.len()]);
        }
        prop_assert_eq!(controller.refresh(), view.clone());
        prop_assert_eq!(controller.refresh(), view);
    }

    #[test]
    fn reset_always_clears(picks in prop::collection::vec(0usize..64, 0..20)) {
        let catalog = catalog();
        let codes = codes(&catalog);
        let mut controller = SelectionController::new(&catalog);
        let initial = controller.snapshot();

        for pick in picks {
            controller.toggle(&codes[pick % codes.len()]);
        }
        prop_assert_eq!(controller.reset(), initial);
        prop_assert!(controller.selection().is_empty());
    }

    #[test]
    fn available_toggles_never_evict(picks in prop::collection::vec(0usize..64, 0..12)) {
        let catalog = catalog();
        let mut controller = SelectionController::new(&catalog);
        let mut view = controller.snapshot();

        for pick in picks {
            let open: Vec<String> = codes(&catalog)
                .into_iter()
                .filter(|code| view.is_available(code) && !view.is_selected(code))
                .collect();
            if open.is_empty() {
                break;
            }
            let code = &open[pick % open.len()];
            let before: Vec<String> = view
                .selected_codes()
                .into_iter()
                .map(str::to_string)
                .collect();

            view = controller.toggle(code);
            prop_assert!(view.is_selected(code), "{code} was available but not kept");
            for kept in &before {
                prop_assert!(view.is_selected(kept), "{kept} evicted by adding {code}");
            }
        }
    }
}
