//! Availability propagation.
//!
//! Recomputes, from scratch, which modules may still be chosen given the
//! current selection:
//!
//! 1. every module starts available
//! 2. **prerequisite**: a module needs a selected module carrying its
//!    prerequisite code; selected modules failing this are evicted
//! 3. **set exclusion**: a selected module disables every other module with
//!    the same term and set
//! 4. **term quota**: a full term disables its unselected modules
//! 5. **management quota**: a full management category disables its
//!    unselected modules
//! 6. **management minimum**: at exactly the trigger size without enough
//!    management modules, unselected non-management modules are disabled
//! 7. **pair linkage**: records sharing a code take the AND of their flags
//!
//! Rules 2-6 only ever clear flags. Each rule sees the selection as left by
//! the rules before it.
//!
//! Before the rules run, the selection is *settled*: choices are replayed in
//! insertion order and a choice is kept only if it would have been available
//! given the choices kept before it. This evicts choices added while
//! unavailable (a sixth module in a full term, a second module from a taken
//! set) and leaves every selection built from available choices untouched.

use iia_model::{Catalog, ModuleId, SelectionPolicy, Term};

use crate::selection::SelectionSet;

/// Per-module availability flags, indexed by [`ModuleId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Availability {
    flags: Vec<bool>,
}

impl Availability {
    /// Every one of `len` modules available.
    pub fn all_available(len: usize) -> Self {
        Self {
            flags: vec![true; len],
        }
    }

    pub fn is_available(&self, id: ModuleId) -> bool {
        self.flags.get(id.index()).copied().unwrap_or(false)
    }

    fn disable(&mut self, id: ModuleId) {
        if let Some(flag) = self.flags.get_mut(id.index()) {
            *flag = false;
        }
    }

    /// Number of available module records.
    pub fn available_count(&self) -> usize {
        self.flags.iter().filter(|flag| **flag).count()
    }
}

/// Settle the selection, then run the availability rules against it.
///
/// Any module evicted along the way is removed from `selection`. On return
/// every selected module is available.
pub fn propagate(catalog: &Catalog, selection: &mut SelectionSet) -> Availability {
    settle(catalog, selection);
    let availability = apply_rules(catalog, selection);
    debug_assert!(
        selection.iter().all(|id| availability.is_available(id)),
        "selected module left unavailable after propagation"
    );
    tracing::debug!(
        selected = selection.len(),
        available = availability.available_count(),
        "propagated availability"
    );
    availability
}

/// Run rules 1-7 once against `selection`.
pub fn apply_rules(catalog: &Catalog, selection: &mut SelectionSet) -> Availability {
    let policy = catalog.policy();
    let mut availability = Availability::all_available(catalog.module_count());

    apply_prerequisites(catalog, selection, &mut availability);
    apply_set_exclusion(catalog, selection, &mut availability);
    apply_term_quota(catalog, policy, selection, &mut availability);
    apply_management_quota(catalog, policy, selection, &mut availability);
    apply_management_minimum(catalog, policy, selection, &mut availability);
    link_pairs(catalog, &mut availability);

    availability
}

/// Replay choices in insertion order and evict the ones that would not have
/// been available. Returns the evicted ids.
pub fn settle(catalog: &Catalog, selection: &mut SelectionSet) -> Vec<ModuleId> {
    let mut admitted = SelectionSet::new();
    let mut rejected = Vec::new();

    for choice in selection.choices(catalog) {
        if admits(catalog, &admitted, &choice) {
            for id in choice {
                admitted.insert(id);
            }
        } else {
            let module = catalog.module(choice[0]);
            tracing::debug!(code = %module.code, "evicted choice that is not available");
            rejected.extend(choice);
        }
    }

    for id in &rejected {
        selection.remove(*id);
    }
    rejected
}

/// Whether `choice` (all selected records of one code) may join `admitted`.
fn admits(catalog: &Catalog, admitted: &SelectionSet, choice: &[ModuleId]) -> bool {
    // Half of a paired module cannot stand alone.
    if choice.len() != catalog.co_coded(choice[0]).len() {
        return false;
    }

    // Records of one choice exclude each other when they share a set.
    for (idx, a) in choice.iter().enumerate() {
        let a = catalog.module(*a);
        if choice[idx + 1..].iter().any(|b| {
            let b = catalog.module(*b);
            a.term == b.term && a.set == b.set
        }) {
            return false;
        }
    }

    let mut scratch = admitted.clone();
    let availability = apply_rules(catalog, &mut scratch);
    choice.iter().all(|id| availability.is_available(*id))
}

/// Rule 2. Evictions can strand modules whose prerequisite was itself
/// evicted, so the rule repeats until no module is evicted.
fn apply_prerequisites(
    catalog: &Catalog,
    selection: &mut SelectionSet,
    availability: &mut Availability,
) {
    loop {
        let codes = selection.codes(catalog);
        let mut evicted = false;
        for module in catalog.modules() {
            let Some(prerequisite) = module.prerequisite.as_deref() else {
                continue;
            };
            if codes.contains(prerequisite) {
                continue;
            }
            availability.disable(module.id);
            if selection.remove(module.id) {
                tracing::debug!(
                    code = %module.code,
                    prerequisite,
                    "evicted module whose prerequisite is not selected"
                );
                evicted = true;
            }
        }
        if !evicted {
            break;
        }
    }
}

/// Rule 3.
fn apply_set_exclusion(
    catalog: &Catalog,
    selection: &SelectionSet,
    availability: &mut Availability,
) {
    for selected in selection.iter() {
        let selected = catalog.module(selected);
        for module in catalog.modules() {
            if module.id != selected.id
                && module.term == selected.term
                && module.set == selected.set
            {
                availability.disable(module.id);
            }
        }
    }
}

/// Rule 4.
fn apply_term_quota(
    catalog: &Catalog,
    policy: &SelectionPolicy,
    selection: &SelectionSet,
    availability: &mut Availability,
) {
    let mut per_term = [0usize; Term::ALL.len()];
    for id in selection.iter() {
        per_term[catalog.module(id).term.index()] += 1;
    }

    for term in Term::ALL {
        if per_term[term.index()] < policy.term_quota {
            continue;
        }
        tracing::trace!(%term, count = per_term[term.index()], "term quota reached");
        for module in catalog.modules() {
            if module.term == term && !selection.contains(module.id) {
                availability.disable(module.id);
            }
        }
    }
}

fn management_count(catalog: &Catalog, selection: &SelectionSet) -> usize {
    selection
        .iter()
        .filter(|id| catalog.module(*id).management)
        .count()
}

/// Rule 5.
fn apply_management_quota(
    catalog: &Catalog,
    policy: &SelectionPolicy,
    selection: &SelectionSet,
    availability: &mut Availability,
) {
    if management_count(catalog, selection) < policy.management_quota {
        return;
    }
    tracing::trace!("management quota reached");
    for module in catalog.modules() {
        if module.management && !selection.contains(module.id) {
            availability.disable(module.id);
        }
    }
}

/// Rule 6. Only fires at exactly the trigger size.
fn apply_management_minimum(
    catalog: &Catalog,
    policy: &SelectionPolicy,
    selection: &SelectionSet,
    availability: &mut Availability,
) {
    if selection.len() != policy.management_minimum_at
        || management_count(catalog, selection) >= policy.management_minimum
    {
        return;
    }
    tracing::trace!("management minimum pending, locking other modules");
    for module in catalog.modules() {
        if !module.management && !selection.contains(module.id) {
            availability.disable(module.id);
        }
    }
}

/// Rule 7.
fn link_pairs(catalog: &Catalog, availability: &mut Availability) {
    for code in catalog.paired_codes() {
        let ids = catalog.modules_with_code(code);
        if ids.iter().all(|id| availability.is_available(*id)) {
            continue;
        }
        for id in ids {
            availability.disable(*id);
        }
    }
}
