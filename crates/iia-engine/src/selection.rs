//! The selection set.

use std::collections::BTreeSet;

use iia_model::{Catalog, ModuleId};

/// Ordered set of selected modules.
///
/// Holds ids into a [`Catalog`], never copies of modules. Insertion order is
/// kept for display and for settling (earlier choices win over later ones);
/// the availability rules themselves do not depend on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    members: Vec<ModuleId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: ModuleId) -> bool {
        self.members.contains(&id)
    }

    /// Add `id` at the end. Returns false if it was already selected.
    pub fn insert(&mut self, id: ModuleId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.members.push(id);
        true
    }

    /// Remove `id`. Returns false if it was not selected.
    pub fn remove(&mut self, id: ModuleId) -> bool {
        let before = self.members.len();
        self.members.retain(|member| *member != id);
        self.members.len() != before
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Selected ids in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = ModuleId> + '_ {
        self.members.iter().copied()
    }

    pub fn as_slice(&self) -> &[ModuleId] {
        &self.members
    }

    /// Distinct codes of the selected modules.
    pub fn codes<'c>(&self, catalog: &'c Catalog) -> BTreeSet<&'c str> {
        self.members
            .iter()
            .map(|id| catalog.module(*id).code.as_str())
            .collect()
    }

    /// Code of every selected record in insertion order. A selected paired
    /// module contributes its code twice.
    pub fn record_codes<'c>(&self, catalog: &'c Catalog) -> Vec<&'c str> {
        self.members
            .iter()
            .map(|id| catalog.module(*id).code.as_str())
            .collect()
    }

    /// Selected records grouped by code, groups ordered by the first time
    /// their code appears in the selection.
    pub fn choices(&self, catalog: &Catalog) -> Vec<Vec<ModuleId>> {
        let mut groups: Vec<(&str, Vec<ModuleId>)> = Vec::new();
        for id in &self.members {
            let code = catalog.module(*id).code.as_str();
            match groups.iter_mut().find(|(c, _)| *c == code) {
                Some((_, ids)) => ids.push(*id),
                None => groups.push((code, vec![*id])),
            }
        }
        groups.into_iter().map(|(_, ids)| ids).collect()
    }
}
