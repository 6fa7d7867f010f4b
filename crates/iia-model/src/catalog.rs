//! The catalog store.
//!
//! A [`Catalog`] is built once from raw records and never changes afterwards.
//! Engine state refers to its modules and areas by [`ModuleId`] / [`AreaId`].

use std::collections::{BTreeMap, BTreeSet};

use crate::area::{Area, AreaId, AreaRecord, RuleBook};
use crate::error::{MalformedRecordError, Result};
use crate::module::{Module, ModuleId, ModuleRecord};
use crate::policy::SelectionPolicy;

/// Immutable collection of modules and areas.
#[derive(Debug, Clone)]
pub struct Catalog {
    modules: Vec<Module>,
    areas: Vec<Area>,
    policy: SelectionPolicy,
    by_code: BTreeMap<String, Vec<ModuleId>>,
    by_area_name: BTreeMap<String, AreaId>,
}

impl Catalog {
    /// Build a catalog from raw records.
    ///
    /// Every record is validated; the first malformed one aborts the build.
    /// Areas receive the rule registered for their name in `rules`.
    pub fn from_records(
        modules: &[ModuleRecord],
        areas: &[AreaRecord],
        rules: &RuleBook,
    ) -> Result<Self> {
        let policy = rules.policy.clone();

        let mut built_modules = Vec::with_capacity(modules.len());
        let mut by_code: BTreeMap<String, Vec<ModuleId>> = BTreeMap::new();
        for (idx, record) in modules.iter().enumerate() {
            let id = ModuleId(idx);
            let module = Module::from_record(id, idx + 1, record, &policy)?;
            by_code.entry(module.code.clone()).or_default().push(id);
            built_modules.push(module);
        }

        let mut built_areas = Vec::with_capacity(areas.len());
        let mut by_area_name = BTreeMap::new();
        for (idx, record) in areas.iter().enumerate() {
            let id = AreaId(idx);
            let rule = rules.rule_for(record.name.trim()).clone();
            let area = Area::from_record(id, idx + 1, record, rule)?;
            if by_area_name.insert(area.name.clone(), id).is_some() {
                return Err(MalformedRecordError::DuplicateArea {
                    row: idx + 1,
                    name: area.name,
                });
            }
            built_areas.push(area);
        }

        Ok(Self {
            modules: built_modules,
            areas: built_areas,
            policy,
            by_code,
            by_area_name,
        })
    }

    /// All modules in catalog order.
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// All areas in catalog order.
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub fn module(&self, id: ModuleId) -> &Module {
        &self.modules[id.index()]
    }

    pub fn area(&self, id: AreaId) -> &Area {
        &self.areas[id.index()]
    }

    /// Quota policy the catalog was built with.
    pub fn policy(&self) -> &SelectionPolicy {
        &self.policy
    }

    /// Ids of every module carrying `code`. Paired modules yield two ids;
    /// unknown codes yield none.
    pub fn modules_with_code(&self, code: &str) -> &[ModuleId] {
        self.by_code.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Records sharing the code of `id`, including `id` itself.
    pub fn co_coded(&self, id: ModuleId) -> &[ModuleId] {
        self.modules_with_code(&self.module(id).code)
    }

    /// Look up an area by its exact name.
    pub fn area_by_name(&self, name: &str) -> Option<&Area> {
        self.by_area_name.get(name).map(|id| self.area(*id))
    }

    /// Look up an area by name, ignoring ASCII case.
    pub fn find_area(&self, name: &str) -> Option<&Area> {
        self.area_by_name(name).or_else(|| {
            self.areas
                .iter()
                .find(|area| area.name.eq_ignore_ascii_case(name.trim()))
        })
    }

    /// Distinct codes whose records are split across several rows.
    pub fn paired_codes(&self) -> BTreeSet<&str> {
        self.by_code
            .iter()
            .filter(|(_, ids)| ids.len() > 1)
            .map(|(code, _)| code.as_str())
            .collect()
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    pub fn area_count(&self) -> usize {
        self.areas.len()
    }
}
