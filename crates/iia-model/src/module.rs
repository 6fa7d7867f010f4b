//! Module records.

use serde::{Deserialize, Serialize};

use crate::error::{MalformedRecordError, RecordKind, Result};
use crate::policy::SelectionPolicy;
use crate::term::Term;

/// Position of a module inside its [`Catalog`](crate::Catalog).
///
/// Ids are dense, start at zero, and follow catalog order, so they double as
/// indices into per-module flag vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ModuleId(pub usize);

impl ModuleId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Raw module row as delivered by a catalog provider.
///
/// All fields are unparsed text; [`Module::from_record`] validates them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleRecord {
    pub code: String,
    pub name: String,
    pub term: String,
    pub set: String,
    pub prerequisite: String,
}

impl ModuleRecord {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        term: impl Into<String>,
        set: impl Into<String>,
        prerequisite: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            term: term.into(),
            set: set.into(),
            prerequisite: prerequisite.into(),
        }
    }
}

/// An examinable module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Module {
    pub id: ModuleId,
    /// Module code. Not unique: the two halves of a paired module share it.
    pub code: String,
    pub name: String,
    pub term: Term,
    /// Mutual-exclusion group within the term.
    pub set: u32,
    /// Code of the module that must be selected first.
    pub prerequisite: Option<String>,
    /// Whether the code marks the module as management category.
    pub management: bool,
}

impl Module {
    /// Validate a raw record. `row` is the 1-based record position used in
    /// error messages.
    pub fn from_record(
        id: ModuleId,
        row: usize,
        record: &ModuleRecord,
        policy: &SelectionPolicy,
    ) -> Result<Self> {
        let code = required(row, "code", &record.code)?;
        let name = required(row, "name", &record.name)?;
        let term_raw = required(row, "term", &record.term)?;
        let set_raw = required(row, "set", &record.set)?;

        let term = term_raw
            .parse::<Term>()
            .map_err(|_| MalformedRecordError::UnknownTerm {
                row,
                value: term_raw.to_string(),
            })?;
        let set = set_raw
            .parse::<u32>()
            .map_err(|_| MalformedRecordError::InvalidSet {
                row,
                value: set_raw.to_string(),
            })?;
        if code.chars().count() <= policy.management_marker_index {
            return Err(MalformedRecordError::CodeTooShort {
                row,
                code: code.to_string(),
                position: policy.management_marker_index,
            });
        }

        let prerequisite = record.prerequisite.trim();
        Ok(Self {
            id,
            code: code.to_string(),
            name: name.to_string(),
            term,
            set,
            prerequisite: (!prerequisite.is_empty()).then(|| prerequisite.to_string()),
            management: policy.is_management(code),
        })
    }

    /// Display label in the form used by module lists: code, name, and the
    /// prerequisite when there is one.
    pub fn label(&self) -> String {
        match &self.prerequisite {
            Some(prereq) => format!("{} {} (prereq: {prereq})", self.code, self.name),
            None => format!("{} {}", self.code, self.name),
        }
    }
}

fn required<'a>(row: usize, field: &'static str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MalformedRecordError::MissingField {
            kind: RecordKind::Module,
            row,
            field,
        });
    }
    Ok(trimmed)
}
