//! Specialization areas and their eligibility rules.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MalformedRecordError, RecordKind, Result};
use crate::policy::SelectionPolicy;

/// Position of an area inside its [`Catalog`](crate::Catalog).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AreaId(pub usize);

impl AreaId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Raw area row: name, description, and a variable-length list of codes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AreaRecord {
    pub name: String,
    pub description: String,
    pub codes: Vec<String>,
}

impl AreaRecord {
    pub fn new<I, S>(name: impl Into<String>, description: impl Into<String>, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            description: description.into(),
            codes: codes.into_iter().map(Into::into).collect(),
        }
    }
}

/// Eligibility predicate kinds.
///
/// Each area is bound to exactly one kind when the catalog is built. The
/// anchors and thresholds travel with the variant so new areas only need a
/// rule book entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum AreaRule {
    /// Both anchors selected, plus `min_others` further listed codes.
    PairedAnchorCount {
        anchors: [String; 2],
        #[serde(default = "default_paired_others")]
        min_others: usize,
    },
    /// Every listed code selected.
    FullCoverage,
    /// At least one anchor selected, plus `min_others` listed codes that are
    /// not anchors.
    EitherAnchorCount {
        anchors: [String; 2],
        #[serde(default = "default_either_others")]
        min_others: usize,
    },
    /// `min_listed` listed codes selected and `min_secondary` codes from the
    /// secondary list selected.
    DualThreshold {
        min_listed: usize,
        secondary: Vec<String>,
        min_secondary: usize,
    },
    /// At least `min` listed codes selected.
    SimpleThreshold { min: usize },
}

fn default_paired_others() -> usize {
    2
}

fn default_either_others() -> usize {
    5
}

impl Default for AreaRule {
    fn default() -> Self {
        AreaRule::SimpleThreshold { min: 6 }
    }
}

impl AreaRule {
    /// Short kind name as used in rule books.
    pub fn kind(&self) -> &'static str {
        match self {
            AreaRule::PairedAnchorCount { .. } => "paired-anchor-count",
            AreaRule::FullCoverage => "full-coverage",
            AreaRule::EitherAnchorCount { .. } => "either-anchor-count",
            AreaRule::DualThreshold { .. } => "dual-threshold",
            AreaRule::SimpleThreshold { .. } => "simple-threshold",
        }
    }
}

impl fmt::Display for AreaRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AreaRule::PairedAnchorCount {
                anchors: [a, b],
                min_others,
            } => write!(f, "{a} and {b} + {min_others} more"),
            AreaRule::FullCoverage => write!(f, "all listed"),
            AreaRule::EitherAnchorCount {
                anchors: [a, b],
                min_others,
            } => write!(f, "{a} or {b} + {min_others} more"),
            AreaRule::DualThreshold {
                min_listed,
                secondary,
                min_secondary,
            } => write!(
                f,
                "{min_listed} listed, {min_secondary} of {}",
                secondary.join("/")
            ),
            AreaRule::SimpleThreshold { min } => write!(f, "{min} listed"),
        }
    }
}

/// Area configuration: selection policy plus the rule registered per area.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleBook {
    pub policy: SelectionPolicy,
    /// Rule for areas without an entry in `areas`.
    pub default: AreaRule,
    /// Rules keyed by area name.
    pub areas: BTreeMap<String, AreaRule>,
}

impl RuleBook {
    /// Rule registered for an area name, falling back to the default rule.
    pub fn rule_for(&self, area_name: &str) -> &AreaRule {
        self.areas.get(area_name).unwrap_or(&self.default)
    }
}

/// A specialization area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Area {
    pub id: AreaId,
    pub name: String,
    pub description: String,
    /// Module codes relevant to this area, in catalog order.
    pub codes: Vec<String>,
    pub rule: AreaRule,
}

impl Area {
    /// Validate a raw record and bind its rule.
    pub fn from_record(id: AreaId, row: usize, record: &AreaRecord, rule: AreaRule) -> Result<Self> {
        let name = record.name.trim();
        if name.is_empty() {
            return Err(missing(row, "name"));
        }
        let description = record.description.trim();
        if description.is_empty() {
            return Err(missing(row, "description"));
        }

        let mut codes: Vec<String> = Vec::with_capacity(record.codes.len());
        for code in record.codes.iter().map(|c| c.trim()).filter(|c| !c.is_empty()) {
            if !codes.iter().any(|existing| existing == code) {
                codes.push(code.to_string());
            }
        }

        Ok(Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            codes,
            rule,
        })
    }

    /// Returns true if `code` is listed for this area.
    pub fn lists(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c == code)
    }
}

fn missing(row: usize, field: &'static str) -> MalformedRecordError {
    MalformedRecordError::MissingField {
        kind: RecordKind::Area,
        row,
        field,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_from_record_drops_blank_and_repeated_codes() {
        let record = AreaRecord::new("Bioengineering", "Six listed", ["3G1", "", "3G2", "3G1", " "]);
        let area = Area::from_record(AreaId(0), 1, &record, AreaRule::default()).unwrap();
        assert_eq!(area.codes, vec!["3G1", "3G2"]);
        assert!(area.lists("3G2"));
        assert!(!area.lists("3A1"));
    }

    #[test]
    fn test_area_requires_description() {
        let record = AreaRecord::new("Bioengineering", "", ["3G1"]);
        let err = Area::from_record(AreaId(0), 4, &record, AreaRule::default()).unwrap_err();
        assert_eq!(err.to_string(), "area record 4: missing required field 'description'");
    }

    #[test]
    fn test_rule_book_falls_back_to_default() {
        let mut book = RuleBook::default();
        book.areas
            .insert("Electrical and Electronic Engineering".to_string(), AreaRule::FullCoverage);
        assert_eq!(
            book.rule_for("Electrical and Electronic Engineering"),
            &AreaRule::FullCoverage
        );
        assert_eq!(
            book.rule_for("Mechanical Engineering"),
            &AreaRule::SimpleThreshold { min: 6 }
        );
    }

    #[test]
    fn test_rule_deserializes_from_tagged_json() {
        let rule: AreaRule =
            serde_json::from_str(r#"{"kind": "paired-anchor-count", "anchors": ["3A1", "3A3"]}"#)
                .unwrap();
        assert_eq!(
            rule,
            AreaRule::PairedAnchorCount {
                anchors: ["3A1".to_string(), "3A3".to_string()],
                min_others: 2,
            }
        );
        assert_eq!(rule.to_string(), "3A1 and 3A3 + 2 more");
    }
}
