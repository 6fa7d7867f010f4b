//! Area eligibility.
//!
//! Each area carries the [`AreaRule`] it was bound to at catalog build time;
//! evaluation dispatches on the rule kind. Thresholds count selected records,
//! so a paired module counts twice, once per half. Anchor and coverage checks
//! only look at which codes are present.

use iia_model::{Area, AreaId, AreaRule, Catalog};

use crate::selection::SelectionSet;

/// Per-area eligibility flags, indexed by [`AreaId`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Eligibility {
    flags: Vec<bool>,
}

impl Eligibility {
    pub fn is_eligible(&self, id: AreaId) -> bool {
        self.flags.get(id.index()).copied().unwrap_or(false)
    }

    pub fn eligible_count(&self) -> usize {
        self.flags.iter().filter(|flag| **flag).count()
    }
}

/// Evaluate every area of `catalog` against `selection`.
pub fn evaluate(catalog: &Catalog, selection: &SelectionSet) -> Eligibility {
    let selected = selection.record_codes(catalog);
    let flags: Vec<bool> = catalog
        .areas()
        .iter()
        .map(|area| is_eligible(area, &selected))
        .collect();
    let eligibility = Eligibility { flags };
    tracing::debug!(
        eligible = eligibility.eligible_count(),
        areas = catalog.area_count(),
        "evaluated area eligibility"
    );
    eligibility
}

/// Whether the selected records satisfy `area`'s rule.
///
/// `selected` holds the code of every selected record, so a paired code
/// appears once per selected half.
pub fn is_eligible(area: &Area, selected: &[&str]) -> bool {
    let has = |code: &String| selected.iter().any(|s| s == code);
    let listed = |exclude: &[String]| {
        selected
            .iter()
            .filter(|code| area.lists(code) && !exclude.iter().any(|e| e == *code))
            .count()
    };

    match &area.rule {
        AreaRule::PairedAnchorCount {
            anchors,
            min_others,
        } => anchors.iter().all(has) && listed(anchors) >= *min_others,
        AreaRule::FullCoverage => area.codes.iter().all(has),
        AreaRule::EitherAnchorCount {
            anchors,
            min_others,
        } => anchors.iter().any(has) && listed(anchors) >= *min_others,
        AreaRule::DualThreshold {
            min_listed,
            secondary,
            min_secondary,
        } => {
            let secondary_count = selected
                .iter()
                .filter(|code| secondary.iter().any(|s| s == *code))
                .count();
            listed(&[]) >= *min_listed && secondary_count >= *min_secondary
        }
        AreaRule::SimpleThreshold { min } => listed(&[]) >= *min,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iia_model::AreaRecord;

    fn area(codes: &[&str], rule: AreaRule) -> Area {
        let record = AreaRecord::new("Area", "Description", codes.iter().copied());
        Area::from_record(AreaId(0), 1, &record, rule).unwrap()
    }

    fn selected<'a>(codes: &[&'a str]) -> Vec<&'a str> {
        codes.to_vec()
    }

    fn anchors(a: &str, b: &str) -> [String; 2] {
        [a.to_string(), b.to_string()]
    }

    #[test]
    fn test_paired_anchor_count() {
        let area = area(
            &["3A1", "3A3", "3A5", "3A6", "3C5"],
            AreaRule::PairedAnchorCount {
                anchors: anchors("3A1", "3A3"),
                min_others: 2,
            },
        );
        assert!(!is_eligible(&area, &selected(&["3A1", "3A3", "3A5"])));
        assert!(is_eligible(&area, &selected(&["3A1", "3A3", "3A5", "3C5"])));
        // Anchors do not count towards the others.
        assert!(!is_eligible(&area, &selected(&["3A1", "3A5", "3A6", "3C5"])));
    }

    #[test]
    fn test_paired_anchor_count_boundary_ignores_unlisted_codes() {
        let listed = area(
            &["3A1", "3A3", "3A5", "3A6", "3C5"],
            AreaRule::PairedAnchorCount {
                anchors: anchors("3A1", "3A3"),
                min_others: 2,
            },
        );
        assert!(is_eligible(
            &listed,
            &selected(&["3A1", "3A3", "3A5", "3A6", "3E1"])
        ));
        assert!(!is_eligible(
            &listed,
            &selected(&["3A1", "3A3", "3A5", "3E1", "3D1"])
        ));
    }

    #[test]
    fn test_full_coverage() {
        let listed = area(&["3B1", "3B2"], AreaRule::FullCoverage);
        assert!(!is_eligible(&listed, &selected(&["3B1"])));
        assert!(is_eligible(&listed, &selected(&["3B1", "3B2", "3A1"])));

        let empty = area(&[], AreaRule::FullCoverage);
        assert!(is_eligible(&empty, &selected(&[])));
    }

    #[test]
    fn test_either_anchor_count_excludes_both_anchors() {
        let area = area(
            &["3F1", "3F2", "3C5", "3C6", "3B1", "3B3", "3B4", "3F3"],
            AreaRule::EitherAnchorCount {
                anchors: anchors("3F1", "3F2"),
                min_others: 5,
            },
        );
        assert!(!is_eligible(
            &area,
            &selected(&["3F1", "3F2", "3C5", "3C6", "3B1", "3B3"])
        ));
        assert!(is_eligible(
            &area,
            &selected(&["3F2", "3C5", "3C6", "3B1", "3B3", "3B4"])
        ));
        assert!(!is_eligible(
            &area,
            &selected(&["3C5", "3C6", "3B1", "3B3", "3B4", "3F3"])
        ));
    }

    #[test]
    fn test_either_anchor_count_boundary() {
        let listed = area(
            &["3F1", "3F2", "3C5", "3C6", "3B1", "3B3", "3B4", "3F3"],
            AreaRule::EitherAnchorCount {
                anchors: anchors("3F1", "3F2"),
                min_others: 5,
            },
        );
        // Exactly five others with one anchor.
        assert!(is_eligible(
            &listed,
            &selected(&["3F1", "3C5", "3C6", "3B1", "3B3", "3B4"])
        ));
        // Four others plus an unlisted code.
        assert!(!is_eligible(
            &listed,
            &selected(&["3F1", "3C5", "3C6", "3B1", "3B3", "3A1"])
        ));
    }

    #[test]
    fn test_paired_records_count_per_half() {
        let listed = area(
            &["3F1", "3F3", "3F4", "3F7", "3F8", "3M1"],
            AreaRule::SimpleThreshold { min: 6 },
        );
        assert!(is_eligible(
            &listed,
            &selected(&["3M1", "3M1", "3F1", "3F3", "3F7", "3F4"])
        ));
        assert!(!is_eligible(
            &listed,
            &selected(&["3M1", "3F1", "3F3", "3F7", "3F4"])
        ));
    }

    #[test]
    fn test_dual_threshold() {
        let secondary: Vec<String> = ["3G1", "3G2", "3G3", "3G4", "3G5"]
            .iter()
            .map(|code| code.to_string())
            .collect();
        let area = area(
            &["3G1", "3G2", "3G3", "3G4", "3G5", "3A1", "3C7", "3F3"],
            AreaRule::DualThreshold {
                min_listed: 6,
                secondary,
                min_secondary: 3,
            },
        );
        assert!(is_eligible(
            &area,
            &selected(&["3G1", "3G2", "3G3", "3A1", "3C7", "3F3"])
        ));
        assert!(!is_eligible(
            &area,
            &selected(&["3G1", "3G2", "3A1", "3C7", "3F3", "3D1"])
        ));
        assert!(!is_eligible(&area, &selected(&["3G1", "3G2", "3G3", "3G4", "3G5"])));
    }

    #[test]
    fn test_simple_threshold_boundary() {
        let area = area(
            &["3D1", "3D2", "3D3", "3D4", "3D5", "3D7", "3C7"],
            AreaRule::SimpleThreshold { min: 6 },
        );
        assert!(!is_eligible(
            &area,
            &selected(&["3D1", "3D2", "3D3", "3D4", "3D5", "3A1"])
        ));
        assert!(is_eligible(
            &area,
            &selected(&["3D1", "3D2", "3D3", "3D4", "3D5", "3D7"])
        ));
    }
}
