//! Tests for iia-model types.

use iia_model::{
    AreaRecord, AreaRule, Catalog, MalformedRecordError, ModuleRecord, RecordKind, RuleBook,
    SelectionPolicy, Term, ViewState,
};

#[test]
fn catalog_binds_management_category_from_policy() {
    let modules = vec![
        ModuleRecord::new("3E1", "Business Economics", "M", "9", ""),
        ModuleRecord::new("3X1", "Exchange Module", "L", "9", ""),
    ];
    let mut rules = RuleBook::default();
    rules.policy = SelectionPolicy {
        management_marker: 'X',
        ..SelectionPolicy::default()
    };
    let catalog = Catalog::from_records(&modules, &[], &rules).unwrap();

    assert!(!catalog.modules()[0].management);
    assert!(catalog.modules()[1].management);
    assert_eq!(catalog.modules()[1].term, Term::Lent);
}

#[test]
fn area_without_name_is_malformed() {
    let areas = vec![AreaRecord::new("  ", "Orphan", ["3A1"])];
    let err = Catalog::from_records(&[], &areas, &RuleBook::default()).unwrap_err();
    assert_eq!(
        err,
        MalformedRecordError::MissingField {
            kind: RecordKind::Area,
            row: 1,
            field: "name",
        }
    );
}

#[test]
fn area_rules_default_to_simple_threshold() {
    let areas = vec![
        AreaRecord::new("Mechanical Engineering", "Six of the listed", ["3C5", "3C6"]),
        AreaRecord::new("Electrical and Electronic Engineering", "All listed", ["3B1"]),
    ];
    let mut rules = RuleBook::default();
    rules.areas.insert(
        "Electrical and Electronic Engineering".to_string(),
        AreaRule::FullCoverage,
    );
    let catalog = Catalog::from_records(&[], &areas, &rules).unwrap();

    assert_eq!(
        catalog.areas()[0].rule,
        AreaRule::SimpleThreshold { min: 6 }
    );
    assert_eq!(catalog.areas()[1].rule, AreaRule::FullCoverage);
}

#[test]
fn view_state_serializes() {
    let view = ViewState::default();
    let json = serde_json::to_string(&view).expect("serialize view");
    assert_eq!(json, r#"{"modules":[],"areas":[]}"#);
    let round: ViewState = serde_json::from_str(&json).expect("deserialize view");
    assert_eq!(round, view);
}
