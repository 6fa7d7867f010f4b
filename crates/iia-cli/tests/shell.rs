//! Interactive sessions driven from a script.

use std::io::Cursor;

use iia_cli::shell::run_session;
use iia_engine::SelectionController;

fn run(script: &str) -> String {
    let catalog = iia_ingest::load_embedded().unwrap();
    let mut controller = SelectionController::new(&catalog);
    let mut output = Vec::new();
    run_session(&mut controller, Cursor::new(script), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn toggles_report_the_selection() {
    let output = run("toggle 3A1\ntoggle 3a3\n");
    insta::assert_snapshot!(output.trim_end(), @r###"
    selected (0): none
    eligible: none
    selected (1): 3A1
    eligible: none
    selected (2): 3A1 3A3
    eligible: none
    "###);
}

#[test]
fn bad_lines_do_not_end_the_session() {
    let output = run("frobnicate\n\ntoggle\ntoggle 9Z9\nreset\n");
    assert!(output.contains("error: unknown command 'frobnicate' (try 'help')"));
    assert!(output.contains("error: toggle needs a module code"));
    assert!(output.contains("unknown module '9Z9'"));
    assert!(output.trim_end().ends_with("selected (0): none\neligible: none"));
}

#[test]
fn quit_stops_reading() {
    let output = run("toggle 3A1\nquit\ntoggle 3A5\n");
    assert!(output.contains("selected (1): 3A1"));
    assert!(!output.contains("3A5"));
}

#[test]
fn describe_finds_areas_by_name() {
    let output = run("describe electrical and electronic engineering\ndescribe Astrology\n");
    assert!(output.contains("Electrical and Electronic Engineering\nTake all of the listed modules."));
    assert!(output.contains("codes: 3B1 3B2 3B3 3B4 3B5 3B6"));
    assert!(output.contains("unknown area 'Astrology'"));
}

#[test]
fn area_eligibility_is_reported() {
    let output = run("toggle 3A1\ntoggle 3A3\ntoggle 3A5\ntoggle 3A6\n");
    assert!(
        output
            .trim_end()
            .ends_with("eligible: Aerospace and Aerothermal Engineering")
    );
}
