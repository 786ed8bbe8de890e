use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

#[allow(deprecated)]
fn pactguard_cmd() -> Command {
    Command::cargo_bin("pactguard").unwrap()
}

#[test]
fn check_fails_on_expired_annotation() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("main.rs"),
        "fn main() {}\n// TODO-OR-ELSE(09/30/2021) do something\n",
    )
    .unwrap();

    pactguard_cmd()
        .arg("check")
        .arg(dir.path())
        .assert()
        .code(2)
        .stdout(predicate::str::contains("DIE001"))
        .stdout(predicate::str::contains(
            "Pact 'do something' violated because \
             you agreed to complete this TODO by 2021-09-30.",
        ));
}

#[test]
fn check_passes_on_future_annotation() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("main.rs"),
        "// TODO-OR-ELSE(01/01/2100) someday\n",
    )
    .unwrap();

    pactguard_cmd()
        .arg("check")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No findings"));
}

#[test]
fn check_writes_a_json_report() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("main.rs"), "fn main() {}\n").unwrap();
    let report_path = dir.path().join("artifacts").join("report.json");

    pactguard_cmd()
        .arg("check")
        .arg(dir.path().join("main.rs"))
        .arg("--report-out")
        .arg(&report_path)
        .assert()
        .success();

    let json = fs::read_to_string(&report_path).unwrap();
    assert!(json.contains("\"schema\": \"pactguard.report.v1\""));
    assert!(json.contains("\"verdict\": \"pass\""));
}

#[test]
fn check_surfaces_invalid_annotation_dates() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("bad.rs"),
        "// TODO-OR-ELSE(someday) eventually\n",
    )
    .unwrap();

    pactguard_cmd()
        .arg("check")
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid date"));
}

#[test]
fn line_reports_offset_and_coded_message() {
    pactguard_cmd()
        .arg("line")
        .arg("# TODO-OR-ELSE(09/30/2021) do something")
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "2: DIE001 Pact 'do something' violated because \
             you agreed to complete this TODO by 2021-09-30.",
        ));
}

#[test]
fn line_is_silent_without_an_annotation() {
    pactguard_cmd()
        .arg("line")
        .arg("let x = 1;")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
