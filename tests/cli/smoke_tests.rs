use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::{Workspace, fixtures};

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_comment_rate"))
}

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("comment_rate"))
        .stdout(predicate::str::contains("--fail-under"));
}

#[test]
fn analyzes_java_file_as_json() {
    let ws = Workspace::new();
    let path = ws.write_file("Counter.java", fixtures::DOCUMENTED_JAVA);

    let assert = bin()
        .arg(&path)
        .args(["--format", "json"])
        .assert()
        .success();
    let json: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid JSON");

    assert_eq!(json["comment_lines"], 7);
    assert_eq!(json["grade"], "excellent");
}

#[test]
fn table_is_default_format() {
    let ws = Workspace::new();
    let path = ws.write_file("Counter.java", fixtures::BARE_JAVA);

    bin()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("0.00% ❌ Low"));
}

#[test]
fn fail_under_sets_exit_code() {
    let ws = Workspace::new();
    let path = ws.write_file("Counter.java", fixtures::BARE_JAVA);

    bin()
        .arg(&path)
        .args(["--fail-under", "15"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("below"));

    let documented = ws.write_file("Documented.java", fixtures::DOCUMENTED_JAVA);
    bin()
        .arg(&documented)
        .args(["--fail-under", "40%"])
        .assert()
        .success();
}

#[test]
fn unsupported_extension_fails() {
    let ws = Workspace::new();
    let path = ws.write_file("main.rs", "// rust\nfn main() {}\n");

    bin()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Extension 'rs' is not allowed"));
}

#[test]
fn ext_flag_allows_other_languages() {
    let ws = Workspace::new();
    let path = ws.write_file("main.rs", "// rust\nfn main() {}\n");

    bin()
        .arg(&path)
        .args(["--ext", "rs", "--format", "md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("50.00%"));
}

#[test]
fn directory_argument_fails() {
    let ws = Workspace::new();

    bin()
        .arg(ws.path())
        .arg("--all-extensions")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a regular file"));
}
