//! End-to-end tests driving the `concepts` binary through stdin.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn concepts() -> Command {
    let mut cmd = Command::cargo_bin("concepts").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

// ---------------------------------------------------------------------------
// menu
// ---------------------------------------------------------------------------

#[test]
fn lists_entries_and_exits_on_unknown_choice() {
    concepts()
        .arg("--no-pause")
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("1) Var Types")
                .and(predicate::str::contains("2) Arrays with iterator"))
                .and(predicate::str::contains("3) Class inheritance and virtuals"))
                .and(predicate::str::contains("Enter choice number:"))
                .and(predicate::str::contains("Thank you for reviewing...")),
        );
}

#[test]
fn non_numeric_choice_terminates() {
    concepts()
        .arg("--no-pause")
        .write_stdin("vampire\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Thank you for reviewing...")
                .and(predicate::str::contains("FANGS OUT!").not()),
        );
}

#[test]
fn eof_terminates() {
    concepts()
        .arg("--no-pause")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Thank you for reviewing..."));
}

#[test]
fn inheritance_demo_then_quit() {
    concepts()
        .arg("--no-pause")
        .write_stdin("3\n-1\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("handle(rob).describe(): I is zombie")
                .and(predicate::str::contains("handle(kk).attack(): Bone Storm!"))
                .and(predicate::str::contains("Thank you for reviewing...")),
        );
}

#[test]
fn arrays_demo() {
    concepts()
        .arg("--no-pause")
        .write_stdin("2\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reverse iterating: d c b a"));
}

#[test]
fn var_types_demo() {
    concepts()
        .arg("--no-pause")
        .write_stdin("1\nq\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("i32")
                .and(predicate::str::contains("2147483647"))
                .and(predicate::str::contains("U+10FFFF")),
        );
}

#[test]
fn pause_waits_for_enter() {
    concepts()
        .write_stdin("2\n\n0\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Press Enter to continue")
                .and(predicate::str::contains("Thank you for reviewing...")),
        );
}

#[test]
fn piped_output_is_not_cleared() {
    concepts()
        .arg("--no-pause")
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[2J").not());
}

#[test]
fn verbose_logs_to_stderr() {
    concepts()
        .args(["--no-pause", "-vv"])
        .write_stdin("2\n0\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("dispatching menu action"));
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

#[test]
fn run_single_demo() {
    concepts()
        .args(["run", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HAND SWIPE"));
}

#[test]
fn run_unknown_choice_says_goodbye() {
    concepts()
        .args(["run", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Thank you for reviewing..."));
}

// ---------------------------------------------------------------------------
// bestiary
// ---------------------------------------------------------------------------

#[test]
fn bestiary_table() {
    concepts()
        .arg("bestiary")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("vampire")
                .and(predicate::str::contains("Braaaaains!"))
                .and(predicate::str::contains("3 kinds")),
        );
}

#[test]
fn bestiary_json_single_kind() {
    let output = concepts()
        .args(["bestiary", "--kind", "zombie", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["kind"], "zombie");
    assert_eq!(json[0]["vitality"], 10);
    assert_eq!(json[0]["attack"], "HAND SWIPE");
}

#[test]
fn bestiary_unknown_kind_fails() {
    concepts()
        .args(["bestiary", "--kind", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown creature kind"));
}
