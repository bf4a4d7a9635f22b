//! # Command line front end
//!
//! Runs the compiled binary on the textbook problems and checks its output and exit codes.
use assert_cmd::Command;
use predicates::prelude::*;

use crate::textbook::get_test_file_path;

fn cmd() -> Command {
    Command::cargo_bin("tableau-simplex").unwrap()
}

#[test]
fn optimal() {
    cmd()
        .arg(get_test_file_path("classic"))
        .arg("--no-color")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Objective value: 9.00"));
}

#[test]
fn optimal_quiet() {
    cmd()
        .arg(get_test_file_path("classic"))
        .args(["--no-color", "--quiet"])
        .assert()
        .code(0)
        .stdout(concat!(
            "+0.00\t+1.00\t+2.00\t+3.00\n",
            "+1.00\t+0.00\t-1.00\t+1.00\n",
            "+0.00\t+0.00\t+1.00\t+9.00\n",
            "\n",
            "Objective value: 9.00\n",
        ));
}

#[test]
fn first_profitable_rule() {
    cmd()
        .arg(get_test_file_path("furniture"))
        .args(["--no-color", "--quiet", "--pivot-rule", "first"])
        .assert()
        .code(0)
        .stdout(predicate::str::ends_with("Objective value: 16.00\n"));
}

#[test]
fn degenerate_pivot() {
    cmd()
        .arg(get_test_file_path("unbounded"))
        .arg("--no-color")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("should be strictly positive"));
}

#[test]
fn missing_file() {
    cmd()
        .arg(get_test_file_path("does_not_exist"))
        .arg("--no-color")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("could not read input file"));
}

#[test]
fn truncated_file() {
    cmd()
        .arg(get_test_file_path("truncated"))
        .arg("--no-color")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("expected 12 values, found 7"));
}
