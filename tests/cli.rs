//! End-to-end behaviour of the `tinygrep` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn tinygrep() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("tinygrep"))
}

#[test]
fn match_exits_zero() {
    tinygrep()
        .args(["-E", r"\d apple"])
        .write_stdin("sally has 3 apples\n")
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());
}

#[test]
fn no_match_exits_one() {
    tinygrep()
        .args(["-E", r"\d"])
        .write_stdin("dog\n")
        .assert()
        .code(1);
}

#[test]
fn trailing_newline_does_not_break_end_anchor() {
    tinygrep()
        .args(["-E", "^cat$"])
        .write_stdin("cat\n")
        .assert()
        .code(0);
}

#[test]
fn bad_pattern_exits_two_with_message() {
    tinygrep()
        .args(["-E", "[abc"])
        .write_stdin("abc\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unclosed character class"));
}

#[test]
fn empty_pattern_is_an_error() {
    tinygrep()
        .args(["-E", ""])
        .write_stdin("abc\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("empty pattern"));
}

#[test]
fn missing_flag_is_a_usage_error() {
    tinygrep().write_stdin("abc\n").assert().code(2);
}

#[test]
fn logging_goes_to_stderr() {
    tinygrep()
        .args(["-E", "cat"])
        .env("TINYGREP_LOG", "debug")
        .write_stdin("a cat\n")
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("matched"));
}
