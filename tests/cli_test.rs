/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary and verify command-line behavior
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

#[test]
fn test_cli_no_command_shows_help_message() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_brainlearn"));
    cmd.assert().success().stdout(predicate::str::contains("Use --help for usage information"));
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_brainlearn"));
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Explore subjects through an interactive brain map"))
        .stdout(predicate::str::contains("subjects"))
        .stdout(predicate::str::contains("ask"));
}

#[test]
fn test_cli_version_flag() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_brainlearn"));
    cmd.arg("--version").assert().success().stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_cli_invalid_command() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_brainlearn"));
    cmd.arg("invalid-command").assert().failure();
}

#[test]
fn test_cli_subjects_lists_registry() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_brainlearn"));
    cmd.arg("subjects")
        .assert()
        .success()
        .stdout(predicate::str::contains("BrainLearn Subjects"))
        .stdout(predicate::str::contains("Mathematics"))
        .stdout(predicate::str::contains("Technology"))
        .stdout(predicate::str::contains("Total subjects: 6"));
}

#[test]
fn test_cli_subjects_json_output() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_brainlearn"));
    let output = cmd.arg("subjects").arg("--json").assert().success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let list = parsed.as_array().unwrap();
    assert_eq!(list.len(), 6);
    assert_eq!(list[0]["id"], "math");
    assert_eq!(list[0]["name"], "Mathematics");
}

#[test]
fn test_cli_greet_known_subject() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_brainlearn"));
    cmd.arg("greet")
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fascinated by History?"));
}

#[test]
fn test_cli_greet_unknown_subject_uses_default() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_brainlearn"));
    cmd.arg("greet")
        .arg("astrology")
        .assert()
        .success()
        .stdout(predicate::str::contains("What subject would you like to explore"));
}

#[test]
fn test_cli_ask_with_math_subject() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_brainlearn"));
    cmd.arg("ask")
        .arg("--subject")
        .arg("math")
        .arg("can you explain this equation")
        .assert()
        .success()
        .stdout(predicate::str::contains("mathematics"));
}

#[test]
fn test_cli_ask_greeting_without_subject() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_brainlearn"));
    cmd.arg("ask")
        .arg("hi")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello there!"));
}

#[test]
fn test_cli_ask_fallback_reply() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_brainlearn"));
    cmd.arg("ask")
        .arg("completely unrelated question")
        .assert()
        .success()
        .stdout(predicate::str::contains("demo version"));
}
