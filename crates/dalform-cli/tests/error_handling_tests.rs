//! Tests for error handling, suggestions and exit codes.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn dalform(dir: &TempDir) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("dalform");
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .env("XDG_CONFIG_HOME", dir.path().join("xdg"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_error_missing_payload_file() {
    let dir = TempDir::new().unwrap();
    dalform(&dir)
        .args(["question", "nope.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Input file not found"))
        .stderr(predicate::str::contains("stdin"));
}

#[test]
fn test_error_malformed_json() {
    let dir = TempDir::new().unwrap();
    dalform(&dir)
        .arg("question")
        .write_stdin("{\"title\": ")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("line 1"));
}

#[test]
fn test_error_empty_payload() {
    let dir = TempDir::new().unwrap();
    dalform(&dir)
        .arg("register")
        .write_stdin("   ")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("payload is empty"));
}

#[test]
fn test_non_object_payload_fails_every_field() {
    let dir = TempDir::new().unwrap();
    dalform(&dir)
        .arg("question")
        .write_stdin("[1, 2, 3]")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Title is required"))
        .stdout(predicate::str::contains("Description is required"))
        .stdout(predicate::str::contains("Tags must be an array"));
}

#[test]
fn test_error_contradictory_rules() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("bad.toml");
    fs::write(&config, "[rules]\ntitle_min = 200\ntitle_max = 10\n").unwrap();

    dalform(&dir)
        .arg("--config")
        .arg(&config)
        .args(["email", "student@dal.ca"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("configuration"));
}

#[test]
fn test_error_explicit_config_missing() {
    let dir = TempDir::new().unwrap();
    dalform(&dir)
        .args(["--config", "missing.toml", "config", "list"])
        .assert()
        .code(4);
}

#[test]
fn test_error_unknown_config_key() {
    let dir = TempDir::new().unwrap();
    dalform(&dir)
        .args(["config", "get", "rules.tags_min"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"))
        .stderr(predicate::str::contains("rules.tags_max"));
}

#[test]
fn test_error_unknown_subcommand() {
    let dir = TempDir::new().unwrap();
    dalform(&dir).arg("publish").assert().code(2);
}

#[test]
fn test_verbose_hides_hint() {
    let dir = TempDir::new().unwrap();
    dalform(&dir)
        .args(["-v", "email", "nobody@example.com"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Use -v / --verbose").not());
}

fn occurrences(needle: &'static str, expected: usize) -> impl predicates::Predicate<str> {
    predicate::function(move |s: &str| s.matches(needle).count() == expected)
}

#[test]
fn test_validation_failure_reported_once() {
    let dir = TempDir::new().unwrap();
    dalform(&dir)
        .args(["email", "nobody@example.com"])
        .assert()
        .code(2)
        .stderr(occurrences("Error:", 1))
        .stderr(occurrences("failed validation", 1))
        .stderr(predicate::str::contains("WARN").not());
}

#[test]
fn test_missing_file_reported_once() {
    let dir = TempDir::new().unwrap();
    dalform(&dir)
        .args(["question", "nope.json"])
        .assert()
        .code(3)
        .stderr(occurrences("Input file not found", 1));
}

#[test]
fn test_quiet_failure_still_reports_error() {
    let dir = TempDir::new().unwrap();
    dalform(&dir)
        .args(["--quiet", "email", "nobody@example.com"])
        .assert()
        .code(2)
        .stderr(occurrences("failed validation", 1));
}

#[test]
fn test_suggestions_on_validation_failure() {
    let dir = TempDir::new().unwrap();
    dalform(&dir)
        .args(["email", "nobody@example.com"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Suggestions:"))
        .stderr(predicate::str::contains("--output-format json"));
}
