// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI integration tests for the informational commands (demos, config,
//! completions)

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn tk() -> Command {
    Command::cargo_bin("tk").unwrap()
}

#[test]
fn test_help_lists_subcommands() {
    tk().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("demos"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_demos_lists_every_demo() {
    let assert = tk().arg("demos").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    for name in [
        "blink",
        "timer-blink",
        "tasks",
        "pwm",
        "adc",
        "handoff",
        "mutex",
        "queue",
    ] {
        assert!(
            stdout.lines().any(|l| l.starts_with(name)),
            "missing {}:\n{}",
            name,
            stdout
        );
    }
}

#[test]
fn test_demos_json_is_an_array() {
    let assert = tk().args(["demos", "--format", "json"]).assert().success();
    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();

    let demos = json.as_array().unwrap();
    assert_eq!(demos.len(), 8);
    assert_eq!(demos[0]["name"], "blink");
    assert!(!demos[0]["description"].as_str().unwrap().is_empty());
}

#[test]
fn test_config_defaults_as_toml() {
    tk().arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[queue]"))
        .stdout(predicate::str::contains("capacity = 20"))
        .stdout(predicate::str::contains("\"7s\""));
}

#[test]
fn test_config_json_reflects_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[queue]\ncapacity = 5\n\n[pins]\nred = 4").unwrap();

    let assert = tk()
        .arg("--config")
        .arg(file.path())
        .args(["config", "--format", "json"])
        .assert()
        .success();
    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert_eq!(json["queue"]["capacity"], 5);
    assert_eq!(json["pins"]["red"], 4);
    assert_eq!(json["pins"]["green"], 25);
}

#[test]
fn test_invalid_config_fails_with_suggestions() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[queue]\ncapacity = 0").unwrap();

    tk().arg("--config")
        .arg(file.path())
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("queue.capacity"))
        .stderr(predicate::str::contains("suggestions:"));
}

#[test]
fn test_missing_config_file_fails() {
    tk().args(["--config", "/nonexistent/tk.toml", "demos"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/tk.toml"));
}

#[test]
fn test_completions_bash() {
    tk().args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_tk"));
}
