//! CLI Integration Tests
//!
//! Tests the CLI binary directly using assert_cmd to exercise main.rs code paths.
//!
//! # Coverage Exclusion
//! These tests are skipped during coverage runs.

#![cfg(not(coverage))]
#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

use assert_cmd::Command;
use predicates::prelude::*;
use rust_xlsxwriter::Workbook;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_script(dir: &TempDir, file: &str, sheets: &[(&str, Vec<Vec<&str>>)]) -> PathBuf {
    let script_dir = dir.path().join("demo").join("artifact").join("script");
    fs::create_dir_all(&script_dir).unwrap();
    let path = script_dir.join(file);

    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).unwrap();
        for (col, header) in ["activity", "description", "cmd type", "command"]
            .iter()
            .enumerate()
        {
            worksheet.write_string(3, col as u16, *header).unwrap();
        }
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if !value.is_empty() {
                    worksheet
                        .write_string(4 + r as u32, c as u16, *value)
                        .unwrap();
                }
            }
        }
    }
    workbook.save(&path).unwrap();
    path
}

fn good_script(dir: &TempDir) -> PathBuf {
    write_script(
        dir,
        "good.xlsx",
        &[
            (
                "Smoke",
                vec![
                    vec!["Open Browser", "", "web", "open(url)"],
                    vec!["", "", "web", "waitFor(locator)"],
                    vec!["Login", "", "web", "click(locator)"],
                ],
            ),
            ("(NAT) Later", vec![vec!["Skip", "", "web", "noop"]]),
        ],
    )
}

fn bad_script(dir: &TempDir) -> PathBuf {
    write_script(
        dir,
        "bad.xlsx",
        &[(
            "Smoke",
            vec![vec!["Login", "", "web", "a"], vec!["Login", "", "web", "b"]],
        )],
    )
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP AND VERSION TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("tms-script").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tms-script"))
        .stdout(predicate::str::contains("COMMANDS"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("tms-script").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tms-script"));
}

#[test]
fn test_validate_requires_files() {
    let mut cmd = Command::cargo_bin("tms-script").unwrap();
    cmd.arg("validate").assert().failure();
}

// ═══════════════════════════════════════════════════════════════════════════
// PARSE
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_parse_tree_output() {
    let dir = TempDir::new().unwrap();
    let script = good_script(&dir);

    let mut cmd = Command::cargo_bin("tms-script").unwrap();
    cmd.env("NO_COLOR", "1")
        .arg("parse")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Open Browser (2 steps)"))
        .stdout(predicate::str::contains("Login (1 steps)"))
        .stdout(predicate::str::contains("1 test cases, 2 activities, 3 steps"))
        .stdout(predicate::str::contains("(NAT) Later").not());
}

#[test]
fn test_parse_json_output() {
    let dir = TempDir::new().unwrap();
    let script = good_script(&dir);

    let output = Command::cargo_bin("tms-script")
        .unwrap()
        .args(["parse", "--format", "json"])
        .arg(&script)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["name"], "Smoke");
    assert_eq!(json[0]["activities"][0]["name"], "Open Browser");
    assert_eq!(json[0]["activities"][0]["steps"][1]["row"], 6);
    assert_eq!(json[0]["activities"][1]["test_case"], "Smoke");
}

#[test]
fn test_parse_reports_cell_of_duplicate() {
    let dir = TempDir::new().unwrap();
    let script = bad_script(&dir);

    let mut cmd = Command::cargo_bin("tms-script").unwrap();
    cmd.arg("parse")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error found in [bad.xlsx][Smoke][A6]: Found duplicate activity name 'Login'",
        ));
}

#[test]
fn test_parse_missing_file() {
    let mut cmd = Command::cargo_bin("tms-script").unwrap();
    cmd.args(["parse", "/definitely/missing.xlsx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

// ═══════════════════════════════════════════════════════════════════════════
// SCENARIOS / VALIDATE
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_scenarios_marks_not_applicable() {
    let dir = TempDir::new().unwrap();
    let script = good_script(&dir);

    let mut cmd = Command::cargo_bin("tms-script").unwrap();
    cmd.env("NO_COLOR", "1")
        .arg("scenarios")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Smoke"))
        .stdout(predicate::str::contains("(NAT) Later (skipped: not applicable)"));
}

#[test]
fn test_validate_batch_fails_if_any_script_fails() {
    let dir = TempDir::new().unwrap();
    let good = good_script(&dir);
    let bad = bad_script(&dir);

    let mut cmd = Command::cargo_bin("tms-script").unwrap();
    cmd.arg("validate")
        .arg(&good)
        .arg(&bad)
        .assert()
        .failure()
        .stdout(predicate::str::contains("good.xlsx (1 test cases)"))
        .stdout(predicate::str::contains("bad.xlsx"));
}

#[test]
fn test_layout_file_relaxes_project_check() {
    let dir = TempDir::new().unwrap();
    let good = good_script(&dir);
    let loose = dir.path().join("loose.xlsx");
    fs::copy(&good, &loose).unwrap();

    let mut cmd = Command::cargo_bin("tms-script").unwrap();
    cmd.arg("validate")
        .arg(&loose)
        .assert()
        .failure()
        .stderr(predicate::str::contains("standard project structure"));

    let layout = dir.path().join("layout.yaml");
    fs::write(&layout, "require_standard_project: false\n").unwrap();

    let mut cmd = Command::cargo_bin("tms-script").unwrap();
    cmd.arg("validate")
        .arg(&loose)
        .arg("--layout")
        .arg(&layout)
        .assert()
        .success();
}
