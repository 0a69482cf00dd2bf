//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary against a throwaway data directory and
//! verify outputs.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_ritualroom"))
        .args(args)
        .env("RITUALROOM_DATA_DIR", data_dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_cli_success(data_dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(data_dir, args);
    assert_eq!(code, 0, "CLI command failed: {:?}\n{}", args, stderr);
    stdout
}

fn parse_json(json: &str) -> serde_json::Value {
    serde_json::from_str(json).expect("Failed to parse JSON output")
}

#[test]
fn test_template_list() {
    let dir = tempfile::tempdir().unwrap();
    let stdout = run_cli_success(dir.path(), &["template", "list"]);
    assert!(stdout.contains("wake-up"));
    assert!(stdout.contains("Workout for 45 minutes"));
}

#[test]
fn test_check_then_show_json() {
    let dir = tempfile::tempdir().unwrap();
    run_cli_success(dir.path(), &["day", "check", "run", "--date", "2024-06-05"]);

    let stdout = run_cli_success(dir.path(), &["day", "show", "--date", "2024-06-05", "--json"]);
    let day = parse_json(&stdout);
    assert_eq!(day["tracked"], true);
    assert_eq!(day["progress"], 11);
    let run = day["rituals"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["id"] == "run")
        .unwrap();
    assert_eq!(run["completed"], true);
    assert_eq!(run["type"], "checkbox");
}

#[test]
fn test_undo_check() {
    let dir = tempfile::tempdir().unwrap();
    run_cli_success(dir.path(), &["day", "check", "steps", "--date", "2024-06-05"]);
    run_cli_success(dir.path(), &["day", "check", "steps", "--date", "2024-06-05", "--undo"]);

    let stdout = run_cli_success(
        dir.path(),
        &["stats", "progress", "--date", "2024-06-05"],
    );
    let stats = parse_json(&stdout);
    assert_eq!(stats["completed"], 0);
    assert_eq!(stats["total"], 9);
}

#[test]
fn test_time_ritual_and_validation() {
    let dir = tempfile::tempdir().unwrap();
    run_cli_success(dir.path(), &["day", "time", "wake-up", "07:30", "--date", "2024-06-05"]);

    let stdout = run_cli_success(dir.path(), &["day", "show", "--date", "2024-06-05"]);
    assert!(stdout.contains("7:30 AM"));

    let (_, stderr, code) = run_cli(dir.path(), &["day", "time", "wake-up", "7.30pm"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("invalid time"));

    let (_, stderr, code) = run_cli(dir.path(), &["day", "check", "wake-up"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("time ritual"));

    let (_, stderr, code) = run_cli(dir.path(), &["day", "check", "juggling"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown ritual"));
}

#[test]
fn test_journal_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    run_cli_success(
        dir.path(),
        &["journal", "set", "Quiet morning", "--date", "2024-06-05"],
    );
    let stdout = run_cli_success(dir.path(), &["journal", "show", "--date", "2024-06-05"]);
    assert_eq!(stdout.trim(), "Quiet morning");
}

#[test]
fn test_export_writes_month_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    run_cli_success(dir.path(), &["day", "check", "stretching", "--date", "2024-06-05"]);
    run_cli_success(dir.path(), &["journal", "set", "He said \"hi\"", "--date", "2024-06-05"]);

    let out_dir = out.path().to_str().unwrap();
    run_cli_success(
        dir.path(),
        &["export", "--month", "2024-06", "--out", out_dir],
    );

    let csv = std::fs::read_to_string(out.path().join("rituals-2024-06.csv")).unwrap();
    let lines: Vec<&str> = csv.split('\n').collect();
    assert_eq!(lines.len(), 31);
    assert!(lines[0].starts_with("Date,Wake up time,Stretching"));
    assert_eq!(lines[5], r#"2024-06-05,,Yes,No,No,No,No,No,No,,"He said ""hi""""#);
}

#[test]
fn test_calendar_json() {
    let dir = tempfile::tempdir().unwrap();
    run_cli_success(dir.path(), &["day", "check", "run", "--date", "2024-06-05"]);

    let stdout = run_cli_success(dir.path(), &["calendar", "--month", "2024-06", "--json"]);
    let summary = parse_json(&stdout);
    assert_eq!(summary["days"].as_array().unwrap().len(), 30);
    assert_eq!(summary["leading_blanks"], 6);
    assert_eq!(summary["days"][4]["level"], "low");
    assert_eq!(summary["tracked_days"], 1);
}

#[test]
fn test_config_set_and_get() {
    let dir = tempfile::tempdir().unwrap();
    run_cli_success(dir.path(), &["config", "set", "display.hour12", "false"]);
    let stdout = run_cli_success(dir.path(), &["config", "get", "display.hour12"]);
    assert_eq!(stdout.trim(), "false");

    let (_, _, code) = run_cli(dir.path(), &["config", "get", "display.nope"]);
    assert_ne!(code, 0);
}

#[test]
fn test_invalid_month_fails() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["export", "--month", "2024-13"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_malformed_config_falls_back_with_warning() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[[rituals]\nid = ").unwrap();

    let (stdout, stderr, code) = run_cli(dir.path(), &["template", "list"]);
    assert_eq!(code, 0, "{stderr}");
    assert!(stdout.contains("wake-up"));
    assert!(stderr.contains("failed to load config"));
}
