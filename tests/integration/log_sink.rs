// tests/integration/log_sink.rs
use std::fs;

#[path = "../common/mod.rs"]
mod common;
use common::{Workspace, bin};

#[test]
fn missing_files_are_appended_to_log_file() {
    let ws = Workspace::new();
    let log = ws.write_file("errors.log", "previous run\n");
    let missing = ws.join("nope.txt");

    bin().arg(&missing).arg("--log-file").arg(&log).arg("--quiet").assert().success();

    let text = fs::read_to_string(&log).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "previous run");
    assert!(
        lines
            .iter()
            .any(|l| l.contains("WARN") && l.ends_with(&format!("File not found: {}", missing.display())))
    );
}

#[test]
fn export_errors_are_logged() {
    let ws = Workspace::new();
    let a = ws.write_file("a.txt", "");
    let log = ws.join("errors.log");

    bin()
        .arg(&a)
        .arg("--export")
        .arg(ws.join("missing-dir/out.csv"))
        .arg("--log-file")
        .arg(&log)
        .arg("--quiet")
        .assert()
        .failure();

    let text = fs::read_to_string(&log).unwrap();
    assert!(text.lines().any(|l| l.contains("ERROR") && l.contains("Export error: ")));
}

#[test]
fn log_level_filters_warnings() {
    let ws = Workspace::new();
    let log = ws.join("errors.log");

    bin()
        .arg(ws.join("nope"))
        .args(["--log-level", "error", "--quiet", "--log-file"])
        .arg(&log)
        .assert()
        .success();

    let text = fs::read_to_string(&log).unwrap_or_default();
    assert!(!text.contains("File not found"));
}

#[test]
fn log_level_can_come_from_environment() {
    let ws = Workspace::new();
    let a = ws.write_file("a.txt", "");
    let log = ws.join("debug.log");

    bin()
        .env("FILE_METADATA_LOG", "debug")
        .arg(&a)
        .arg("--quiet")
        .arg("--log-file")
        .arg(&log)
        .assert()
        .success();

    let text = fs::read_to_string(&log).unwrap();
    assert!(text.contains("DEBUG"));
}

#[cfg(unix)]
#[test]
fn unreadable_paths_are_logged_with_details() {
    let ws = Workspace::new();
    let file = ws.write_file("file.txt", "x");
    let child = file.join("child");
    let log = ws.join("errors.log");

    bin().arg(&child).arg("--log-file").arg(&log).arg("--quiet").assert().success();

    let text = fs::read_to_string(&log).unwrap();
    let prefix = format!("Error with {}: ", child.display());
    assert!(text.lines().any(|l| l.contains("WARN") && l.contains(&prefix)));
}
