// tests/integration/extract_display.rs
use std::{
    fs,
    time::{Duration, UNIX_EPOCH},
};

use predicates::prelude::*;
use serde_json::Value;

#[path = "../common/mod.rs"]
mod common;
use common::{Workspace, bin};

#[test]
fn text_output_lists_every_field() {
    let ws = Workspace::new();
    let a = ws.write_file("a.txt", "hello");

    bin()
        .arg(&a)
        .assert()
        .success()
        .stdout(predicate::str::contains("File Name          : a.txt"))
        .stdout(predicate::str::contains("File Type          : .txt"))
        .stdout(predicate::str::contains("File Size (bytes)  : 5"))
        .stdout(predicate::str::contains("Creation Time"))
        .stdout(predicate::str::contains("Last Accessed Time"))
        .stderr(predicate::str::contains("Loaded 1 file(s)"));
}

#[test]
fn missing_file_is_reported_and_batch_continues() {
    let ws = Workspace::new();
    let missing = ws.join("nope.txt");
    let b = ws.write_file("b.md", "");

    bin()
        .arg(&missing)
        .arg(&b)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Error : File not found: {}", missing.display())))
        .stdout(predicate::str::contains("File Name          : b.md"))
        .stderr(predicate::str::contains("Loaded 2 file(s)"));
}

#[test]
fn strict_turns_failures_into_exit_status() {
    let ws = Workspace::new();
    let a = ws.write_file("a.txt", "");

    bin()
        .arg(&a)
        .arg(ws.join("missing"))
        .arg("--strict")
        .assert()
        .failure()
        .stdout(predicate::str::contains("File not found"));
}

#[test]
fn json_output_keeps_order_and_field_names() {
    let ws = Workspace::new();
    let a = ws.write_file("a.txt", "");
    let missing = ws.join("missing.bin");

    let output = bin().args(["--format", "json"]).arg(&a).arg(&missing).output().unwrap();
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["File Name"], "a.txt");
    assert_eq!(items[0]["File Type"], ".txt");
    assert_eq!(items[0]["File Size (bytes)"], 0);
    assert_eq!(items[1]["Error"], format!("File not found: {}", missing.display()));
}

#[test]
fn table_output_has_header_and_error_list() {
    let ws = Workspace::new();
    let a = ws.write_file("a.txt", "");

    bin()
        .args(["--format", "table"])
        .arg(&a)
        .arg(ws.join("gone"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Last Modified Time"))
        .stdout(predicate::str::contains("a.txt"))
        .stdout(predicate::str::contains("Errors:"));
}

#[test]
fn files_from_appends_listed_paths() {
    let ws = Workspace::new();
    let a = ws.write_file("a.txt", "");
    let b = ws.write_file("b.log", "xy");
    let list = ws.write_file("list.txt", &format!("{}\n\n{}\n", b.display(), ws.join("c").display()));

    let output = bin()
        .args(["--format", "json"])
        .arg(&a)
        .arg("--files-from")
        .arg(&list)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["File Name"], "a.txt");
    assert_eq!(items[1]["File Name"], "b.log");
    assert!(items[2]["Error"].as_str().unwrap().starts_with("File not found"));
}

#[test]
fn quiet_suppresses_output_pane() {
    let ws = Workspace::new();
    let a = ws.write_file("a.txt", "");

    bin()
        .arg(&a)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Loaded 1 file(s)"));
}

#[cfg(unix)]
#[test]
fn unreadable_path_is_reported_and_batch_continues() {
    let ws = Workspace::new();
    let file = ws.write_file("file.txt", "x");
    let child = file.join("child");
    let b = ws.write_file("b.md", "");

    bin()
        .arg(&child)
        .arg(&b)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Error : An error occurred for {}: ", child.display())))
        .stdout(predicate::str::contains("File Name          : b.md"))
        .stderr(predicate::str::contains("Loaded 2 file(s)"));
}

#[test]
fn far_future_timestamp_does_not_lose_the_batch() {
    let ws = Workspace::new();
    let good = ws.write_file("good.txt", "");
    let far_path = ws.write_file("far.txt", "");
    let far = UNIX_EPOCH + Duration::from_secs(10_000_000_000_000);
    let file = fs::File::options().write(true).open(&far_path).unwrap();
    if file.set_modified(far).is_err() {
        return;
    }
    drop(file);

    let output = bin().args(["--format", "json"]).arg(&good).arg(&far_path).output().unwrap();
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["File Name"], "good.txt");
    if fs::metadata(&far_path).unwrap().modified().unwrap() == far {
        assert_eq!(
            items[1]["Error"],
            format!("An error occurred for {}: timestamp out of range", far_path.display())
        );
    }
}
