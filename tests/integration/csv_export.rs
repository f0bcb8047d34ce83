// tests/integration/csv_export.rs
use std::fs;

use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::{Workspace, bin, read_csv};

const HEADER: [&str; 6] = [
    "File Name",
    "File Type",
    "File Size (bytes)",
    "Creation Time",
    "Last Modified Time",
    "Last Accessed Time",
];

#[test]
fn exports_header_and_one_row_per_record() {
    let ws = Workspace::new();
    let a = ws.write_file("a.txt", "");
    let b = ws.write_file("data.json", "{}");
    let dest = ws.join("out.csv");

    bin()
        .arg(&a)
        .arg(&b)
        .arg("--export")
        .arg(&dest)
        .assert()
        .success()
        .stderr(predicate::str::contains(format!("Metadata exported to {}", dest.display())));

    let text = fs::read_to_string(&dest).unwrap();
    assert_eq!(text.lines().count(), 3);
    assert_eq!(text.lines().next().unwrap(), HEADER.join(","));

    let (header, rows) = read_csv(&dest);
    assert_eq!(header, HEADER);
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][..3], ["a.txt", ".txt", "0"]);
    assert_eq!(&rows[1][..3], ["data.json", ".json", "2"]);
}

#[test]
fn failures_are_excluded_from_export() {
    let ws = Workspace::new();
    let a = ws.write_file("a.txt", "abc");
    let dest = ws.join("out.csv");

    bin()
        .arg(ws.join("missing.txt"))
        .arg(&a)
        .arg("--export")
        .arg(&dest)
        .assert()
        .success();

    let (_, rows) = read_csv(&dest);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "a.txt");
    assert_eq!(rows[0][2], "3");
}

#[test]
fn names_with_commas_and_quotes_round_trip() {
    let ws = Workspace::new();
    let odd = ws.write_file("a, \"quoted\".txt", "");
    let dest = ws.join("out.csv");

    bin().arg(&odd).arg("--export").arg(&dest).assert().success();

    let (_, rows) = read_csv(&dest);
    assert_eq!(rows[0][0], "a, \"quoted\".txt");
    assert_eq!(rows[0][1], ".txt");
}

#[test]
fn nothing_to_export_warns_and_creates_no_file() {
    let ws = Workspace::new();
    let dest = ws.join("out.csv");

    bin()
        .arg(ws.join("missing"))
        .arg("--export")
        .arg(&dest)
        .assert()
        .success()
        .stderr(predicate::str::contains("No metadata to export."));

    assert!(!dest.exists());
}

#[test]
fn nothing_to_export_leaves_existing_file_untouched() {
    let ws = Workspace::new();
    let dest = ws.write_file("out.csv", "keep me\n");

    bin().arg(ws.join("missing")).arg("--export").arg(&dest).assert().success();

    assert_eq!(fs::read_to_string(&dest).unwrap(), "keep me\n");
}

#[test]
fn destination_without_extension_gets_csv() {
    let ws = Workspace::new();
    let a = ws.write_file("a.txt", "");

    bin()
        .arg(&a)
        .arg("--export")
        .arg(ws.join("report"))
        .arg("--quiet")
        .assert()
        .success();

    assert!(ws.join("report.csv").exists());
    assert!(!ws.join("report").exists());
}

#[test]
fn unwritable_destination_fails() {
    let ws = Workspace::new();
    let a = ws.write_file("a.txt", "");
    let dest = ws.join("no/such/dir/out.csv");

    bin()
        .arg(&a)
        .arg("--export")
        .arg(&dest)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to export metadata:"));
}

#[test]
fn directory_destination_is_rejected_up_front() {
    let ws = Workspace::new();
    let a = ws.write_file("a.txt", "");

    bin()
        .arg(&a)
        .arg("--export")
        .arg(ws.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("is a directory"));
}
