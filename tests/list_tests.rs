//! Integration tests for list command

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::moodlog_cmd;

fn backfill(temp: &TempDir, mood: &str, at: &str) {
    moodlog_cmd()
        .current_dir(temp.path())
        .arg("log")
        .arg(mood)
        .arg("--at")
        .arg(at)
        .assert()
        .success();
}

#[test]
fn test_list_no_entries() {
    let temp = TempDir::new().unwrap();

    moodlog_cmd().arg("init").arg(temp.path()).assert().success();

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No moods logged"));
}

#[test]
fn test_list_sorted_newest_first() {
    let temp = TempDir::new().unwrap();

    moodlog_cmd().arg("init").arg(temp.path()).assert().success();

    backfill(&temp, "2", "10-06-2024 08:00");
    backfill(&temp, "5", "20-06-2024 08:00");
    backfill(&temp, "3", "15-06-2024 08:00");

    let output = moodlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    // Should be sorted newest first
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("20-06-2024"));
    assert!(lines[1].contains("15-06-2024"));
    assert!(lines[2].contains("10-06-2024"));
}

#[test]
fn test_list_with_date_range() {
    let temp = TempDir::new().unwrap();

    moodlog_cmd().arg("init").arg(temp.path()).assert().success();

    backfill(&temp, "2", "10-06-2024 08:00");
    backfill(&temp, "3", "15-06-2024 08:00");
    backfill(&temp, "5", "20-06-2024 08:00");

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .arg("--from")
        .arg("12-06-2024")
        .arg("--to")
        .arg("18-06-2024")
        .assert()
        .success()
        .stdout(predicate::str::contains("15-06-2024"))
        .stdout(predicate::str::contains("10-06-2024").not())
        .stdout(predicate::str::contains("20-06-2024").not());
}

#[test]
fn test_list_with_from_only() {
    let temp = TempDir::new().unwrap();

    moodlog_cmd().arg("init").arg(temp.path()).assert().success();

    backfill(&temp, "2", "10-06-2024 08:00");
    backfill(&temp, "5", "20-06-2024 08:00");

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .arg("--from")
        .arg("15-06-2024")
        .assert()
        .success()
        .stdout(predicate::str::contains("20-06-2024"))
        .stdout(predicate::str::contains("10-06-2024").not());
}

#[test]
fn test_list_with_limit() {
    let temp = TempDir::new().unwrap();

    moodlog_cmd().arg("init").arg(temp.path()).assert().success();

    backfill(&temp, "2", "10-06-2024 08:00");
    backfill(&temp, "3", "15-06-2024 08:00");
    backfill(&temp, "5", "20-06-2024 08:00");

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .arg("--limit")
        .arg("2")
        .assert()
        .success()
        .stdout(predicate::str::contains("20-06-2024"))
        .stdout(predicate::str::contains("15-06-2024"))
        .stdout(predicate::str::contains("10-06-2024").not());
}

#[test]
fn test_list_invalid_date_fails() {
    let temp = TempDir::new().unwrap();

    moodlog_cmd().arg("init").arg(temp.path()).assert().success();

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .arg("--from")
        .arg("2024-06-15")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Invalid date"))
        .stderr(predicate::str::contains("DD-MM-YYYY"));
}
