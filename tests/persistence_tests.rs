//! Integration tests for the durable entry slot across invocations

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::moodlog_cmd;

#[test]
fn test_entries_persist_across_invocations() {
    let temp = TempDir::new().unwrap();

    moodlog_cmd().arg("init").arg(temp.path()).assert().success();

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("log")
        .arg("4")
        .assert()
        .success();
    moodlog_cmd()
        .current_dir(temp.path())
        .arg("log")
        .arg("2")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 entries total"));

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("4/5"))
        .stdout(predicate::str::contains("2/5"));
}

#[test]
fn test_slot_file_has_expected_json_shape() {
    let temp = TempDir::new().unwrap();

    moodlog_cmd().arg("init").arg(temp.path()).assert().success();

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("log")
        .arg("4")
        .arg("--note")
        .arg("walk in the #park")
        .assert()
        .success();

    let payload = fs::read_to_string(temp.path().join(".moodlog/mood_entries.json")).unwrap();
    assert!(payload.starts_with('['));
    assert!(payload.contains("\"mood\":4"));
    assert!(payload.contains("\"timestamp\":"));
    assert!(payload.contains("\"note\":\"walk in the #park\""));
    assert!(payload.contains("\"tags\":[\"park\"]"));
}

#[test]
fn test_clear_empties_collection() {
    let temp = TempDir::new().unwrap();

    moodlog_cmd().arg("init").arg(temp.path()).assert().success();

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("log")
        .arg("4")
        .assert()
        .success();

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared all mood entries"));

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No moods logged"));

    // The slot is rewritten, not removed
    let payload = fs::read_to_string(temp.path().join(".moodlog/mood_entries.json")).unwrap();
    assert_eq!(payload, "[]");
}

#[test]
fn test_malformed_slot_is_fatal() {
    let temp = TempDir::new().unwrap();

    moodlog_cmd().arg("init").arg(temp.path()).assert().success();

    fs::write(
        temp.path().join(".moodlog/mood_entries.json"),
        "not valid json",
    )
    .unwrap();

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Entry data error"));
}

#[test]
fn test_discovery_walks_up_from_subdirectory() {
    let temp = TempDir::new().unwrap();

    moodlog_cmd().arg("init").arg(temp.path()).assert().success();

    let subdir = temp.path().join("nested").join("deep");
    fs::create_dir_all(&subdir).unwrap();

    moodlog_cmd()
        .current_dir(&subdir)
        .arg("log")
        .arg("3")
        .assert()
        .success();

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("3/5"));
}

#[test]
fn test_moodlog_root_env_points_at_tracker() {
    let temp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();

    moodlog_cmd().arg("init").arg(temp.path()).assert().success();

    moodlog_cmd()
        .current_dir(elsewhere.path())
        .env("MOODLOG_ROOT", temp.path())
        .arg("log")
        .arg("5")
        .assert()
        .success();

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("5/5"));
}
