//! CLI Integration Tests
//!
//! Drive the `carelink` binary against a JSON fixture file in a temp dir.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Write a fixture with two patients and a short conversation.
fn write_fixture(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("care.json");
    let fixture = json!({
        "patients": [
            { "id": "P1", "fullName": "Alice Chen" },
            { "id": "P2", "fullName": "Bob Lin" }
        ],
        "messages": [
            {
                "id": "m1",
                "senderId": "P1",
                "receiverId": "A1",
                "content": "My prescription ran out",
                "isRead": false,
                "createdAt": "2024-06-01T08:00:00Z"
            },
            {
                "id": "m2",
                "senderId": "A1",
                "receiverId": "P1",
                "content": "A refill has been ordered",
                "isRead": true,
                "createdAt": "2024-06-01T09:00:00Z"
            }
        ]
    });
    std::fs::write(&path, serde_json::to_vec_pretty(&fixture).unwrap()).unwrap();
    path
}

/// A CLI command bound to a fixture file, with env overrides cleared.
fn cli_cmd(fixture: &Path) -> Command {
    let mut cmd = Command::cargo_bin("carelink").expect("Failed to find carelink binary");
    cmd.env_remove("CARELINK_API_URL")
        .env_remove("CARELINK_USER_ID")
        .env_remove("CARELINK_ROLE")
        .arg("--data-file")
        .arg(fixture);
    cmd
}

// ============================================================================
// Roster
// ============================================================================

#[test]
fn test_patients_lists_roster() {
    let dir = TempDir::new().unwrap();
    let fixture = write_fixture(&dir);

    cli_cmd(&fixture)
        .args(["--user-id", "A1", "patients"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice Chen  (2 messages) [unread]"))
        .stdout(predicate::str::contains("Bob Lin  (0 messages)"))
        .stdout(predicate::str::contains("ID: P2"));
}

#[test]
fn test_patients_search_filters() {
    let dir = TempDir::new().unwrap();
    let fixture = write_fixture(&dir);

    cli_cmd(&fixture)
        .args(["--user-id", "A1", "patients", "--search", "ALI"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice Chen"))
        .stdout(predicate::str::contains("Bob Lin").not());

    cli_cmd(&fixture)
        .args(["--user-id", "A1", "patients", "--search", "zed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching patients."));
}

#[test]
fn test_patients_rejected_for_patient_role() {
    let dir = TempDir::new().unwrap();
    let fixture = write_fixture(&dir);

    cli_cmd(&fixture)
        .args(["--user-id", "P1", "--role", "patient", "patients"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("only available to administrators"));
}

// ============================================================================
// Threads
// ============================================================================

#[test]
fn test_thread_for_selected_patient() {
    let dir = TempDir::new().unwrap();
    let fixture = write_fixture(&dir);

    let output = cli_cmd(&fixture)
        .args(["--user-id", "A1", "thread", "--patient", "P1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Thread: P1 (2 messages)"));

    // Newest first
    let refill = stdout.find("A refill has been ordered").unwrap();
    let ran_out = stdout.find("My prescription ran out").unwrap();
    assert!(refill < ran_out);
    assert!(stdout.contains("me: A refill has been ordered"));
    assert!(stdout.contains("P1: My prescription ran out (unread)"));
}

#[test]
fn test_patient_sees_own_thread() {
    let dir = TempDir::new().unwrap();
    let fixture = write_fixture(&dir);

    cli_cmd(&fixture)
        .args(["--user-id", "P2", "--role", "patient", "thread"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Thread: P2 (0 messages)"))
        .stdout(predicate::str::contains("No messages."));
}

// ============================================================================
// Sending
// ============================================================================

#[test]
fn test_send_appends_message() {
    let dir = TempDir::new().unwrap();
    let fixture = write_fixture(&dir);

    cli_cmd(&fixture)
        .args(["--user-id", "A1", "send", "--to", "P2", "Please book a follow-up"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Message sent"));

    cli_cmd(&fixture)
        .args(["--user-id", "A1", "thread", "--patient", "P2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("me: Please book a follow-up"));
}

#[test]
fn test_send_blank_fails() {
    let dir = TempDir::new().unwrap();
    let fixture = write_fixture(&dir);

    cli_cmd(&fixture)
        .args(["--user-id", "A1", "send", "--to", "P1", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to send"));
}

#[test]
fn test_admin_send_requires_receiver() {
    let dir = TempDir::new().unwrap();
    let fixture = write_fixture(&dir);

    cli_cmd(&fixture)
        .args(["--user-id", "A1", "send", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--to"));
}

#[test]
fn test_invalid_role_rejected() {
    let dir = TempDir::new().unwrap();
    let fixture = write_fixture(&dir);

    cli_cmd(&fixture)
        .args(["--user-id", "A1", "--role", "surgeon", "patients"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid role"));
}
