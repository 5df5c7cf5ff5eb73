//! End-to-end tests for the `ledger` binary
//!
//! Each test runs against its own temp data directory via the
//! LEDGER_CLI_DATA_DIR override.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ledger_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ledger").unwrap();
    cmd.env("LEDGER_CLI_DATA_DIR", dir.path());
    cmd
}

/// Pull the short entry ID out of an `add` confirmation line
fn extract_entry_id(stdout: &[u8]) -> String {
    let text = String::from_utf8_lossy(stdout);
    let start = text.find("ent-").expect("no entry id in output");
    text[start..start + 12].to_string()
}

#[test]
fn add_deposit_updates_balances() {
    let dir = TempDir::new().unwrap();

    ledger_cmd(&dir)
        .args(["add", "deposit", "100", "--to", "savings", "--note", "paycheck"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded deposit of $100.00"));

    ledger_cmd(&dir)
        .arg("balances")
        .assert()
        .success()
        .stdout(predicate::str::contains("$100.00"));
}

#[test]
fn add_rejects_unknown_account() {
    let dir = TempDir::new().unwrap();

    ledger_cmd(&dir)
        .args(["add", "deposit", "100", "--to", "checking", "--note", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown account: checking"));
}

#[test]
fn add_rejects_missing_note() {
    let dir = TempDir::new().unwrap();

    ledger_cmd(&dir)
        .args(["add", "deposit", "100", "--to", "savings"])
        .assert()
        .failure();
}

#[test]
fn delete_reverses_balance_effect() {
    let dir = TempDir::new().unwrap();

    ledger_cmd(&dir)
        .args(["add", "deposit", "100", "--to", "savings", "--note", "pay"])
        .assert()
        .success();

    let output = ledger_cmd(&dir)
        .args([
            "add", "transfer", "60", "--from", "savings", "--to", "mgo", "--note", "move",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let transfer_id = extract_entry_id(&output);

    ledger_cmd(&dir)
        .args(["delete", &transfer_id, "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("balances reversed"));

    ledger_cmd(&dir)
        .arg("balances")
        .assert()
        .success()
        .stdout(predicate::str::contains("$100.00"))
        .stdout(predicate::str::contains("$0.00"));
}

#[test]
fn toggle_marks_entry_cleared() {
    let dir = TempDir::new().unwrap();

    let output = ledger_cmd(&dir)
        .args(["add", "deposit", "25", "--to", "fronted", "--note", "spot"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let id = extract_entry_id(&output);

    ledger_cmd(&dir)
        .args(["toggle", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("now cleared"));

    ledger_cmd(&dir)
        .args(["toggle", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("now uncleared"));
}

#[test]
fn list_is_descending_export_is_ascending() {
    let dir = TempDir::new().unwrap();

    ledger_cmd(&dir)
        .args([
            "add", "deposit", "10", "--to", "savings", "--note", "late",
            "--date", "2024-01-05",
        ])
        .assert()
        .success();
    ledger_cmd(&dir)
        .args([
            "add", "deposit", "20", "--to", "savings", "--note", "early",
            "--date", "2024-01-01",
        ])
        .assert()
        .success();

    let list = ledger_cmd(&dir).arg("list").assert().success();
    let list_out = String::from_utf8_lossy(&list.get_output().stdout).to_string();
    let first_row = list_out
        .lines()
        .find(|l| l.contains("2024-01-"))
        .unwrap()
        .to_string();
    assert!(first_row.contains("2024-01-05"));

    let csv_path = dir.path().join("out.csv");
    ledger_cmd(&dir)
        .args(["export", "--output"])
        .arg(&csv_path)
        .assert()
        .success();

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Date,Type,From,To,Amount,Note,Cleared");
    assert!(lines[1].starts_with("2024-01-01"));
    assert!(lines[2].starts_with("2024-01-05"));
}

#[test]
fn export_outside_range_is_header_only() {
    let dir = TempDir::new().unwrap();

    ledger_cmd(&dir)
        .args([
            "add", "deposit", "10", "--to", "savings", "--note", "x",
            "--date", "2024-01-05",
        ])
        .assert()
        .success();

    let csv_path = dir.path().join("out.csv");
    ledger_cmd(&dir)
        .args(["export", "--from-date", "2030-01-01", "--balances", "--output"])
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 0 entries"));

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(
        csv,
        "Date,Type,From,To,Amount,Note,Cleared,Savings After,MGO After,Fronted After\n"
    );
}

#[test]
fn archive_discards_history_keeps_balances() {
    let dir = TempDir::new().unwrap();

    ledger_cmd(&dir)
        .args(["add", "deposit", "100", "--to", "savings", "--note", "pay"])
        .assert()
        .success();

    ledger_cmd(&dir)
        .args(["archive", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Archived 1 entries"));

    ledger_cmd(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries recorded."));

    ledger_cmd(&dir)
        .arg("balances")
        .assert()
        .success()
        .stdout(predicate::str::contains("$100.00"));
}

#[test]
fn legacy_snapshot_is_migrated() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(
        data_dir.join("ledger.json"),
        r#"{
            "savings": 10,
            "mgo": 0,
            "checking": 5.5,
            "fronted": 1,
            "entries": [{
                "id": "550e8400-e29b-41d4-a716-446655440000",
                "date": "2023-11-02",
                "amount": 10,
                "from": "",
                "to": "Savings",
                "note": "old deposit"
            }]
        }"#,
    )
    .unwrap();

    // Checking folds into Fronted: 5.50 + 1.00
    ledger_cmd(&dir)
        .arg("balances")
        .assert()
        .success()
        .stdout(predicate::str::contains("$10.00"))
        .stdout(predicate::str::contains("$6.50"));

    ledger_cmd(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("deposit"))
        .stdout(predicate::str::contains("old deposit"));
}
