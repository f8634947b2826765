//! End-to-end CLI tests
//!
//! Each test runs the binary against its own temp data directory via the
//! SPENDTRACK_DATA_DIR override.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn spendtrack(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("spendtrack").unwrap();
    cmd.env("SPENDTRACK_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn add_then_list_shows_expense_and_total() {
    let data_dir = TempDir::new().unwrap();

    spendtrack(&data_dir)
        .args(["add", "42.50", "Food", "Groceries", "--date", "2024-03-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added"));

    spendtrack(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Total spent: $42.50"));
}

#[test]
fn list_with_no_data_reports_empty() {
    let data_dir = TempDir::new().unwrap();

    spendtrack(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded."));
}

#[test]
fn month_report_is_chronological() {
    let data_dir = TempDir::new().unwrap();

    spendtrack(&data_dir)
        .args(["add", "10", "A", "--date", "2024-04-01"])
        .assert()
        .success();
    spendtrack(&data_dir)
        .args(["add", "20", "A", "--date", "2024-03-01"])
        .assert()
        .success();

    let output = spendtrack(&data_dir).args(["report", "month"]).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    let march = stdout.find("2024-03").expect("march missing");
    let april = stdout.find("2024-04").expect("april missing");
    assert!(march < april);
}

#[test]
fn category_report_groups_case_sensitively() {
    let data_dir = TempDir::new().unwrap();

    spendtrack(&data_dir)
        .args(["add", "1.00", "Food", "--date", "2024-01-01"])
        .assert()
        .success();
    spendtrack(&data_dir)
        .args(["add", "2.00", "food", "--date", "2024-01-02"])
        .assert()
        .success();

    spendtrack(&data_dir)
        .args(["report", "category"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("food"))
        .stdout(predicate::str::contains("$1.00"))
        .stdout(predicate::str::contains("$2.00"));
}

#[test]
fn add_rejects_malformed_amount() {
    let data_dir = TempDir::new().unwrap();

    spendtrack(&data_dir)
        .args(["add", "abc", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn add_rejects_negative_amount_by_default() {
    let data_dir = TempDir::new().unwrap();

    spendtrack(&data_dir)
        .args(["add", "--", "-5.00", "Refund"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be positive"));
}

#[test]
fn restore_without_backup_fails() {
    let data_dir = TempDir::new().unwrap();

    spendtrack(&data_dir)
        .arg("restore")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Backup not found"));
}

#[test]
fn backup_then_restore_recovers_data() {
    let data_dir = TempDir::new().unwrap();

    spendtrack(&data_dir)
        .args(["add", "42.50", "Food", "Groceries", "--date", "2024-03-15"])
        .assert()
        .success();

    spendtrack(&data_dir)
        .arg("backup")
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup written to"));

    // Clobber the store file, then restore
    let store_file = data_dir.path().join("data").join("expenses.json");
    std::fs::write(&store_file, "[]").unwrap();

    spendtrack(&data_dir).arg("restore").assert().success();

    spendtrack(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"));
}

#[test]
fn corrupt_store_file_is_surfaced() {
    let data_dir = TempDir::new().unwrap();
    let data_subdir = data_dir.path().join("data");
    std::fs::create_dir_all(&data_subdir).unwrap();
    std::fs::write(data_subdir.join("expenses.json"), "{not valid json").unwrap();

    spendtrack(&data_dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Corrupt data"));
}

#[test]
fn export_writes_csv() {
    let data_dir = TempDir::new().unwrap();

    spendtrack(&data_dir)
        .args(["add", "42.50", "Food", "Groceries", "--date", "2024-03-15"])
        .assert()
        .success();

    spendtrack(&data_dir)
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("Date,Category,Amount,Description"))
        .stdout(predicate::str::contains("2024-03-15,Food,42.50,Groceries"));
}
