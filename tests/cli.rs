use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bank(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bank").unwrap();
    cmd.env("BANK_DATA_DIR", dir)
        .env_remove("BANK_USER")
        .env_remove("BANK_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

fn teller(dir: &Path) -> Command {
    let mut cmd = bank(dir);
    cmd.args(["--user", "teller", "--password", "hunter2"]);
    cmd
}

fn setup() -> TempDir {
    let dir = TempDir::new().unwrap();
    bank(dir.path()).arg("init").assert().success();
    fs::write(dir.path().join("login.txt"), "# staff\nteller|hunter2\n").unwrap();
    dir
}

fn create_ann(dir: &Path) {
    teller(dir)
        .args(["account", "create", "Ann", "Lee", "1 Main St", "412345678", "ann@gmail.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Account No: 10000001"));
}

#[test]
fn init_creates_settings_and_login_file() {
    let dir = TempDir::new().unwrap();
    bank(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized simple-bank"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("login.txt").exists());
    assert!(dir.path().join("data").join("accounts").is_dir());
}

#[test]
fn config_shows_paths() {
    let dir = setup();
    bank(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Record extension:     txt"));
}

#[test]
fn account_commands_require_login() {
    let dir = setup();
    bank(dir.path())
        .args(["account", "show", "10000001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Login required"));

    bank(dir.path())
        .args(["--user", "teller", "--password", "wrong", "account", "show", "10000001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Login failed for user 'teller'"));
}

#[test]
fn login_from_environment() {
    let dir = setup();
    create_ann(dir.path());

    bank(dir.path())
        .env("BANK_USER", "teller")
        .env("BANK_PASSWORD", "hunter2")
        .args(["account", "show", "10000001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Account found!"));
}

#[test]
fn create_and_show_account() {
    let dir = setup();
    create_ann(dir.path());

    assert!(dir.path().join("data/accounts/10000001.txt").exists());

    teller(dir.path())
        .args(["account", "show", "10000001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Account found!"))
        .stdout(predicate::str::contains("Phone:      0412345678"));
}

#[test]
fn invalid_account_reports_every_issue() {
    let dir = setup();
    teller(dir.path())
        .args(["account", "create", "Ann", "", "1 Main St", "412345678", "ann@yahoo.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("One or more fields were empty!"))
        .stderr(predicate::str::contains("Invalid Email Address Domain!"));

    assert!(!dir.path().join("data/accounts/10000001.txt").exists());
}

#[test]
fn deposit_and_withdraw() {
    let dir = setup();
    create_ann(dir.path());

    teller(dir.path())
        .args(["deposit", "10000001", "200"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Successfully Deposited $200 into Ann's Account!",
        ));

    teller(dir.path())
        .args(["withdraw", "10000001", "250"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Insufficient balance: requested 250, available 200",
        ));

    teller(dir.path())
        .args(["withdraw", "10000001", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("has been cancelled"));

    teller(dir.path())
        .args(["withdraw", "10000001", "200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: $0"));

    let record = fs::read_to_string(dir.path().join("data/accounts/10000001.txt")).unwrap();
    assert_eq!(record.lines().count(), 9);
    assert!(record.contains("|Deposit|200|200"));
    assert!(record.contains("|Withdraw|200|0"));
}

#[test]
fn negative_amount_rejected() {
    let dir = setup();
    create_ann(dir.path());

    teller(dir.path())
        .args(["deposit", "10000001", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount: -5"));
}

#[test]
fn account_number_arguments_are_checked() {
    let dir = setup();
    teller(dir.path())
        .args(["account", "show", "12345678901"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("10 digits"));

    teller(dir.path())
        .args(["account", "show", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("only digits"));
}

#[test]
fn missing_account() {
    let dir = setup();
    teller(dir.path())
        .args(["deposit", "10000009", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Account not found: 10000009"));
}

#[test]
fn statement_is_written_to_outbox() {
    let dir = setup();
    create_ann(dir.path());
    teller(dir.path())
        .args(["deposit", "10000001", "1500"])
        .assert()
        .success();

    teller(dir.path())
        .args(["account", "statement", "10000001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deposit"))
        .stdout(predicate::str::contains("$1,500"))
        .stdout(predicate::str::contains("Statement emailed to ann@gmail.com"));

    // details email from create plus the statement
    let sent = fs::read_dir(dir.path().join("outbox")).unwrap().count();
    assert_eq!(sent, 2);
}

#[test]
fn delete_account() {
    let dir = setup();
    create_ann(dir.path());

    teller(dir.path())
        .args(["account", "delete", "10000001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ann's Account was Deleted!"));

    teller(dir.path())
        .args(["account", "show", "10000001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Account not found"));
}

#[test]
fn log_lists_activity() {
    let dir = setup();
    create_ann(dir.path());
    teller(dir.path())
        .args(["deposit", "10000001", "50"])
        .assert()
        .success();

    teller(dir.path())
        .args(["log", "--limit", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OPEN     10000001 Ann Lee <ann@gmail.com>"))
        .stdout(predicate::str::contains(
            "DEPOSIT  10000001 Ann Lee: 50 (balance 0 -> 50)",
        ));
}

#[test]
fn log_filters_by_account() {
    let dir = setup();
    create_ann(dir.path());
    teller(dir.path())
        .args(["account", "create", "Bob", "Ray", "2 Elm St", "412345679", "bob@gmail.com"])
        .assert()
        .success();

    teller(dir.path())
        .args(["log", "--account", "10000002"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10000002 Bob Ray"))
        .stdout(predicate::str::contains("10000001").not());
}

#[test]
fn show_warns_about_inconsistent_ledger() {
    let dir = setup();
    create_ann(dir.path());
    teller(dir.path())
        .args(["deposit", "10000001", "50"])
        .assert()
        .success();

    let record = dir.path().join("data/accounts/10000001.txt");
    let tampered = fs::read_to_string(&record)
        .unwrap()
        .replace("Balance|50", "Balance|70");
    fs::write(&record, tampered).unwrap();

    teller(dir.path())
        .args(["account", "show", "10000001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Account found!"))
        .stderr(predicate::str::contains(
            "Warning: Ann's balance does not match the transfer history.",
        ));
}

#[test]
fn reset_clears_accounts() {
    let dir = setup();
    create_ann(dir.path());

    teller(dir.path())
        .args(["init", "--reset"])
        .assert()
        .success();

    assert!(!dir.path().join("data/accounts/10000001.txt").exists());
    assert!(dir.path().join("login.txt").exists());
}
