use bank::notify::Notifier;
use bank::store::FileStore;
use bank::{build_account_ledger, AccountLedger, LedgerError, Money, PIN_ATTEMPT_LIMIT};

use std::{fs, path::Path};

use tempfile::TempDir;

const STATE_FILE: &str = "rancle_bank.json";
const GOOD_PIN: &str = "1221";

/// Drops every message; these tests assert on returned values instead.
struct Silent;

impl Notifier for Silent {
    fn notify(&self, _message: &str) {}
}

fn open_ledger(dir: &Path) -> AccountLedger {
    let store = FileStore::new(dir.join(STATE_FILE));

    build_account_ledger(Box::new(store), Box::new(Silent))
}

fn money(string: &str) -> Money {
    Money::parse(string).unwrap()
}

#[test]
fn example_session() {
    let dir = TempDir::new().unwrap();
    let mut ledger = open_ledger(dir.path());

    assert_eq!(ledger.balance(), Money(0));

    assert_eq!(ledger.deposit("100").unwrap(), money("100"));
    assert_eq!(ledger.balance().to_string(), "100.00");
    assert_eq!(ledger.deposits(), &[money("100")]);

    assert_eq!(ledger.withdraw("40", GOOD_PIN).unwrap(), money("40"));
    assert_eq!(ledger.balance().to_string(), "60.00");
    assert_eq!(ledger.withdrawals(), &[money("40")]);

    let res = ledger.withdraw("1000", GOOD_PIN);
    assert_eq!(res.unwrap_err(), LedgerError::InsufficientFunds);
    assert_eq!(ledger.balance().to_string(), "60.00");

    let res = ledger.withdraw("10", "0000");
    assert_eq!(
        res.unwrap_err(),
        LedgerError::InvalidPin {
            attempts_remaining: 4
        }
    );
    assert_eq!(ledger.balance().to_string(), "60.00");
}

#[test]
fn state_survives_across_sessions() {
    let dir = TempDir::new().unwrap();

    let mut ledger = open_ledger(dir.path());
    ledger.deposit("250.50").unwrap();
    ledger.withdraw("0.50", GOOD_PIN).unwrap();
    drop(ledger);

    let reopened = open_ledger(dir.path());

    // The persisted seed value was zero, so loading adopts the stored
    // balance as the new seed
    assert_eq!(reopened.balance(), money("250"));
    assert_eq!(reopened.initial_balance(), money("250"));
    assert_eq!(reopened.deposits(), &[money("250.50")]);
    assert_eq!(reopened.withdrawals(), &[money("0.50")]);

    // From here on the snapshot reproduces itself exactly
    reopened.save_state();
    let third = open_ledger(dir.path());

    assert_eq!(third.balance(), reopened.balance());
    assert_eq!(third.initial_balance(), reopened.initial_balance());
    assert_eq!(third.deposits(), reopened.deposits());
    assert_eq!(third.withdrawals(), reopened.withdrawals());
}

#[test]
fn lockout_does_not_survive_a_restart() {
    let dir = TempDir::new().unwrap();

    let mut ledger = open_ledger(dir.path());
    ledger.deposit("100").unwrap();

    for _ in 0..PIN_ATTEMPT_LIMIT {
        let _ = ledger.withdraw("10", "9999");
    }
    assert_eq!(
        ledger.withdraw("10", GOOD_PIN).unwrap_err(),
        LedgerError::PinLocked
    );
    drop(ledger);

    // Attempt state is transient; a fresh session starts unlocked
    let mut reopened = open_ledger(dir.path());
    assert_eq!(reopened.pin_attempts_remaining(), PIN_ATTEMPT_LIMIT);
    assert_eq!(reopened.withdraw("10", GOOD_PIN).unwrap(), money("10"));
}

#[test]
fn malformed_snapshot_starts_fresh() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(STATE_FILE), "{").unwrap();

    let mut ledger = open_ledger(dir.path());

    assert_eq!(ledger.balance(), Money(0));
    assert!(ledger.deposits().is_empty());

    // The next successful mutation replaces the broken blob
    ledger.deposit("10").unwrap();
    let raw = fs::read_to_string(dir.path().join(STATE_FILE)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(value["currentBalance"].as_f64(), Some(10.0));
}

#[test]
fn snapshot_wire_format() {
    let dir = TempDir::new().unwrap();

    let mut ledger = open_ledger(dir.path());
    ledger.deposit("12.34").unwrap();
    ledger.withdraw("2.34", GOOD_PIN).unwrap();

    let raw = fs::read_to_string(dir.path().join(STATE_FILE)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(value["currentBalance"].as_f64(), Some(10.0));
    assert_eq!(value["initialBalance"].as_f64(), Some(0.0));
    assert_eq!(value["deposits"][0].as_f64(), Some(12.34));
    assert_eq!(value["withdrawals"][0].as_f64(), Some(2.34));
}
