use crate::Money;

use serde::Serialize;
use serde_json::{Map, Value};

use thiserror::Error;

/// The persisted portion of the account state.
///
/// PIN-attempt state is transient and deliberately not part of this record.
#[derive(Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSnapshot {
    pub current_balance: Money,
    pub initial_balance: Money,
    pub deposits: Vec<Money>,
    pub withdrawals: Vec<Money>,
}

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot is not an object")]
    NotAnObject,

    #[error("Invalid {0} entry in snapshot: {1}")]
    InvalidHistoryEntry(&'static str, Value),
}

impl LedgerSnapshot {
    /// Decodes a persisted blob, tolerating partial records.
    ///
    /// Scalar fields that are absent or not numbers keep their defaults
    /// while the rest of the record is still adopted. History entries are
    /// validated instead: any entry that is not a strictly positive number
    /// rejects the whole snapshot, since a bad entry would break the sums
    /// the histories feed into.
    pub fn decode(raw: &str) -> Result<Self, SnapshotError> {
        let value: Value = serde_json::from_str(raw)?;
        let record = value.as_object().ok_or(SnapshotError::NotAnObject)?;

        let mut snapshot = Self::default();

        if let Some(balance) = money_field(record, "currentBalance") {
            snapshot.current_balance = balance;
        }
        if let Some(balance) = money_field(record, "initialBalance") {
            snapshot.initial_balance = balance;
        }

        snapshot.deposits = decode_history(record, "deposits")?;
        snapshot.withdrawals = decode_history(record, "withdrawals")?;

        return Ok(snapshot);
    }

    pub fn encode(&self) -> serde_json::Result<String> {
        return serde_json::to_string(self);
    }
}

fn money_field(record: &Map<String, Value>, key: &str) -> Option<Money> {
    return record
        .get(key)
        .and_then(Value::as_f64)
        .and_then(|value| Money::from_f64(value).ok());
}

fn decode_history(
    record: &Map<String, Value>,
    key: &'static str,
) -> Result<Vec<Money>, SnapshotError> {
    let entries = match record.get(key).and_then(Value::as_array) {
        Some(entries) => entries,
        None => return Ok(Vec::new()),
    };

    let mut history = Vec::with_capacity(entries.len());

    for entry in entries {
        let amount = entry
            .as_f64()
            .and_then(|value| Money::from_f64(value).ok())
            .filter(Money::is_positive)
            .ok_or_else(|| SnapshotError::InvalidHistoryEntry(key, entry.clone()))?;

        history.push(amount);
    }

    return Ok(history);
}
