use serde::Serialize;

/// Single-row summary of the account, formatted for display.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BalanceReport {
    pub initial: String,
    pub current: String,
    pub deposited: String,
    pub withdrawn: String,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    Deposit,
    Withdrawal,
}

/// One history entry, oldest first within its kind.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MovementRecord {
    pub kind: MovementKind,
    pub amount: String,
}
