use crate::notify::Notifier;
use crate::report::{BalanceReport, MovementKind, MovementRecord};
use crate::snapshot::LedgerSnapshot;
use crate::store::StateStore;
use crate::Money;
use crate::Result;

use thiserror::Error;

/// Fixed 4-character withdrawal secret; not configurable anywhere in scope.
const WITHDRAW_PIN: &str = "1221";

pub const PIN_ATTEMPT_LIMIT: u8 = 5;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerError {
    /// The supplied amount didn't parse to a strictly positive value.
    #[error("Invalid amount")]
    InvalidAmount,

    /// PIN mismatch. The caller should discard any cached PIN input.
    #[error("Invalid PIN, {attempts_remaining} attempts remaining")]
    InvalidPin { attempts_remaining: u8 },

    /// PIN attempts exhausted. The caller should force-close any open
    /// withdrawal prompt. Only a successful withdrawal resets the counter,
    /// so the lockout lasts for the rest of the session.
    #[error("Too many incorrect PIN attempts")]
    PinLocked,

    #[error("Insufficient funds")]
    InsufficientFunds,
}

/// Owns the account balance, transaction history, and PIN-attempt state.
///
/// Every operation either fully applies or leaves the state untouched.
/// Successful mutations are persisted through the store best-effort;
/// rejections are surfaced through the notifier and as a typed error.
pub struct AccountLedger {
    state: LedgerSnapshot,
    pin_attempts: u8,
    store: Box<dyn StateStore>,
    notifier: Box<dyn Notifier>,
}

impl AccountLedger {
    pub fn new(store: Box<dyn StateStore>, notifier: Box<dyn Notifier>) -> Self {
        return Self {
            state: LedgerSnapshot::default(),
            pin_attempts: PIN_ATTEMPT_LIMIT,
            store,
            notifier,
        };
    }

    pub fn balance(&self) -> Money {
        return self.state.current_balance;
    }

    pub fn initial_balance(&self) -> Money {
        return self.state.initial_balance;
    }

    pub fn deposits(&self) -> &[Money] {
        return &self.state.deposits;
    }

    pub fn withdrawals(&self) -> &[Money] {
        return &self.state.withdrawals;
    }

    pub fn pin_attempts_remaining(&self) -> u8 {
        return self.pin_attempts;
    }

    /// Adds a deposit to the account and persists the new state.
    pub fn deposit(&mut self, amount: &str) -> Result<Money, LedgerError> {
        let amount = match self.parse_amount(amount) {
            Some(amount) => amount,
            None => {
                self.notifier.notify("Enter a valid deposit amount");
                return Err(LedgerError::InvalidAmount);
            }
        };

        let balance = match self.state.current_balance.checked_add(&amount) {
            Ok(balance) => balance,
            Err(e) => {
                log::warn!("Rejecting deposit: {e}");
                self.notifier.notify("Enter a valid deposit amount");
                return Err(LedgerError::InvalidAmount);
            }
        };

        self.state.current_balance = balance;
        self.state.deposits.push(amount);
        self.save_state();

        log::debug!("Deposited {amount}, balance is now {balance}");

        return Ok(amount);
    }

    /// Withdraws from the account, guarded by the PIN.
    ///
    /// Checks run in order: lockout gate, PIN, amount, funds. The first
    /// failure rejects the whole operation; the amount is only looked at
    /// once the PIN has passed.
    pub fn withdraw(&mut self, amount: &str, pin: &str) -> Result<Money, LedgerError> {
        if self.pin_attempts == 0 {
            self.notifier
                .notify("Too many incorrect PIN attempts, withdrawals are blocked");
            return Err(LedgerError::PinLocked);
        }

        if pin.trim() != WITHDRAW_PIN {
            self.pin_attempts = self.pin_attempts.saturating_sub(1);

            if self.pin_attempts == 0 {
                self.notifier
                    .notify("Too many incorrect PIN attempts, action blocked");
                return Err(LedgerError::PinLocked);
            }

            self.notifier.notify(&format!(
                "Invalid PIN. {} attempts remaining",
                self.pin_attempts
            ));
            return Err(LedgerError::InvalidPin {
                attempts_remaining: self.pin_attempts,
            });
        }

        let amount = match self.parse_amount(amount) {
            Some(amount) => amount,
            None => {
                self.notifier.notify("Enter a valid withdrawal amount");
                return Err(LedgerError::InvalidAmount);
            }
        };

        if amount > self.state.current_balance {
            self.notifier.notify("Insufficient funds");
            return Err(LedgerError::InsufficientFunds);
        }

        let balance = match self.state.current_balance.checked_sub(&amount) {
            Ok(balance) => balance,
            Err(e) => {
                log::warn!("Rejecting withdrawal: {e}");
                self.notifier.notify("Enter a valid withdrawal amount");
                return Err(LedgerError::InvalidAmount);
            }
        };

        self.state.current_balance = balance;
        self.state.withdrawals.push(amount);
        self.pin_attempts = PIN_ATTEMPT_LIMIT;
        self.save_state();

        log::debug!("Withdrew {amount}, balance is now {balance}");

        return Ok(amount);
    }

    fn parse_amount(&self, amount: &str) -> Option<Money> {
        return Money::parse(amount).ok().filter(Money::is_positive);
    }

    /// Adopts persisted state when a well-formed snapshot exists.
    ///
    /// An absent or malformed snapshot means a fresh account; no error
    /// reaches the caller.
    pub fn load_state(&mut self) {
        let blob = match self.store.read() {
            Ok(Some(blob)) => blob,
            Ok(None) => return,
            Err(e) => {
                log::warn!("Couldn't read persisted state: {e:#}");
                return;
            }
        };

        match LedgerSnapshot::decode(&blob) {
            Ok(snapshot) => self.state = snapshot,
            Err(e) => log::debug!("Discarding malformed state snapshot: {e}"),
        }

        // Legacy snapshots may carry a balance without its seed value
        if self.state.initial_balance.is_zero() && !self.state.current_balance.is_zero() {
            self.state.initial_balance = self.state.current_balance;
        }
    }

    /// Persists the current snapshot, best-effort.
    ///
    /// Failures are logged and swallowed; in-memory state stays
    /// authoritative for the session.
    pub fn save_state(&self) {
        let blob = match self.state.encode() {
            Ok(blob) => blob,
            Err(e) => {
                log::warn!("Couldn't encode state snapshot: {e}");
                return;
            }
        };

        if let Err(e) = self.store.write(&blob) {
            log::warn!("Couldn't persist state snapshot: {e:#}");
        }
    }

    pub fn build_report(&self) -> Result<BalanceReport> {
        let deposited = sum(&self.state.deposits)?;
        let withdrawn = sum(&self.state.withdrawals)?;

        return Ok(BalanceReport {
            initial: self.state.initial_balance.to_string(),
            current: self.state.current_balance.to_string(),
            deposited: deposited.to_string(),
            withdrawn: withdrawn.to_string(),
        });
    }

    pub fn movement_records(&self) -> Vec<MovementRecord> {
        let deposits = self.state.deposits.iter().map(|amount| MovementRecord {
            kind: MovementKind::Deposit,
            amount: amount.to_string(),
        });

        let withdrawals = self.state.withdrawals.iter().map(|amount| MovementRecord {
            kind: MovementKind::Withdrawal,
            amount: amount.to_string(),
        });

        return deposits.chain(withdrawals).collect();
    }
}

fn sum(amounts: &[Money]) -> Result<Money> {
    let mut total = Money(0);

    for amount in amounts {
        total = total.checked_add(amount)?;
    }

    return Ok(total);
}
