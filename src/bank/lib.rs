pub mod ledger;
mod money;
pub mod notify;
pub mod report;
mod result;
pub mod snapshot;
pub mod store;

pub use ledger::{AccountLedger, LedgerError, PIN_ATTEMPT_LIMIT};
pub use money::{Money, MoneyError};
pub use result::Result;

use notify::Notifier;
use store::StateStore;

/// Builds the session's ledger and loads whatever state was persisted.
pub fn build_account_ledger(
    store: Box<dyn StateStore>,
    notifier: Box<dyn Notifier>,
) -> AccountLedger {
    let mut ledger = AccountLedger::new(store, notifier);
    ledger.load_state();

    return ledger;
}
