mod args;
mod config;
mod toast;

use args::Command;

use bank::store::FileStore;
use bank::{build_account_ledger, AccountLedger, Result};

use serde::Serialize;

fn main() -> Result {
    let app_config = config::configure_app()?;

    log::debug!("Application configured. Parsing command...");

    let command = args::parse_command()?;

    log::debug!("Building ledger for command: {command:?}");

    let store = FileStore::new(app_config.state_path);
    let mut ledger = build_account_ledger(Box::new(store), Box::new(toast::Toast));

    run_command(&mut ledger, command)?;

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Applies the requested command. Ledger rejections have already been
/// surfaced through the notifier, so they end the command without failing
/// the process.
fn run_command(ledger: &mut AccountLedger, command: Command) -> Result {
    match command {
        Command::Deposit { amount } => match ledger.deposit(&amount) {
            Ok(amount) => toast::show(&format!("${amount} has been deposited successfully!")),
            Err(e) => log::debug!("Deposit rejected: {e}"),
        },

        Command::Withdraw { amount, pin } => match ledger.withdraw(&amount, &pin) {
            Ok(amount) => toast::show(&format!("${amount} has been withdrawn successfully!")),
            Err(e) => log::debug!("Withdrawal rejected: {e}"),
        },

        Command::Balance => {
            toast::show(&format!("Your current balance is ${}", ledger.balance()));
        }

        Command::Report => {
            let report = ledger.build_report()?;
            report_to_std_out(&[report])?;
        }

        Command::History => {
            report_to_std_out(&ledger.movement_records())?;
        }
    }

    Ok(())
}

/// Serializes records as CSV, and writes them to stdout
fn report_to_std_out<S: Serialize>(records: &[S]) -> Result {
    let mut wtr = csv::Writer::from_writer(vec![]);

    for record in records.iter() {
        log::debug!("Serializing record...");
        wtr.serialize(record)?;
    }

    let utf8 = wtr.into_inner()?;
    let output = String::from_utf8(utf8)?;

    print!("{output}");

    Ok(())
}
