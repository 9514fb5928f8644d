use bank::Result;

use std::env;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArgsError {
    #[error("Missing argument: {0}")]
    Missing(&'static str),

    #[error("Unknown command: {0}. Expected deposit, withdraw, balance, report, or history")]
    UnknownCommand(String),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Deposit { amount: String },
    Withdraw { amount: String, pin: String },
    Balance,
    Report,
    History,
}

/// Parses the command line: an action word followed by its positional
/// arguments. Amounts stay as the raw strings the user typed; validating
/// them is the ledger's job.
pub fn parse_command() -> Result<Command> {
    let mut args = env::args().skip(1);

    let action = args.next().ok_or(ArgsError::Missing("command"))?;

    let command = match action.as_str() {
        "deposit" => Command::Deposit {
            amount: args.next().ok_or(ArgsError::Missing("deposit amount"))?,
        },
        "withdraw" => Command::Withdraw {
            amount: args.next().ok_or(ArgsError::Missing("withdrawal amount"))?,
            pin: args.next().ok_or(ArgsError::Missing("PIN"))?,
        },
        "balance" => Command::Balance,
        "report" => Command::Report,
        "history" => Command::History,
        other => Err(ArgsError::UnknownCommand(other.to_string()))?,
    };

    return Ok(command);
}
