use bank::Result;

use std::{env, path::PathBuf};

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Environment variable overriding where account state is persisted
const STATE_PATH_VAR: &str = "RANCLE_BANK_STATE";

/// Fixed key the snapshot lives under when no override is given
const DEFAULT_STATE_PATH: &str = "rancle_bank.json";

pub struct AppConfig {
    pub state_path: PathBuf,
}

pub fn configure_app() -> Result<AppConfig> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    let state_path = env::var_os(STATE_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_PATH));

    return Ok(AppConfig { state_path });
}
