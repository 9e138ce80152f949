pub mod cli;
pub mod core;
pub mod providers;

use crate::core::config::BootConfig;
use crate::core::{Entry, ExchangeEntry};
use anyhow::{Result, anyhow};
use tracing::{debug, info};

pub enum AppCommand {
    List {
        unit: Option<String>,
    },
    Rate {
        src_unit: String,
        target_unit: String,
    },
    Convert {
        src_unit: String,
        target_unit: String,
        amount: f64,
    },
    Watch {
        unit: Option<String>,
    },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("exrate starting...");

    let config = match config_path {
        Some(path) => BootConfig::load_from_path(path)?,
        None => BootConfig::load()?,
    };

    let entry = ExchangeEntry::from_config(&config.exchange)?
        .ok_or_else(|| anyhow!("Exchange entry is disabled in configuration"))?;
    debug!(entry = %entry, "Created exchange entry");

    entry.bootstrap().await;

    let result = match command {
        AppCommand::List { unit } => cli::rates::list(&entry, unit.as_deref()).await,
        AppCommand::Rate {
            src_unit,
            target_unit,
        } => cli::rates::rate(&entry, &src_unit, &target_unit).await,
        AppCommand::Convert {
            src_unit,
            target_unit,
            amount,
        } => cli::rates::convert(&entry, &src_unit, &target_unit, amount).await,
        AppCommand::Watch { unit } => cli::rates::watch(&entry, unit.as_deref()).await,
    };

    entry.interrupt().await;
    result
}
