use crate::cache::{DirectoryGuard, InstrumentDirectory};
use crate::core::config::Config;
use crate::core::{LedgerError, LedgerResult};
use crate::ledger::{ledger_writer, write_ledger};
use crate::model::OrderHistory;
use crate::robinhood::RobinhoodRestClient;
use anyhow::Context;
use std::fs::File;
use std::path::Path;

pub fn load_orders<P: AsRef<Path>>(path: P) -> LedgerResult<OrderHistory> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| LedgerError::SnapshotRead {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| LedgerError::SnapshotParse {
        path: path.display().to_string(),
        source,
    })
}

/// Runs one conversion. The directory is flushed back to
/// `config.instruments_path` once the ledger file exists, whether or not the
/// transform succeeds.
pub fn run(config: &Config) -> anyhow::Result<usize> {
    let directory = InstrumentDirectory::load(&config.instruments_path)?;
    let history = load_orders(&config.orders_path)?;
    info!(
        "Loaded {} orders with {} executions from {}",
        history.results.len(),
        history.execution_count(),
        config.orders_path
    );

    let file = File::create(&config.ledger_path).map_err(|source| LedgerError::LedgerCreate {
        path: config.ledger_path.clone(),
        source,
    })?;
    let mut writer = ledger_writer(file);

    let mut directory = DirectoryGuard::new(directory, &config.instruments_path);
    let client = RobinhoodRestClient::new(&config.instrument_url, config.cooldown())?;
    let rows = write_ledger(&history, &mut directory, &client, &mut writer)
        .with_context(|| format!("aborted writing {}", config.ledger_path))?;
    info!("Wrote {} rows to {}", rows, config.ledger_path);
    Ok(rows)
}
