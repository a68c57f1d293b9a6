#[macro_use]
extern crate log;

use robinhood_ledger::core::config::ConfigStore;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = ConfigStore::load()?;
    let rows = robinhood_ledger::ledger::run(&config)?;
    info!("Done, {} ledger rows", rows);
    Ok(())
}
