use crate::robinhood::ROBINHOOD_API;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const CONFIG_PATH: &str = "./ledger.config.toml";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Seed mapping read at startup and overwritten at exit.
    pub instruments_path: String,
    pub orders_path: String,
    pub ledger_path: String,
    pub instrument_url: String,
    pub cooldown_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            instruments_path: "instruments.json".to_string(),
            orders_path: "order.json".to_string(),
            ledger_path: "result.csv".to_string(),
            instrument_url: ROBINHOOD_API.to_string(),
            cooldown_secs: 5,
        }
    }
}

impl Config {
    pub fn cooldown(&self) -> Duration {
        Duration::from_secs(self.cooldown_secs)
    }
}

pub struct ConfigStore {
    cfg: Config,
}

impl ConfigStore {
    pub fn new() -> anyhow::Result<ConfigStore> {
        Self::from_path(CONFIG_PATH)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<ConfigStore> {
        let path = path.as_ref();
        // confy writes defaults into a missing file, so only read one that is there
        let cfg = if path.exists() {
            let cfg: Config = confy::load_path(path)?;
            info!("Loaded config from {}: {:?}", path.display(), cfg);
            cfg
        } else {
            Config::default()
        };
        Ok(ConfigStore { cfg })
    }

    pub fn load() -> anyhow::Result<Config> {
        Ok(ConfigStore::new()?.cfg)
    }
}
