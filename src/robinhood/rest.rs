use crate::core::{LedgerError, LedgerResult};
use crate::model::Ticker;
use reqwest::blocking::Client;
use std::time::Duration;

pub const ROBINHOOD_API: &str = "https://api.robinhood.com";

/// Looks up the ticker for one instrument identifier.
pub trait InstrumentResolver {
    fn resolve(&self, identifier: &str) -> LedgerResult<Ticker>;
}

pub struct RobinhoodRestClient {
    base_url: String,
    client: Client,
    cooldown: Duration,
}

impl RobinhoodRestClient {
    pub fn new(base_url: &str, cooldown: Duration) -> LedgerResult<RobinhoodRestClient> {
        let client = Client::builder()
            .build()
            .map_err(LedgerError::HttpClient)?;
        Ok(RobinhoodRestClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            cooldown,
        })
    }

    pub fn instrument_url(&self, identifier: &str) -> String {
        format!(
            "{base_url}/instruments/{identifier}/",
            base_url = self.base_url,
            identifier = identifier
        )
    }
}

impl InstrumentResolver for RobinhoodRestClient {
    fn resolve(&self, identifier: &str) -> LedgerResult<Ticker> {
        let network_err = |source: reqwest::Error| LedgerError::Network {
            identifier: identifier.to_string(),
            source,
        };
        let url = self.instrument_url(identifier);
        info!("Querying robinhood for {}", identifier);
        let response = self.client.get(url.as_str()).send().map_err(network_err)?;

        std::thread::sleep(self.cooldown);

        let status = response.status();
        if !status.is_success() {
            warn!("{} answered {} for {}", url, status, identifier);
        }
        let body = response.text().map_err(network_err)?;
        let ticker = serde_json::from_str::<Ticker>(&body).map_err(|source| {
            LedgerError::MalformedResponse {
                identifier: identifier.to_string(),
                source,
            }
        })?;
        info!("Resolved {} to {}", identifier, ticker.symbol);
        Ok(ticker)
    }
}
