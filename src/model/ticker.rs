use serde::{Deserialize, Serialize};

/// Instrument lookup response, `{symbol, id}`. Other fields are ignored.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Ticker {
    pub symbol: String,
    pub id: String,
}
