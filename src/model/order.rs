use serde::{Deserialize, Serialize};
use std::fmt;

/// Side as written by the source. Unrecognised values are carried through
/// verbatim so they still reach the ledger.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(from = "String", into = "String")]
pub enum OrderSide {
    Buy,
    Sell,
    Other(String),
}

impl OrderSide {
    pub fn as_str(&self) -> &str {
        match self {
            OrderSide::Buy => "buy",
            OrderSide::Sell => "sell",
            OrderSide::Other(side) => side.as_str(),
        }
    }
}

impl From<String> for OrderSide {
    fn from(side: String) -> Self {
        match side.as_str() {
            "buy" => OrderSide::Buy,
            "sell" => OrderSide::Sell,
            _ => OrderSide::Other(side),
        }
    }
}

impl From<OrderSide> for String {
    fn from(side: OrderSide) -> Self {
        side.as_str().to_string()
    }
}

impl Default for OrderSide {
    fn default() -> Self {
        OrderSide::Other(String::new())
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Deserialize, Serialize, Debug, strum_macros::Display, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OrderType {
    Market,
    Limit,
    #[serde(other)]
    Other,
}

impl Default for OrderType {
    fn default() -> Self {
        OrderType::Other
    }
}

/// One page of order history. Only `results` is consumed; the cursors are
/// never followed.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct OrderHistory {
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<Order>,
}

impl OrderHistory {
    pub fn execution_count(&self) -> usize {
        self.results.iter().map(|o| o.executions.len()).sum()
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Order {
    pub instrument_id: String,
    #[serde(default)]
    pub side: OrderSide,
    #[serde(rename = "type", default)]
    pub type_: OrderType,
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub trigger: Option<String>,
    #[serde(default)]
    pub average_price: Option<String>,
    #[serde(default)]
    pub executions: Vec<Execution>,
}

/// A single fill. Quantity and price stay as the source's decimal strings so
/// the ledger reproduces them exactly.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Execution {
    #[serde(default)]
    pub settlement_date: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}
