use crate::model::{Execution, Order};
use serde::Serialize;

pub const LEDGER_HEADER: [&str; 5] = ["Date", "Action", "Quantity", "Price", "Symbol"];

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LedgerRow {
    pub date: String,
    pub action: String,
    pub quantity: String,
    pub price: String,
    pub symbol: String,
}

impl LedgerRow {
    pub fn from_fill(order: &Order, execution: &Execution, symbol: &str) -> Self {
        LedgerRow {
            date: execution.settlement_date.clone(),
            action: order.side.to_string(),
            quantity: execution.quantity.clone(),
            price: execution.price.clone(),
            symbol: symbol.to_string(),
        }
    }
}
