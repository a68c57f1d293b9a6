mod ledger_row;
mod order;
mod ticker;

pub use ledger_row::{LedgerRow, LEDGER_HEADER};
pub use order::{Execution, Order, OrderHistory, OrderSide, OrderType};
pub use ticker::Ticker;
