mod driver;
mod transform;

pub use driver::{load_orders, run};
pub use transform::{ledger_writer, resolve_symbol, write_ledger};
