#[macro_use]
extern crate log;

pub mod cache;
pub mod core;
pub mod ledger;
pub mod model;
pub mod robinhood;
