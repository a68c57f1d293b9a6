mod rest;

pub use rest::{InstrumentResolver, RobinhoodRestClient, ROBINHOOD_API};
