//! Config module

mod constants;
mod env;

pub use constants::{BIND_ADDR_ENV, DEFAULT_BIND_ADDR, DEFAULT_LOG_FILTER};
pub use env::Config;
