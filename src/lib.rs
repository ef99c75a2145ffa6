pub mod auction;
pub mod bidding;
pub mod config;
pub mod console;
pub mod error;
pub mod handlers;
pub mod import;
pub mod query;
pub mod store;

pub use error::{Error, Result};
