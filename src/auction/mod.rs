pub mod model;
pub mod table;

pub use model::{Auction, BidOutcome};
pub use table::AuctionTable;
