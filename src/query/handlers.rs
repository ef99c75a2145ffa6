// region:    --- Imports
use crate::auction::model::format_currency;
use crate::auction::{Auction, AuctionTable};
use tracing::info;

// endregion: --- Imports

// region:    --- Query Handlers

/// 경매 상세 정보 조회
pub fn get_auction_info(table: &AuctionTable, auction_id: &str) -> Option<String> {
    info!("{:<12} --> 경매 정보 조회 id: {}", "Query", auction_id);
    table.get(auction_id).map(|auction| {
        format!(
            "Auction {}\n\tSeller: {}\n\tBuyer: {}\n\tTime: {} hours\n\tInfo: {}",
            auction.id(),
            auction.seller_name(),
            auction.buyer_name(),
            auction.time_remaining(),
            auction.item_info()
        )
    })
}

/// 경매 상태 조회 (OPEN / CLOSED, 현재 입찰가)
pub fn get_bid_status(auction: &Auction) -> String {
    let state = if auction.is_open() { "OPEN" } else { "CLOSED" };
    format!(
        "Auction {} is {}\n\tCurrent Bid: {}\n",
        auction.id(),
        state,
        format_current_bid(auction.current_bid())
    )
}

/// 현재 입찰가 표시 (입찰 없으면 None)
pub fn format_current_bid(bid: f64) -> String {
    if bid == 0.0 {
        "None".to_string()
    } else {
        format!("$ {}", format_currency(bid))
    }
}

/// 모든 경매 조회 (표 형식)
pub fn get_all_auctions(table: &AuctionTable) -> String {
    info!("{:<12} --> 모든 경매 조회 ({}건)", "Query", table.len());
    table.render()
}

// endregion: --- Query Handlers
