/// 경매 관련 커맨드 처리
/// 1. 경매 등록
/// 2. 입찰
/// 3. 시간 경과
/// 4. 마감 경매 삭제
// region:    --- Imports
use crate::auction::{Auction, AuctionTable, BidOutcome};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
// endregion: --- Imports

// region:    --- Commands
/// 경매 등록 명령
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateAuctionCommand {
    pub auction_id: String,
    pub hours: u32,
    pub seller_name: String,
    pub item_info: String,
}

/// 입찰 명령
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlaceBidCommand {
    pub auction_id: String,
    pub bidder_name: String,
    pub bid_amount: f64,
}

/// 1. 경매 등록
pub fn handle_create_auction(table: &mut AuctionTable, cmd: CreateAuctionCommand) -> Result<()> {
    info!("{:<12} --> 경매 등록 요청 처리 시작: {:?}", "Command", cmd);
    let auction = Auction::new(
        cmd.auction_id.clone(),
        cmd.hours,
        cmd.seller_name,
        cmd.item_info,
    );
    table.insert(cmd.auction_id, auction).map_err(|e| {
        warn!("{:<12} --> 경매 등록 실패: {}", "Command", e);
        e
    })
}

/// 2. 입찰
pub fn handle_place_bid(table: &mut AuctionTable, cmd: PlaceBidCommand) -> Result<BidOutcome> {
    info!("{:<12} --> 입찰 요청 처리 시작: {:?}", "Command", cmd);
    let auction = table
        .get_mut(&cmd.auction_id)
        .ok_or_else(|| Error::NotFound(cmd.auction_id.clone()))?;

    let outcome = auction.place_bid(&cmd.bidder_name, cmd.bid_amount)?;
    match outcome {
        BidOutcome::Accepted => info!(
            "{:<12} --> 입찰 성공 id: {}, 금액: {}",
            "Command", cmd.auction_id, cmd.bid_amount
        ),
        BidOutcome::Rejected => warn!(
            "{:<12} --> 입찰 금액이 현재 가격 이하 id: {}, 현재: {}",
            "Command",
            cmd.auction_id,
            auction.current_bid()
        ),
    }
    Ok(outcome)
}

/// 3. 시간 경과
pub fn handle_let_time_pass(table: &mut AuctionTable, hours: i64) -> Result<()> {
    info!("{:<12} --> 시간 경과 요청: {}시간", "Command", hours);
    table.advance_time(hours)
}

/// 4. 마감 경매 삭제
pub fn handle_remove_expired(table: &mut AuctionTable) -> usize {
    info!("{:<12} --> 마감 경매 삭제 요청", "Command");
    table.sweep_expired()
}
// endregion: --- Commands
