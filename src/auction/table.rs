// region:    --- Imports
use super::model::Auction;
use crate::error::{Error, Result};
use std::collections::HashMap;
use tracing::{debug, info};
// endregion: --- Imports

// region:    --- Constants
pub const TABLE_HEADER: &str = " Auction ID |      Bid   |        Seller         |          Buyer          |    Time   |  Item Info";

const SEPARATOR_WIDTH: usize = 131;
// endregion: --- Constants

// region:    --- Auction Table
/// 경매 ID -> 경매 매핑
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuctionTable {
    auctions: HashMap<String, Auction>,
}

impl AuctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 완성된 매핑으로 테이블 구성 (가져오기, 복원용)
    pub(crate) fn from_map(auctions: HashMap<String, Auction>) -> Self {
        Self { auctions }
    }

    /// 경매 등록
    /// 이미 같은 ID가 있으면 DuplicateKey, 테이블은 변경되지 않음
    pub fn insert(&mut self, id: impl Into<String>, auction: Auction) -> Result<()> {
        let id = id.into();
        if self.auctions.contains_key(&id) {
            return Err(Error::DuplicateKey(id));
        }
        info!("{:<12} --> 경매 등록 id: {}", "Table", id);
        self.auctions.insert(id, auction);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Auction> {
        self.auctions.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Auction> {
        self.auctions.get_mut(id)
    }

    /// 시간 경과
    /// hours 가 0 이하이면 InvalidArgument
    pub fn advance_time(&mut self, hours: i64) -> Result<()> {
        if hours <= 0 {
            return Err(Error::invalid_argument("Time must be positive"));
        }
        let hours = u32::try_from(hours).unwrap_or(u32::MAX);
        for auction in self.auctions.values_mut() {
            auction.decrement_time_remaining(hours);
        }
        info!(
            "{:<12} --> {}시간 경과, 경매 {}건 갱신",
            "Table",
            hours,
            self.auctions.len()
        );
        Ok(())
    }

    /// 마감된 경매 삭제, 삭제된 건수 반환
    pub fn sweep_expired(&mut self) -> usize {
        let expired: Vec<String> = self
            .auctions
            .iter()
            .filter(|(_, auction)| !auction.is_open())
            .map(|(id, _)| id.clone())
            .collect();

        for id in &expired {
            debug!("{:<12} --> 마감 경매 삭제 id: {}", "Table", id);
            self.auctions.remove(id);
        }
        info!("{:<12} --> 마감 경매 {}건 삭제", "Table", expired.len());
        expired.len()
    }

    /// 경매 목록을 ID 순으로 반환
    pub fn sorted(&self) -> Vec<&Auction> {
        let mut auctions: Vec<&Auction> = self.auctions.values().collect();
        auctions.sort_by(|a, b| a.id().cmp(b.id()));
        auctions
    }

    /// 표 출력 (헤더, 구분선, ID 순 행)
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(TABLE_HEADER);
        out.push('\n');
        out.push_str(&"=".repeat(SEPARATOR_WIDTH));
        out.push('\n');
        for auction in self.sorted() {
            out.push_str(&auction.to_string());
            out.push('\n');
        }
        out
    }

    pub fn len(&self) -> usize {
        self.auctions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.auctions.is_empty()
    }
}
// endregion: --- Auction Table

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_orders_rows_by_id() {
        let mut table = AuctionTable::new();
        table.insert("b", Auction::new("b", 1, "s", "x")).unwrap();
        table.insert("a", Auction::new("a", 1, "s", "y")).unwrap();

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], TABLE_HEADER);
        assert!(lines[1].chars().all(|c| c == '='));
        assert!(lines[2].ends_with("| y"));
        assert!(lines[3].ends_with("| x"));
    }
}
