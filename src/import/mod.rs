/// 외부 데이터 소스에서 경매 테이블 가져오기
/// 1. 원시 필드 배열 (RawListings)
/// 2. 필드 파싱 (남은 시간, 입찰가, 상품 정보)
/// 3. 테이블 구성 (전부 성공했을 때만 새 테이블 반환)
// region:    --- Imports
use crate::auction::{Auction, AuctionTable};
use crate::error::{Error, Result};
use std::collections::HashMap;
use tracing::{error, info};
// endregion: --- Imports

// region:    --- Modules
pub mod source;

pub use source::{HttpListingSource, ListingSource};
// endregion: --- Modules

// region:    --- Raw Listings
/// 레코드별 원시 문자열 필드 (i 번째 원소끼리 같은 레코드)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawListings {
    pub time_left: Vec<String>,
    pub current_bid: Vec<String>,
    pub id_num: Vec<String>,
    pub seller_name: Vec<String>,
    /// 없으면 모든 레코드의 입찰자가 빈 값
    pub bidder_name: Option<Vec<String>>,
    pub memory: Vec<String>,
    pub hard_drive: Vec<String>,
    pub cpu: Vec<String>,
}

impl RawListings {
    /// 레코드 수 (모든 배열의 길이가 같아야 함)
    pub fn record_count(&self) -> Result<usize> {
        let expected = self.time_left.len();
        let mut fields = vec![
            ("current_bid", self.current_bid.len()),
            ("id_num", self.id_num.len()),
            ("seller_name", self.seller_name.len()),
            ("memory", self.memory.len()),
            ("hard_drive", self.hard_drive.len()),
            ("cpu", self.cpu.len()),
        ];
        if let Some(bidders) = &self.bidder_name {
            fields.push(("bidder_name", bidders.len()));
        }

        for (name, len) in fields {
            if len != expected {
                return Err(Error::schema_mismatch(format!(
                    "{} has {} values, time_left has {}",
                    name, len, expected
                )));
            }
        }
        Ok(expected)
    }

    /// i 번째 레코드를 경매로 변환
    fn auction_at(&self, i: usize) -> Result<Auction> {
        let time_remaining = parse_time_left(&self.time_left[i])?;
        let current_bid = parse_bid(&self.current_bid[i])?;
        let buyer = self
            .bidder_name
            .as_ref()
            .map(|bidders| bidders[i].as_str())
            .unwrap_or("");
        let info = compose_item_info(&self.cpu[i], &self.memory[i], &self.hard_drive[i]);

        Ok(Auction::with_state(
            self.id_num[i].clone(),
            time_remaining,
            current_bid,
            clean_seller_name(&self.seller_name[i]),
            buyer,
            info,
        ))
    }
}
// endregion: --- Raw Listings

// region:    --- Field Parsing
/// "2 days 5 hours" 형식의 남은 시간을 시간 단위로 변환
/// day 앞의 정수 x 24 + (day 이후) h 앞의 정수, 없는 항목은 0
pub fn parse_time_left(text: &str) -> Result<u32> {
    let malformed = || Error::MalformedTime(text.to_string());
    let mut rest = text.trim();
    let mut hours: u32 = 0;

    if let Some(day_idx) = rest.find("day") {
        let days = parse_leading_number(&rest[..day_idx]).ok_or_else(malformed)?;
        hours = days.checked_mul(24).ok_or_else(malformed)?;
        rest = rest[day_idx + "day".len()..]
            .trim_start_matches('s')
            .trim_start_matches(',')
            .trim();
    }

    if let Some(hour_idx) = rest.find('h') {
        let extra = parse_leading_number(&rest[..hour_idx]).ok_or_else(malformed)?;
        hours = hours.checked_add(extra).ok_or_else(malformed)?;
    }

    Ok(hours)
}

fn parse_leading_number(token: &str) -> Option<u32> {
    token.trim().parse().ok()
}

/// "$1,234.50" 형식의 입찰가 변환 (통화 기호 1글자 제거, 쉼표 제거)
pub fn parse_bid(text: &str) -> Result<f64> {
    let malformed = || Error::MalformedBid(text.to_string());
    let mut chars = text.trim().chars();
    chars.next().ok_or_else(malformed)?;

    let digits: String = chars.as_str().chars().filter(|c| *c != ',').collect();
    let amount: f64 = digits.trim().parse().map_err(|_| malformed())?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(malformed());
    }
    Ok(amount)
}

/// cpu - memory - hard drive 순서로 연결, 빈 항목은 건너뜀, 전부 비면 "N/A"
pub fn compose_item_info(cpu: &str, memory: &str, hard_drive: &str) -> String {
    let parts: Vec<String> = [cpu, memory, hard_drive]
        .iter()
        .map(|part| strip_line_breaks(part))
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        "N/A".to_string()
    } else {
        parts.join(" - ")
    }
}

/// 판매자 이름에서 줄바꿈과 공백 제거
pub fn clean_seller_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '\n' | '\r' | ' '))
        .collect()
}

fn strip_line_breaks(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect()
}
// endregion: --- Field Parsing

// region:    --- Table Import
impl AuctionTable {
    /// 원시 필드로 새 테이블 구성
    /// 하나라도 실패하면 ImportFailed, 중복 ID는 마지막 레코드가 남음
    pub fn from_raw(raw: &RawListings) -> Result<Self> {
        Self::build(raw).map_err(|e| {
            error!("{:<12} --> 가져오기 실패: {}", "Import", e);
            Error::import_failed(e)
        })
    }

    fn build(raw: &RawListings) -> Result<Self> {
        let count = raw.record_count()?;
        let mut auctions = HashMap::with_capacity(count);
        for i in 0..count {
            let auction = raw.auction_at(i)?;
            auctions.insert(auction.id().to_string(), auction);
        }
        info!(
            "{:<12} --> 레코드 {}건 -> 경매 {}건",
            "Import",
            count,
            auctions.len()
        );
        Ok(Self::from_map(auctions))
    }

    /// 데이터 소스에서 가져와 새 테이블 구성
    pub async fn import_from<S>(source: &S, url: &str) -> Result<Self>
    where
        S: ListingSource + ?Sized,
    {
        info!("{:<12} --> 가져오기 시작 url: {}", "Import", url);
        let raw = source.fetch(url).await.map_err(|e| {
            error!("{:<12} --> 데이터 소스 조회 실패: {}", "Import", e);
            Error::import_failed(e)
        })?;
        Self::from_raw(&raw)
    }
}
// endregion: --- Table Import
