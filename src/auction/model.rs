// region:    --- Imports
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
// endregion: --- Imports

// region:    --- Auction Model
/// 경매 모델
/// time_remaining 이 0 이면 마감된 경매
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Auction {
    id: String,
    current_bid: f64,
    seller_name: String,
    buyer_name: String,
    item_info: String,
    time_remaining: u32,
}

/// 입찰 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidOutcome {
    /// 현재 입찰가보다 높아 반영됨
    Accepted,
    /// 현재 입찰가 이하라서 무시됨
    Rejected,
}

impl Auction {
    /// 새 경매 생성 (입찰가 0, 입찰자 없음)
    pub fn new(
        id: impl Into<String>,
        time_remaining: u32,
        seller_name: impl Into<String>,
        item_info: impl Into<String>,
    ) -> Self {
        Self::with_state(id, time_remaining, 0.0, seller_name, "", item_info)
    }

    /// 모든 필드를 지정해서 생성 (가져오기, 복원용)
    pub fn with_state(
        id: impl Into<String>,
        time_remaining: u32,
        current_bid: f64,
        seller_name: impl Into<String>,
        buyer_name: impl Into<String>,
        item_info: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            current_bid,
            seller_name: seller_name.into(),
            buyer_name: buyer_name.into(),
            item_info: item_info.into(),
            time_remaining,
        }
    }

    /// 남은 시간 감소 (0 미만으로 내려가지 않음)
    pub fn decrement_time_remaining(&mut self, hours: u32) {
        self.time_remaining = self.time_remaining.saturating_sub(hours);
    }

    /// 입찰
    /// 마감된 경매면 ClosedAuction, 현재 입찰가 이하의 금액은 상태 변화 없이 Rejected
    pub fn place_bid(&mut self, bidder_name: &str, amount: f64) -> Result<BidOutcome> {
        if !self.is_open() {
            return Err(Error::ClosedAuction(self.id.clone()));
        }
        if amount > self.current_bid {
            self.current_bid = amount;
            self.buyer_name = bidder_name.to_string();
            Ok(BidOutcome::Accepted)
        } else {
            Ok(BidOutcome::Rejected)
        }
    }

    pub fn is_open(&self) -> bool {
        self.time_remaining > 0
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn current_bid(&self) -> f64 {
        self.current_bid
    }

    pub fn seller_name(&self) -> &str {
        &self.seller_name
    }

    /// 빈 문자열이면 입찰자 없음
    pub fn buyer_name(&self) -> &str {
        &self.buyer_name
    }

    pub fn item_info(&self) -> &str {
        &self.item_info
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }
}

/// 표 형식의 한 줄
impl fmt::Display for Auction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bid = if self.current_bid > 0.0 {
            format!(" | ${:>9}", format_currency(self.current_bid))
        } else {
            " ".repeat(13)
        };
        write!(
            f,
            "{:>11}{} | {:<22}|  {:<23}|{:>10} | {}",
            self.id,
            bid,
            self.seller_name,
            self.buyer_name,
            format!("{} hours", self.time_remaining),
            self.item_info
        )
    }
}
// endregion: --- Auction Model

// region:    --- Currency
/// 천 단위 구분 기호가 들어간 소수점 2자리 금액 (예: 1,234.50)
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, fraction)
}
// endregion: --- Currency
