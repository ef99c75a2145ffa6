// region:    --- Imports
use super::RawListings;
use crate::error::{Error, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};
// endregion: --- Imports

// region:    --- Field Paths
pub const LISTING_ROOT: &str = "listing";
pub const TIME_LEFT_PATH: &str = "listing/auction_info/time_left";
pub const CURRENT_BID_PATH: &str = "listing/auction_info/current_bid";
pub const ID_NUM_PATH: &str = "listing/auction_info/id_num";
pub const SELLER_NAME_PATH: &str = "listing/seller_info/seller_name";
pub const BIDDER_NAME_PATH: &str = "listing/auction_info/high_bidder/bidder_name";
pub const MEMORY_PATH: &str = "listing/item_info/memory";
pub const HARD_DRIVE_PATH: &str = "listing/item_info/hard_drive";
pub const CPU_PATH: &str = "listing/item_info/cpu";
// endregion: --- Field Paths

// region:    --- Listing Source Trait
/// 경매 목록 데이터 소스 트레이트
#[async_trait]
pub trait ListingSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<RawListings>;
}

/// HTTP(JSON) 데이터 소스 구현체
pub struct HttpListingSource {
    client: reqwest::Client,
}

impl HttpListingSource {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ListingSource for HttpListingSource {
    async fn fetch(&self, url: &str) -> Result<RawListings> {
        info!("{:<12} --> 데이터 요청 url: {}", "Import", url);
        let document: Value = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        RawListings::from_document(&document)
    }
}
// endregion: --- Listing Source Trait

// region:    --- Document Extraction
impl RawListings {
    /// JSON 문서에서 필드 경로별 배열 추출
    /// listing 은 배열(레코드 여러 개) 또는 객체(레코드 하나)
    pub fn from_document(document: &Value) -> Result<Self> {
        let records: Vec<&Value> = match document.get(LISTING_ROOT) {
            Some(Value::Array(items)) => items.iter().collect(),
            Some(item @ Value::Object(_)) => vec![item],
            Some(_) => {
                return Err(Error::schema_mismatch(
                    "listing must be an array or an object",
                ))
            }
            None => return Err(Error::schema_mismatch("missing field: listing")),
        };
        debug!("{:<12} --> 레코드 {}건 발견", "Import", records.len());

        Ok(Self {
            time_left: required(&records, TIME_LEFT_PATH)?,
            current_bid: required(&records, CURRENT_BID_PATH)?,
            id_num: required(&records, ID_NUM_PATH)?,
            seller_name: required(&records, SELLER_NAME_PATH)?,
            bidder_name: collect_field(&records, BIDDER_NAME_PATH)?,
            memory: required(&records, MEMORY_PATH)?,
            hard_drive: required(&records, HARD_DRIVE_PATH)?,
            cpu: required(&records, CPU_PATH)?,
        })
    }
}

fn required(records: &[&Value], path: &str) -> Result<Vec<String>> {
    collect_field(records, path)?
        .ok_or_else(|| Error::schema_mismatch(format!("missing field: {}", path)))
}

/// 레코드마다 경로를 따라가 문자열 수집
/// 어떤 레코드에도 경로가 없으면 None (레코드가 없으면 빈 배열)
fn collect_field(records: &[&Value], path: &str) -> Result<Option<Vec<String>>> {
    let segments: Vec<&str> = path.split('/').skip(1).collect();
    let mut values = Vec::with_capacity(records.len());
    let mut found = false;

    for record in records {
        let leaf = segments
            .iter()
            .try_fold(*record, |node, segment| node.get(*segment));
        match leaf {
            Some(value) => {
                found = true;
                values.push(leaf_to_string(value, path)?);
            }
            None => values.push(String::new()),
        }
    }

    if !found && !records.is_empty() {
        return Ok(None);
    }
    Ok(Some(values))
}

fn leaf_to_string(value: &Value, path: &str) -> Result<String> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Null => Ok(String::new()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Array(_) | Value::Object(_) => Err(Error::schema_mismatch(format!(
            "{} is not a scalar value",
            path
        ))),
    }
}
// endregion: --- Document Extraction
