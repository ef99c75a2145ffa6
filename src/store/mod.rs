/// 경매 테이블 스냅샷 저장소 (JSON 파일)
// region:    --- Imports
use crate::auction::{Auction, AuctionTable};
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
// endregion: --- Imports

// region:    --- Snapshot Model
/// 파일에 저장되는 스냅샷
#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub saved_at: DateTime<Utc>,
    pub auctions: Vec<Auction>,
}

impl Snapshot {
    pub fn of(table: &AuctionTable) -> Self {
        Self {
            saved_at: Utc::now(),
            auctions: table.sorted().into_iter().cloned().collect(),
        }
    }

    /// 스냅샷을 테이블로 복원 (입찰가 검증)
    pub fn into_table(self) -> Result<AuctionTable> {
        let mut auctions = HashMap::with_capacity(self.auctions.len());
        for auction in self.auctions {
            let bid = auction.current_bid();
            if !bid.is_finite() || bid < 0.0 {
                return Err(Error::Store(format!(
                    "auction {} has an invalid bid {}",
                    auction.id(),
                    bid
                )));
            }
            if auctions.contains_key(auction.id()) {
                warn!("{:<12} --> 중복 경매 ID: {}", "Store", auction.id());
            }
            auctions.insert(auction.id().to_string(), auction);
        }
        Ok(AuctionTable::from_map(auctions))
    }
}
// endregion: --- Snapshot Model

// region:    --- Auction Store
pub struct AuctionStore {
    path: PathBuf,
}

impl AuctionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 스냅샷 로드, 파일이 없으면 None
    pub async fn load(&self) -> Result<Option<AuctionTable>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("{:<12} --> 저장된 스냅샷 없음: {:?}", "Store", self.path);
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let snapshot: Snapshot = serde_json::from_slice(&bytes)?;
        info!(
            "{:<12} --> 스냅샷 로드 ({} 저장, 경매 {}건)",
            "Store",
            snapshot.saved_at,
            snapshot.auctions.len()
        );
        snapshot.into_table().map(Some)
    }

    /// 스냅샷 저장 (임시 파일에 쓴 뒤 교체)
    pub async fn save(&self, table: &AuctionTable) -> Result<()> {
        let json = serde_json::to_vec_pretty(&Snapshot::of(table))?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        info!(
            "{:<12} --> 스냅샷 저장 완료: {:?} (경매 {}건)",
            "Store",
            self.path,
            table.len()
        );
        Ok(())
    }
}
// endregion: --- Auction Store
