/// 경매 테이블 에러 타입
// region:    --- Imports
use thiserror::Error;
// endregion: --- Imports

// region:    --- Error
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// 마감된 경매에 입찰
    #[error("You can no longer bid on this item. (auction {0} is closed)")]
    ClosedAuction(String),

    /// 이미 존재하는 경매 ID로 등록
    #[error("ERROR: There is already an Auction with id {0}.")]
    DuplicateKey(String),

    #[error("ERROR: Auction {0} does not exist")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// 남은 시간 문자열 파싱 실패
    #[error("Malformed time: {0:?}")]
    MalformedTime(String),

    /// 입찰가 문자열 파싱 실패
    #[error("Malformed bid: {0:?}")]
    MalformedBid(String),

    /// 가져오기 전체 실패 (원인 에러 포함)
    #[error("Import failed: {0}")]
    ImportFailed(#[source] Box<Error>),

    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),

    /// 저장된 스냅샷이 불변식을 위반
    #[error("Store error: {0}")]
    Store(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// 가져오기 실패로 감싸기 (이미 감싸진 경우 그대로)
    pub fn import_failed(inner: Error) -> Self {
        match inner {
            Error::ImportFailed(_) => inner,
            other => Error::ImportFailed(Box::new(other)),
        }
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub fn schema_mismatch(msg: impl Into<String>) -> Self {
        Error::SchemaMismatch(msg.into())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::SourceUnavailable(e.to_string())
    }
}
// endregion: --- Error
