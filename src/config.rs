/// 환경 변수 기반 설정
// region:    --- Imports
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;
// endregion: --- Imports

// region:    --- Config
pub const DEFAULT_STORE_PATH: &str = "auctions.json";
pub const DEFAULT_IMPORT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// 스냅샷 파일 위치 (AUCTION_STORE_PATH)
    pub store_path: PathBuf,
    /// 가져오기 HTTP 타임아웃 (AUCTION_IMPORT_TIMEOUT_SECS)
    pub import_timeout: Duration,
    /// 설정되면 사용자 이름을 묻지 않음 (AUCTION_USERNAME)
    pub username: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            import_timeout: Duration::from_secs(DEFAULT_IMPORT_TIMEOUT_SECS),
            username: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 키 조회 함수로 설정 구성, 잘못된 값은 기본값 사용
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let store_path = lookup("AUCTION_STORE_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.store_path);

        let import_timeout = match lookup("AUCTION_IMPORT_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    warn!(
                        "{:<12} --> AUCTION_IMPORT_TIMEOUT_SECS 값이 잘못됨: {:?}, 기본값 사용",
                        "Config", raw
                    );
                    defaults.import_timeout
                }
            },
            None => defaults.import_timeout,
        };

        let username = lookup("AUCTION_USERNAME")
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        Self {
            store_path,
            import_timeout,
            username,
        }
    }
}
// endregion: --- Config

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_without_env() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_reads_values_and_ignores_bad_timeout() {
        let env: HashMap<&str, &str> = [
            ("AUCTION_STORE_PATH", "/tmp/a.json"),
            ("AUCTION_IMPORT_TIMEOUT_SECS", "abc"),
            ("AUCTION_USERNAME", " sean "),
        ]
        .into_iter()
        .collect();
        let config = Config::from_lookup(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.store_path, PathBuf::from("/tmp/a.json"));
        assert_eq!(
            config.import_timeout,
            Duration::from_secs(DEFAULT_IMPORT_TIMEOUT_SECS)
        );
        assert_eq!(config.username.as_deref(), Some("sean"));
    }
}
