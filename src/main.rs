// region:    --- Imports
use auction_table::auction::AuctionTable;
use auction_table::config::Config;
use auction_table::console::Console;
use auction_table::handlers::Session;
use auction_table::import::HttpListingSource;
use auction_table::store::AuctionStore;
use tokio::io::BufReader;
use tracing::{error, info, warn};
// endregion: --- Imports

// region:    --- Main
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // logging 초기화 (콘솔 출력과 섞이지 않도록 stderr)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();

    let config = Config::from_env();
    info!("{:<12} --> 설정: {:?}", "Main", config);

    let mut console = Console::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout());
    console.println("Starting...").await?;

    // 이전 스냅샷 로드
    let store = AuctionStore::new(config.store_path.clone());
    let table = match store.load().await {
        Ok(Some(table)) => {
            console.println("Loading previous Auction Table...").await?;
            table
        }
        Ok(None) => {
            console
                .println("No previous auction table detected.\nCreating new table...\n")
                .await?;
            AuctionTable::new()
        }
        Err(e) => {
            warn!("{:<12} --> 스냅샷 로드 실패: {}", "Main", e);
            console
                .println("No previous auction table detected.\nCreating new table...\n")
                .await?;
            AuctionTable::new()
        }
    };

    let source = match HttpListingSource::new(config.import_timeout) {
        Ok(source) => source,
        Err(e) => {
            error!("{:<12} --> HTTP 클라이언트 생성 실패: {}", "Main", e);
            return Err(e.into());
        }
    };

    let username = match config.username.clone() {
        Some(name) => name,
        None => match console.prompt_string("Please select a username: ").await? {
            Some(name) => name.trim().to_string(),
            None => {
                store.save(&table).await?;
                return Ok(());
            }
        },
    };

    let mut session = Session::new(table, username, Box::new(source), store);
    session.run(&mut console).await?;
    Ok(())
}
// endregion: --- Main
