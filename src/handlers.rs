// region:    --- Imports
use crate::auction::{AuctionTable, BidOutcome};
use crate::bidding::commands::{
    handle_create_auction, handle_let_time_pass, handle_place_bid, handle_remove_expired,
    CreateAuctionCommand, PlaceBidCommand,
};
use crate::console::Console;
use crate::error::Result;
use crate::import::ListingSource;
use crate::query;
use crate::store::AuctionStore;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{error, info};

// endregion: --- Imports

// region:    --- Menu
pub const MENU: &str = "\nMenu:\n    (D) - Import Data from URL\n    (A) - Create a New Auction\n    (B) - Bid on an Item\n    (I) - Get Info on Auction\n    (P) - Print All Auctions\n    (R) - Remove Expired Auctions\n    (T) - Let Time Pass\n    (Q) - Quit\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Import,
    Create,
    Bid,
    Info,
    Print,
    RemoveExpired,
    LetTimePass,
    Quit,
}

impl MenuOption {
    /// 메뉴 문자 파싱 (대소문자 무시, 앞뒤 공백 무시)
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_uppercase().as_str() {
            "D" => Some(Self::Import),
            "A" => Some(Self::Create),
            "B" => Some(Self::Bid),
            "I" => Some(Self::Info),
            "P" => Some(Self::Print),
            "R" => Some(Self::RemoveExpired),
            "T" => Some(Self::LetTimePass),
            "Q" => Some(Self::Quit),
            _ => None,
        }
    }
}

enum Flow {
    Continue,
    Quit,
}
// endregion: --- Menu

// region:    --- Session
/// 한 사용자의 콘솔 세션 (테이블, 데이터 소스, 저장소 소유)
pub struct Session {
    pub table: AuctionTable,
    pub username: String,
    source: Box<dyn ListingSource>,
    store: AuctionStore,
}

impl Session {
    pub fn new(
        table: AuctionTable,
        username: impl Into<String>,
        source: Box<dyn ListingSource>,
        store: AuctionStore,
    ) -> Self {
        Self {
            table,
            username: username.into(),
            source,
            store,
        }
    }

    /// 메뉴 루프 실행, 종료(Q 또는 입력 끝) 시 테이블 저장
    pub async fn run<R, W>(&mut self, console: &mut Console<R, W>) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        loop {
            console.print(MENU).await?;
            let Some(input) = console.prompt_string("\nPlease select an option: ").await? else {
                break;
            };
            let flow = match MenuOption::parse(&input) {
                Some(option) => self.dispatch(option, console).await?,
                None => {
                    console.println("ERROR: Not an option!").await?;
                    Flow::Continue
                }
            };
            if let Flow::Quit = flow {
                break;
            }
        }

        console.println("\nWriting Auction Table to file...").await?;
        if let Err(e) = self.store.save(&self.table).await {
            error!("{:<12} --> 스냅샷 저장 실패: {}", "Console", e);
            console.println(&e.to_string()).await?;
        }
        console.println("Done!\nGoodbye.").await?;
        Ok(())
    }

    async fn dispatch<R, W>(&mut self, option: MenuOption, console: &mut Console<R, W>) -> Result<Flow>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("{:<12} --> 메뉴 선택: {:?}", "Console", option);
        match option {
            MenuOption::Import => self.handle_import(console).await,
            MenuOption::Create => self.handle_create(console).await,
            MenuOption::Bid => self.handle_bid(console).await,
            MenuOption::Info => self.handle_info(console).await,
            MenuOption::Print => {
                console.print(&query::handlers::get_all_auctions(&self.table)).await?;
                Ok(Flow::Continue)
            }
            MenuOption::RemoveExpired => {
                console.println("Removing expired auctions...").await?;
                handle_remove_expired(&mut self.table);
                console.println("All expired auctions removed.").await?;
                Ok(Flow::Continue)
            }
            MenuOption::LetTimePass => self.handle_time(console).await,
            MenuOption::Quit => Ok(Flow::Quit),
        }
    }

    /// (D) 가져오기, 실패하면 기존 테이블 유지
    async fn handle_import<R, W>(&mut self, console: &mut Console<R, W>) -> Result<Flow>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let Some(url) = console.prompt_string("Please enter a URL: ").await? else {
            return Ok(Flow::Quit);
        };
        console.println("\nLoading...").await?;
        match AuctionTable::import_from(self.source.as_ref(), url.trim()).await {
            Ok(table) => {
                self.table = table;
                console.println("Auction data loaded successfully!").await?;
            }
            Err(e) => console.println(&e.to_string()).await?,
        }
        Ok(Flow::Continue)
    }

    /// (A) 현재 사용자를 판매자로 경매 등록
    async fn handle_create<R, W>(&mut self, console: &mut Console<R, W>) -> Result<Flow>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        console
            .println(&format!("\nCreating new Auction as {}", self.username))
            .await?;
        let Some(auction_id) = console.prompt_string("Please enter an Auction ID: ").await? else {
            return Ok(Flow::Quit);
        };
        let Some(hours) = console
            .prompt_number::<u32>("Please enter an Auction time (hours): ", |_| true)
            .await?
        else {
            return Ok(Flow::Quit);
        };
        let Some(item_info) = console.prompt_string("Please enter some Item Info: ").await? else {
            return Ok(Flow::Quit);
        };

        let cmd = CreateAuctionCommand {
            auction_id: auction_id.clone(),
            hours,
            seller_name: self.username.clone(),
            item_info,
        };
        match handle_create_auction(&mut self.table, cmd) {
            Ok(()) => {
                console
                    .println(&format!("\nAuction {} inserted into table.", auction_id))
                    .await?
            }
            Err(e) => console.println(&format!("\n{}", e)).await?,
        }
        Ok(Flow::Continue)
    }

    /// (B) 입찰, 마감된 경매면 상태만 출력
    async fn handle_bid<R, W>(&mut self, console: &mut Console<R, W>) -> Result<Flow>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let Some(auction_id) = console.prompt_string("Please enter an Auction id: ").await? else {
            return Ok(Flow::Quit);
        };
        let auction_id = auction_id.trim().to_string();
        console.println("").await?;

        let Some(auction) = self.table.get(&auction_id) else {
            console.println("ERROR: Auction does not exist").await?;
            return Ok(Flow::Continue);
        };
        let is_open = auction.is_open();
        console.println(&query::handlers::get_bid_status(auction)).await?;

        if !is_open {
            console.println("You can no longer bid on this item.").await?;
            return Ok(Flow::Continue);
        }

        let Some(bid_amount) = console
            .prompt_number::<f64>("What would you like to bid?: ", |amount| amount.is_finite())
            .await?
        else {
            return Ok(Flow::Quit);
        };
        let cmd = PlaceBidCommand {
            auction_id,
            bidder_name: self.username.clone(),
            bid_amount,
        };
        match handle_place_bid(&mut self.table, cmd) {
            Ok(BidOutcome::Accepted) => console.println("Bid accepted.").await?,
            Ok(BidOutcome::Rejected) => console.println("Bid was not accepted.").await?,
            Err(e) => console.println(&e.to_string()).await?,
        }
        Ok(Flow::Continue)
    }

    /// (I) 경매 정보
    async fn handle_info<R, W>(&mut self, console: &mut Console<R, W>) -> Result<Flow>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let Some(auction_id) = console.prompt_string("Please enter an Auction ID: ").await? else {
            return Ok(Flow::Quit);
        };
        match query::handlers::get_auction_info(&self.table, auction_id.trim()) {
            Some(info) => console.println(&format!("\n{}", info)).await?,
            None => console.println("No auction found").await?,
        }
        Ok(Flow::Continue)
    }

    /// (T) 시간 경과
    async fn handle_time<R, W>(&mut self, console: &mut Console<R, W>) -> Result<Flow>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let Some(hours) = console
            .prompt_number::<i64>("How many hours should pass: ", |_| true)
            .await?
        else {
            return Ok(Flow::Quit);
        };
        console.println("\nTime passing...").await?;
        match handle_let_time_pass(&mut self.table, hours) {
            Ok(()) => console.println("Auction times updated.").await?,
            Err(e) => console.println(&e.to_string()).await?,
        }
        Ok(Flow::Continue)
    }
}
// endregion: --- Session
