use approx::assert_relative_eq;
use async_trait::async_trait;
use auction_table::auction::AuctionTable;
use auction_table::import::{
    clean_seller_name, compose_item_info, parse_bid, parse_time_left, ListingSource, RawListings,
};
use auction_table::{Error, Result};
use serde_json::{json, Value};

struct FixtureSource {
    document: Value,
}

#[async_trait]
impl ListingSource for FixtureSource {
    async fn fetch(&self, _url: &str) -> Result<RawListings> {
        RawListings::from_document(&self.document)
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn raw(ids: &[&str], times: &[&str], bids: &[&str]) -> RawListings {
    let n = ids.len();
    RawListings {
        time_left: strings(times),
        current_bid: strings(bids),
        id_num: strings(ids),
        seller_name: vec!["seller".to_string(); n],
        bidder_name: Some(vec!["bidder".to_string(); n]),
        memory: vec!["8GB".to_string(); n],
        hard_drive: vec![String::new(); n],
        cpu: vec!["i5".to_string(); n],
    }
}

fn import_cause(err: &Error) -> &Error {
    match err {
        Error::ImportFailed(inner) => inner.as_ref(),
        other => panic!("expected ImportFailed, got {:?}", other),
    }
}

// region:    --- Field Parsing

#[test]
fn test_parse_time_left() {
    assert_eq!(parse_time_left("2 days 3 hours").unwrap(), 51);
    assert_eq!(parse_time_left("5 hours").unwrap(), 5);
    assert_eq!(parse_time_left("0 days 0 hours").unwrap(), 0);
    assert_eq!(parse_time_left("1 day 1 hour").unwrap(), 25);
    assert_eq!(parse_time_left("3 days").unwrap(), 72);
    assert_eq!(parse_time_left("").unwrap(), 0);
}

#[test]
fn test_parse_time_left_rejects_bad_numbers() {
    assert!(matches!(
        parse_time_left("two days"),
        Err(Error::MalformedTime(_))
    ));
    assert!(matches!(
        parse_time_left("1 day x hours"),
        Err(Error::MalformedTime(_))
    ));
    assert!(matches!(
        parse_time_left("-4 hours"),
        Err(Error::MalformedTime(_))
    ));
}

#[test]
fn test_parse_bid() {
    assert_relative_eq!(parse_bid("$1,234.50").unwrap(), 1234.50);
    assert_relative_eq!(parse_bid("$0.00").unwrap(), 0.0);
    assert_relative_eq!(parse_bid("$1,000,000").unwrap(), 1_000_000.0);
    assert_relative_eq!(parse_bid("€12.5").unwrap(), 12.5);
}

#[test]
fn test_parse_bid_rejects_non_numeric() {
    for text in ["", "$", "$abc", "$1.2.3", "$-5.00", "$inf"] {
        assert!(
            matches!(parse_bid(text), Err(Error::MalformedBid(_))),
            "{:?} should be rejected",
            text
        );
    }
}

#[test]
fn test_compose_item_info() {
    assert_eq!(compose_item_info("i7", "", "1TB"), "i7 - 1TB");
    assert_eq!(compose_item_info("i7", "16GB", "1TB"), "i7 - 16GB - 1TB");
    assert_eq!(compose_item_info("", "16GB", ""), "16GB");
    assert_eq!(compose_item_info("", "", ""), "N/A");
    assert_eq!(compose_item_info("i7\n", "\r\n", "1\nTB"), "i7 - 1TB");
}

#[test]
fn test_clean_seller_name() {
    assert_eq!(clean_seller_name(" big seller\r\n"), "bigseller");
}

// endregion: --- Field Parsing

// region:    --- Table Import

#[test]
fn test_from_raw_builds_table() {
    let table = AuctionTable::from_raw(&raw(
        &["1", "2"],
        &["1 day 2 hours", "4 hours"],
        &["$10.00", "$0.00"],
    ))
    .unwrap();

    assert_eq!(table.len(), 2);
    let first = table.get("1").unwrap();
    assert_eq!(first.time_remaining(), 26);
    assert_relative_eq!(first.current_bid(), 10.0);
    assert_eq!(first.buyer_name(), "bidder");
    assert_eq!(first.item_info(), "i5 - 8GB");
}

#[test]
fn test_duplicate_ids_keep_last_record() {
    let table = AuctionTable::from_raw(&raw(
        &["7", "7"],
        &["1 hours", "9 hours"],
        &["$10.00", "$20.00"],
    ))
    .unwrap();

    assert_eq!(table.len(), 1);
    let auction = table.get("7").unwrap();
    assert_eq!(auction.time_remaining(), 9);
    assert_relative_eq!(auction.current_bid(), 20.0);
}

#[test]
fn test_any_bad_field_aborts_import() {
    let err = AuctionTable::from_raw(&raw(
        &["1", "2"],
        &["1 hours", "soon hours"],
        &["$1.00", "$2.00"],
    ))
    .unwrap_err();
    assert!(matches!(import_cause(&err), Error::MalformedTime(_)));

    let err = AuctionTable::from_raw(&raw(&["1"], &["1 hours"], &["$lots"])).unwrap_err();
    assert!(matches!(import_cause(&err), Error::MalformedBid(_)));
}

#[test]
fn test_length_mismatch_aborts_import() {
    let mut listings = raw(&["1", "2"], &["1 hours", "2 hours"], &["$1.00", "$2.00"]);
    listings.cpu.pop();

    let err = AuctionTable::from_raw(&listings).unwrap_err();
    assert!(matches!(import_cause(&err), Error::SchemaMismatch(_)));
}

#[test]
fn test_seven_field_form_has_no_buyers() {
    let mut listings = raw(&["1"], &["1 hours"], &["$1.00"]);
    listings.bidder_name = None;

    let table = AuctionTable::from_raw(&listings).unwrap();
    assert_eq!(table.get("1").unwrap().buyer_name(), "");
}

// endregion: --- Table Import

// region:    --- Document Extraction

#[test]
fn test_from_document_reads_field_paths() {
    let document = json!({
        "listing": [
            {
                "auction_info": {
                    "time_left": "2 days 3 hours",
                    "current_bid": "$1,234.50",
                    "id_num": 511601118,
                    "high_bidder": { "bidder_name": "gosha555" }
                },
                "seller_info": { "seller_name": "cubs fantony" },
                "item_info": { "cpu": "i7", "memory": null, "hard_drive": "1TB" }
            },
            {
                "auction_info": { "time_left": "5 hours", "current_bid": "$0.00", "id_num": "2" },
                "seller_info": { "seller_name": "x" },
                "item_info": { "cpu": "", "memory": "", "hard_drive": "" }
            }
        ]
    });

    let listings = RawListings::from_document(&document).unwrap();
    assert_eq!(listings.id_num, strings(&["511601118", "2"]));
    assert_eq!(listings.memory, strings(&["", ""]));
    assert_eq!(listings.bidder_name, Some(strings(&["gosha555", ""])));
}

#[test]
fn test_from_document_single_object_listing() {
    let document = json!({
        "listing": {
            "auction_info": { "time_left": "5 hours", "current_bid": "$3.00", "id_num": "9" },
            "seller_info": { "seller_name": "x" },
            "item_info": { "cpu": "i3", "memory": "", "hard_drive": "" }
        }
    });

    let listings = RawListings::from_document(&document).unwrap();
    assert_eq!(listings.id_num, strings(&["9"]));
    assert_eq!(listings.bidder_name, None);
}

#[test]
fn test_from_document_missing_field() {
    let document = json!({
        "listing": [{
            "auction_info": { "time_left": "5 hours", "current_bid": "$3.00", "id_num": "9" },
            "seller_info": { "seller_name": "x" },
            "item_info": { "memory": "", "hard_drive": "" }
        }]
    });
    assert!(matches!(
        RawListings::from_document(&document),
        Err(Error::SchemaMismatch(_))
    ));
    assert!(matches!(
        RawListings::from_document(&json!({ "items": [] })),
        Err(Error::SchemaMismatch(_))
    ));
}

#[tokio::test]
async fn test_import_from_source() {
    let source = FixtureSource {
        document: json!({
            "listing": [{
                "auction_info": { "time_left": "1 day", "current_bid": "$5.00", "id_num": "3" },
                "seller_info": { "seller_name": "a b" },
                "item_info": { "cpu": "", "memory": "4GB", "hard_drive": "" }
            }]
        }),
    };

    let table = AuctionTable::import_from(&source, "http://example.test")
        .await
        .unwrap();
    let auction = table.get("3").unwrap();
    assert_eq!(auction.time_remaining(), 24);
    assert_eq!(auction.seller_name(), "ab");
    assert_eq!(auction.item_info(), "4GB");
}

#[tokio::test]
async fn test_import_from_broken_source_fails() {
    let source = FixtureSource {
        document: json!({ "listing": 42 }),
    };

    let err = AuctionTable::import_from(&source, "http://example.test")
        .await
        .unwrap_err();
    assert!(matches!(import_cause(&err), Error::SchemaMismatch(_)));
}

// endregion: --- Document Extraction
