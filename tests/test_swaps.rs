//! Swap feed fetching and the derived display columns.

mod common;

use common::{swap_json, swaps_response, MockTransport};
use polygraph::format::format_clock;
use polygraph::models::SwapRecord;
use polygraph::queries::swaps::{display_row, explorer_link, DISPLAY_COLUMNS};
use polygraph::queries::SwapQuery;
use polygraph::Polygraph;

fn sdk(response: serde_json::Value) -> Polygraph {
    common::sdk_with(MockTransport::new().respond("swaps", response))
}

/// `$<digits/commas>.<2 digits>`
fn is_usd(s: &str) -> bool {
    let Some(rest) = s.strip_prefix('$') else {
        return false;
    };
    let Some((int, frac)) = rest.split_once('.') else {
        return false;
    };
    !int.is_empty()
        && int.chars().all(|c| c.is_ascii_digit() || c == ',')
        && frac.len() == 2
        && frac.chars().all(|c| c.is_ascii_digit())
}

fn assert_swap_text(s: &str) {
    let (left, right) = s.split_once(" → ").expect("arrow separator");
    let (amount_in, sym_in) = left.split_once(' ').expect("input symbol");
    let (amount_out, sym_out) = right.split_once(' ').expect("output symbol");
    assert!(is_usd(amount_in), "bad input amount in {s}");
    assert!(is_usd(amount_out), "bad output amount in {s}");
    assert!(!sym_in.is_empty() && !sym_out.is_empty());
}

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

#[test]
fn feed_query_filters_orders_and_limits() {
    let doc = SwapQuery::feed_query(10_000).build();
    assert!(doc.contains(
        "swaps(first: 10, orderBy: timestamp, orderDirection: desc, where: {amountInUSD_gte: \"10000\"})"
    ));
    for field in ["hash", "protocol {", "tokenIn {", "tokenOut {", "amountInUSD", "amountOutUSD"] {
        assert!(doc.contains(field), "missing {field}");
    }
}

#[test]
fn latest_sends_threshold_to_subgraph() {
    let mock = MockTransport::new().respond("swaps", common::sample_swaps_response());
    let requests = mock.requests();
    let sdk = common::sdk_with(mock);
    let subgraph = sdk.subgraph("quick-swap-polygon").unwrap();
    sdk.swaps(subgraph).latest(1_000).unwrap();

    let sent = requests.lock().unwrap();
    assert_eq!(
        sent[0].0,
        "https://api.thegraph.com/subgraphs/name/messari/quickswap-polygon"
    );
    let query = sent[0].1["query"].as_str().unwrap();
    assert!(query.contains("amountInUSD_gte: \"1000\""));
}

// ---------------------------------------------------------------------------
// Display frame
// ---------------------------------------------------------------------------

#[test]
fn latest_projects_display_columns() {
    let sdk = sdk(common::sample_swaps_response());
    let subgraph = sdk.subgraph("uniswap-v3-polygon").unwrap();
    let frame = sdk.swaps(subgraph).latest(100).unwrap();

    assert_eq!(frame.columns(), &DISPLAY_COLUMNS.map(String::from));
    assert_eq!(frame.len(), 4);
    assert_eq!(frame.str_column("dex").unwrap()[0], "Uniswap V3");
    assert_eq!(frame.str_column("network").unwrap()[0], "MATIC");
}

#[test]
fn swap_column_matches_amount_symbol_pattern() {
    let sdk = sdk(common::sample_swaps_response());
    let subgraph = sdk.subgraph("uniswap-v3-polygon").unwrap();
    let rows = sdk.swaps(subgraph).records(100).unwrap();

    for row in &rows {
        assert_swap_text(&row.swap);
    }
    let big = rows.iter().find(|r| r.txn.contains("0xbbb")).unwrap();
    assert_eq!(big.swap, "$1,234,567.89 WETH → $1,234,000.00 USDC");
}

#[test]
fn txn_column_links_to_hash() {
    let sdk = sdk(common::sample_swaps_response());
    let subgraph = sdk.subgraph("uniswap-v3-polygon").unwrap();
    let rows = sdk.swaps(subgraph).records(100).unwrap();

    for row in &rows {
        assert_eq!(row.txn.matches("](").count(), 1);
        let url = row
            .txn
            .strip_prefix("[🔗](")
            .and_then(|s| s.strip_suffix(')'))
            .expect("markdown link");
        assert!(url.starts_with("https://polygonscan.com/tx/"));
        let segment = url.rsplit('/').next().unwrap();
        assert!(["0xaaa", "0xbbb", "0xccc", "0xddd"].contains(&segment));
    }
}

#[test]
fn explorer_link_format() {
    assert_eq!(
        explorer_link("0xdeadbeef"),
        "[🔗](https://polygonscan.com/tx/0xdeadbeef)"
    );
}

#[test]
fn rows_are_sorted_by_time_desc() {
    let sdk = sdk(common::sample_swaps_response());
    let subgraph = sdk.subgraph("uniswap-v3-polygon").unwrap();
    let rows = sdk.swaps(subgraph).records(100).unwrap();
    for pair in rows.windows(2) {
        assert!(pair[0].time >= pair[1].time);
    }
}

#[test]
fn equal_times_keep_server_order() {
    let ts = 1_700_000_000;
    let sdk = sdk(swaps_response(vec![
        swap_json("0x01", ts, "500", "499"),
        swap_json("0x02", ts, "600", "599"),
        swap_json("0x03", ts, "700", "699"),
    ]));
    let subgraph = sdk.subgraph("uniswap-v3-polygon").unwrap();
    let rows = sdk.swaps(subgraph).records(100).unwrap();

    let hashes: Vec<&str> = rows
        .iter()
        .map(|r| r.txn.rsplit('/').next().unwrap().trim_end_matches(')'))
        .collect();
    assert_eq!(hashes, vec!["0x01", "0x02", "0x03"]);
    assert!(rows.iter().all(|r| r.time == format_clock(ts)));
}

// ---------------------------------------------------------------------------
// Threshold and limit
// ---------------------------------------------------------------------------

#[test]
fn never_more_than_ten_rows_and_all_at_or_above_threshold() {
    let mut payload = Vec::new();
    for i in 0..12 {
        payload.push(swap_json(
            &format!("0x{:02}", i),
            1_700_000_000 - i,
            "1000",
            "999",
        ));
    }
    payload.insert(3, swap_json("0xsmall", 1_700_000_050, "999.99", "999"));

    let sdk = sdk(swaps_response(payload));
    let subgraph = sdk.subgraph("uniswap-v3-polygon").unwrap();
    let raw = sdk.swaps(subgraph).raw(1_000).unwrap();

    assert_eq!(raw.len(), 10);
    assert!(raw.iter().all(|r| r.amount_in_usd >= 1_000.0));
    assert!(raw.iter().all(|r| r.hash != "0xsmall"));
}

#[test]
fn empty_feed_renders_empty_table() {
    let sdk = sdk(swaps_response(vec![]));
    let subgraph = sdk.subgraph("uniswap-v3-polygon").unwrap();
    let frame = sdk.swaps(subgraph).latest(100_000).unwrap();
    assert!(frame.is_empty());
    assert_eq!(frame.columns().len(), 5);
}

#[test]
fn display_row_copies_protocol_fields() {
    let record = SwapRecord {
        hash: "0xfeed".into(),
        protocol_name: "SushiSwap".into(),
        protocol_network: "MATIC".into(),
        timestamp: 1_700_000_000,
        token_in_symbol: "WMATIC".into(),
        amount_in_usd: 100.0,
        token_out_symbol: "DAI".into(),
        amount_out_usd: 99.456,
    };
    let row = display_row(&record);
    assert_eq!(row.dex, "SushiSwap");
    assert_eq!(row.network, "MATIC");
    assert_eq!(row.swap, "$100.00 WMATIC → $99.46 DAI");
    assert_eq!(row.time, format_clock(1_700_000_000));
    assert_eq!(row.time.len(), 8);
}
