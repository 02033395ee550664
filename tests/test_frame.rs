//! Frame column access, reshaping and markdown rendering.

use polygraph::frame::{as_f64, as_i64};
use polygraph::{Frame, PolygraphError};
use serde_json::{json, Value};

fn sample() -> Frame {
    let mut frame = Frame::new(vec!["swaps_time".into(), "swaps_amount".into()]);
    frame.push_row(vec![json!("10:00:00"), json!("12.5")]);
    frame.push_row(vec![json!("11:00:00"), json!(3)]);
    frame.push_row(vec![json!("10:00:00"), Value::Null]);
    frame
}

#[test]
fn push_row_pads_short_rows() {
    let mut frame = Frame::new(vec!["a".into(), "b".into()]);
    frame.push_row(vec![json!(1)]);
    assert_eq!(frame.rows()[0], vec![json!(1), Value::Null]);
}

#[test]
fn f64_column_coerces_strings_and_nulls() {
    let frame = sample();
    assert_eq!(frame.f64_column("swaps_amount").unwrap(), vec![12.5, 3.0, 0.0]);
}

#[test]
fn missing_column_is_an_error() {
    let frame = sample();
    match frame.column("nope") {
        Err(PolygraphError::MissingColumn(name)) => assert_eq!(name, "nope"),
        other => panic!("expected MissingColumn, got {:?}", other),
    }
}

#[test]
fn strip_prefix_renames_columns() {
    let mut frame = sample();
    frame.strip_prefix("swaps_");
    assert_eq!(frame.columns(), &["time".to_string(), "amount".to_string()]);
}

#[test]
fn sort_desc_is_stable_for_equal_keys() {
    let mut frame = Frame::new(vec!["time".into(), "tag".into()]);
    frame.push_row(vec![json!("10:00:00"), json!("first")]);
    frame.push_row(vec![json!("09:00:00"), json!("early")]);
    frame.push_row(vec![json!("10:00:00"), json!("second")]);
    frame.push_row(vec![json!("11:00:00"), json!("late")]);

    frame.sort_desc_by("time").unwrap();
    let tags = frame.str_column("tag").unwrap();
    assert_eq!(tags, vec!["late", "first", "second", "early"]);
}

#[test]
fn retain_and_truncate() {
    let mut frame = sample();
    frame.retain(|row| !row[1].is_null());
    assert_eq!(frame.len(), 2);
    frame.truncate(1);
    assert_eq!(frame.len(), 1);
}

#[test]
fn markdown_has_index_column_and_escapes_pipes() {
    let mut frame = Frame::new(vec!["dex".into(), "swap".into()]);
    frame.push_row(vec![json!("Uniswap"), json!("a|b")]);
    let md = frame.to_markdown();
    let lines: Vec<&str> = md.lines().collect();
    assert_eq!(lines[0], "|  | dex | swap |");
    assert_eq!(lines[1], "|---:|:---|:---|");
    assert_eq!(lines[2], "| 0 | Uniswap | a\\|b |");
}

#[test]
fn empty_frame_renders_header_only() {
    let frame = Frame::new(vec!["time".into()]);
    assert!(frame.is_empty());
    assert_eq!(frame.to_markdown().lines().count(), 2);
}

#[test]
fn numeric_coercion_helpers() {
    assert_eq!(as_f64(&json!("1.25")), Some(1.25));
    assert_eq!(as_f64(&json!(true)), None);
    assert_eq!(as_i64(&json!("1700000000")), Some(1_700_000_000));
    assert_eq!(as_i64(&json!(42)), Some(42));
    assert_eq!(as_i64(&Value::Null), None);
}
