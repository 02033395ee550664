//! Display formatting shared by the chart builders and the swap feed.

use chrono::{DateTime, Local, NaiveDate, TimeDelta, TimeZone};

/// Round to one decimal place for display.
///
/// Halves go to the even neighbour, as pandas does: `1.25` becomes `1.2`
/// and `0.75` becomes `0.8`.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// Render daily snapshot ids (days since the Unix epoch) as UTC dates.
///
/// Ids that are not integers are passed through unchanged.
pub fn format_xaxis<S: AsRef<str>>(ids: &[S]) -> Vec<String> {
    ids.iter().map(|id| format_day_id(id.as_ref())).collect()
}

/// Ids outside the range chrono can represent are passed through as well.
pub fn format_day_id(id: &str) -> String {
    let Ok(days) = id.trim().parse::<i64>() else {
        return id.to_string();
    };
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1);
    TimeDelta::try_days(days)
        .zip(epoch)
        .and_then(|(delta, epoch)| epoch.checked_add_signed(delta))
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| id.to_string())
}

/// Fixed two decimals with comma-grouped thousands: `1234.5` → `1,234.50`.
pub fn format_usd(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    format!("{}{}.{}", sign, grouped, frac_part)
}

/// Local wall-clock `HH:MM:SS` for an epoch timestamp in seconds.
pub fn format_clock(timestamp: i64) -> String {
    format_clock_in(&Local, timestamp)
}

/// `HH:MM:SS` for an epoch timestamp in the given time zone.
pub fn format_clock_in<Tz: TimeZone>(tz: &Tz, timestamp: i64) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match DateTime::from_timestamp(timestamp, 0) {
        Some(utc) => utc.with_timezone(tz).format("%H:%M:%S").to_string(),
        None => String::new(),
    }
}
