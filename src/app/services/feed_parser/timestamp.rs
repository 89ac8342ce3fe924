//! UTC timestamp derivation from feed date/time tokens

use chrono::{LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::constants::{TIMESTAMP_TOKEN_COUNT, TWO_DIGIT_YEAR_BASE};

/// The wall-clock default used before any record supplies a real date
pub fn default_timestamp() -> i64 {
    Utc::now().timestamp_millis()
}

/// Derive an epoch-millisecond timestamp from a record's leading tokens
///
/// The first five tokens are interpreted as year, month, day, hour, minute.
/// Two-digit years are pivoted into the 2000s; years before 2000 are not
/// supported. Any numeric-parse failure or invalid calendar combination
/// (e.g. month 13) yields `None` so the caller retains its previous value.
pub fn record_timestamp(tokens: &[&str]) -> Option<i64> {
    if tokens.len() < TIMESTAMP_TOKEN_COUNT {
        return None;
    }

    let mut year: i32 = tokens[0].parse().ok()?;
    if year < 100 {
        year += TWO_DIGIT_YEAR_BASE;
    }
    let month: u32 = tokens[1].parse().ok()?;
    let day: u32 = tokens[2].parse().ok()?;
    let hour: u32 = tokens[3].parse().ok()?;
    let minute: u32 = tokens[4].parse().ok()?;

    match Utc.with_ymd_and_hms(year, month, day, hour, minute, 0) {
        LocalResult::Single(instant) => Some(instant.timestamp_millis()),
        _ => None,
    }
}

/// Epoch milliseconds for a calendar date at UTC midnight
pub fn midnight_utc_millis(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}
