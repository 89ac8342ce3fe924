//! Test fixtures and helpers for feed parser testing

use chrono::{TimeZone, Utc};

mod freeform_tests;

/// A realistic realtime2-style feed: header, units row, newest record first
/// chronologically last in the file
pub fn realtime2_feed() -> &'static str {
    "#YY  MM DD hh mm WDIR WSPD GST  WVHT   DPD   APD MWD   PRES  ATMP  WTMP  DEWP  VIS PTDY  TIDE\n\
     #yr  mo dy hr mn degT m/s  m/s     m   sec   sec degT   hPa  degC  degC  degC  nmi  hPa    ft\n\
     23 01 15 11 00 230  4.0  5.0  1.10   7.0   5.2 221 1022.1  10.2 14.20   8.4   MM -1.1    MM\n\
     23 01 15 12 00 240  5.0  6.0  1.20   7.1   5.3 222 1022.0  10.4 14.50   8.5   MM -1.0    MM\n"
}

/// Epoch milliseconds for a UTC calendar instant, for expected values
pub fn utc_millis(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> i64 {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap()
        .timestamp_millis()
}

/// Assert two floats are equal within parsing tolerance
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {} to be close to {}",
        actual,
        expected
    );
}
