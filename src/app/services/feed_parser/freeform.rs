//! Extractor for freeform `label: value` buoy feeds
//!
//! Scans every line for explicitly labeled temperature, wave height, and
//! date fields, converting Fahrenheit and feet where flagged. When no label
//! matches anywhere, the same text is re-parsed through the tabular path as
//! a fallback strategy.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::debug;

use super::column_resolver::{self, date_column_count, resolve_column};
use super::tabular::{is_data_line, measurement_token, raw_lines};
use super::timestamp;
use crate::app::models::Observation;
use crate::constants::{FEET_TO_METERS, WAVE_COLUMN_ALIASES};

// Label patterns tolerate `_`, space, colon, or plain whitespace between the
// label and the value. Unit letters are optional; unlabeled values are taken
// as Celsius / meters.
static TEMPERATURE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)water[_\s]?temperature[:\s]+([0-9.+-]+)\s*([cfm])?").expect("valid pattern")
});

static WAVE_HEIGHT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)wave[_\s]?height[:\s]+([0-9.+-]+)\s*(m|ft)?").expect("valid pattern")
});

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)date[:\s]+(\d{4}-\d{2}-\d{2})").expect("valid pattern"));

/// Parse a freeform feed into an observation
///
/// Every line is scanned; when several lines restate the same field, the
/// last match wins. If either measurement was found via labels the result
/// is returned immediately, otherwise the tabular fallback is attempted.
pub fn parse(text: &str) -> Option<Observation> {
    let mut sst = None;
    let mut wave = None;
    let mut ts = timestamp::default_timestamp();

    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if let Some(caps) = TEMPERATURE_PATTERN.captures(line) {
            if let Ok(value) = caps[1].parse::<f64>() {
                let fahrenheit = caps
                    .get(2)
                    .is_some_and(|unit| unit.as_str().eq_ignore_ascii_case("f"));
                sst = Some(if fahrenheit {
                    (value - 32.0) * 5.0 / 9.0
                } else {
                    value
                });
            }
        }

        if let Some(caps) = WAVE_HEIGHT_PATTERN.captures(line) {
            if let Ok(value) = caps[1].parse::<f64>() {
                let feet = caps
                    .get(2)
                    .is_some_and(|unit| unit.as_str().eq_ignore_ascii_case("ft"));
                wave = Some(if feet { value * FEET_TO_METERS } else { value });
            }
        }

        if let Some(caps) = DATE_PATTERN.captures(line) {
            if let Ok(date) = NaiveDate::parse_from_str(&caps[1], "%Y-%m-%d") {
                ts = timestamp::midnight_utc_millis(date);
            }
        }
    }

    if sst.is_some() || wave.is_some() {
        return Observation::assemble(sst, wave, ts);
    }

    debug!("no labeled fields found, trying tabular fallback");
    tabular_fallback(text)
}

/// Tabular fallback for label-free freeform feeds
///
/// Resolves only the wave-height column; temperature is not recovered
/// positionally on this path.
fn tabular_fallback(text: &str) -> Option<Observation> {
    let lines = raw_lines(text);
    let data: Vec<&String> = lines.iter().filter(|line| is_data_line(line)).collect();
    if data.is_empty() {
        return None;
    }

    let headers = column_resolver::header_tokens(&lines);
    let date_cols = headers.as_deref().map(date_column_count).unwrap_or(0);
    let wave_index =
        resolve_column(headers.as_deref(), WAVE_COLUMN_ALIASES).unwrap_or(date_cols);

    let mut wave = None;
    let mut ts = timestamp::default_timestamp();

    for line in data.iter().rev() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() <= wave_index {
            continue;
        }

        if wave.is_none() {
            wave = measurement_token(tokens[wave_index]);
        }
        if let Some(derived) = timestamp::record_timestamp(&tokens) {
            ts = derived;
        }
        if wave.is_some() {
            break;
        }
    }

    Observation::assemble(None, wave, ts)
}
