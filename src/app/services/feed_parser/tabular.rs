//! Scanner for whitespace-delimited tabular buoy feeds
//!
//! Walks data records from most recent to oldest, filling each measurement
//! slot from the first record that carries a usable value, and stopping as
//! soon as both slots are filled.

use tracing::{debug, trace};

use super::column_resolver::{self, ColumnIndices};
use super::timestamp;
use crate::app::models::Observation;
use crate::constants::MISSING_VALUE_SENTINEL;

/// Parse a tabular feed into an observation
///
/// Feeds are chronologically ascending, so data lines are scanned in
/// reverse to prefer the newest reading. Returns `None` when the text
/// contains no data lines or no extractable measurement.
pub fn parse(text: &str) -> Option<Observation> {
    let lines = raw_lines(text);
    let data: Vec<&String> = lines.iter().filter(|line| is_data_line(line)).collect();
    if data.is_empty() {
        debug!("tabular feed has no data lines");
        return None;
    }

    let headers = column_resolver::header_tokens(&lines);
    let columns = ColumnIndices::resolve(headers.as_deref());
    trace!(sst_column = columns.sst, wave_column = columns.wave, "resolved columns");

    let mut sst = None;
    let mut wave = None;
    let mut ts = timestamp::default_timestamp();

    // Newest first; first successful fill wins, older lines never overwrite.
    for line in data.iter().rev() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() <= columns.max_index() {
            continue;
        }

        if sst.is_none() {
            sst = measurement_token(tokens[columns.sst]);
        }
        if wave.is_none() {
            wave = measurement_token(tokens[columns.wave]);
        }

        // The running timestamp tracks the most recent record inspected,
        // whether or not this line contributed a measurement.
        if let Some(derived) = timestamp::record_timestamp(&tokens) {
            ts = derived;
        }

        if sst.is_some() && wave.is_some() {
            break;
        }
    }

    Observation::assemble(sst, wave, ts)
}

/// Split feed text into non-empty lines with carriage returns stripped
pub(super) fn raw_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.replace('\r', ""))
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// A data line is any non-`#` line containing at least one digit
pub(super) fn is_data_line(line: &str) -> bool {
    !line.trim_start().starts_with('#') && line.chars().any(|c| c.is_ascii_digit())
}

/// Parse a measurement token, excluding the missing-value sentinel
pub(super) fn measurement_token(token: &str) -> Option<f64> {
    if token.is_empty() || token == MISSING_VALUE_SENTINEL {
        return None;
    }
    token.parse().ok()
}
