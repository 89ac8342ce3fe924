//! Column resolution for whitespace-delimited tabular feeds
//!
//! Maps each measurement to a zero-based column index using header aliases
//! when a header row is present, and a positional fallback otherwise.

use crate::constants::{
    DATE_COLUMN_TOKENS, HEADER_SCAN_LINES, SST_COLUMN_ALIASES, WAVE_COLUMN_ALIASES,
};

/// Resolved column positions for the two measurements
///
/// Derived once per parse call and reused for every data line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndices {
    /// Sea-surface temperature column
    pub sst: usize,

    /// Significant wave height column
    pub wave: usize,
}

impl ColumnIndices {
    /// Resolve both measurement columns from an optional header token row
    ///
    /// Each measurement is resolved independently: alias lookup first, then
    /// the leading-date-column count as a positional fallback. With no
    /// header at all, both indices default to column 0.
    pub fn resolve(headers: Option<&[String]>) -> Self {
        let date_cols = headers.map(date_column_count).unwrap_or(0);

        ColumnIndices {
            sst: resolve_column(headers, SST_COLUMN_ALIASES).unwrap_or(date_cols),
            wave: resolve_column(headers, WAVE_COLUMN_ALIASES).unwrap_or(date_cols),
        }
    }

    /// The larger of the two indices; lines shorter than this are skipped
    pub fn max_index(&self) -> usize {
        self.sst.max(self.wave)
    }
}

/// Locate the header row and split it into upper-cased tokens
///
/// The header is the first non-empty line within the leading scan window
/// that contains an alphabetic character, with a leading `#` stripped.
/// Purely numeric feeds have no header and return `None`.
pub fn header_tokens(raw_lines: &[String]) -> Option<Vec<String>> {
    raw_lines
        .iter()
        .take(HEADER_SCAN_LINES)
        .find(|line| line.chars().any(|c| c.is_ascii_alphabetic()))
        .map(|line| {
            let stripped = line.strip_prefix('#').unwrap_or(line);
            stripped
                .split_whitespace()
                .map(|token| token.to_uppercase())
                .collect()
        })
}

/// Find the column index for a measurement by ranked alias lookup
///
/// Aliases are checked in priority order; the first one present in the
/// header wins. Returns `None` when no header is available or no alias
/// matches.
pub fn resolve_column(headers: Option<&[String]>, aliases: &[&str]) -> Option<usize> {
    let headers = headers?;
    aliases
        .iter()
        .find_map(|alias| headers.iter().position(|h| h == alias))
}

/// Count the leading header tokens that name date/time components
///
/// This is a prefix count: counting stops at the first token that is not
/// date-like. The result is the index of the first data column, used as
/// the positional fallback when no measurement alias resolves.
pub fn date_column_count(headers: &[String]) -> usize {
    headers
        .iter()
        .take_while(|token| is_date_token(token))
        .count()
}

fn is_date_token(token: &str) -> bool {
    DATE_COLUMN_TOKENS
        .iter()
        .any(|candidate| token.eq_ignore_ascii_case(candidate))
}
