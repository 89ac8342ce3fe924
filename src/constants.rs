//! Application constants for NDBC extractor
//!
//! This module contains the column alias tables, feed conventions, and
//! conversion factors used throughout the extractor.

// =============================================================================
// Column Aliases
// =============================================================================

/// Sea-surface temperature column names, in priority order
///
/// Stations label the water temperature column differently depending on
/// hardware generation and feed vintage. The first alias found in a header
/// wins.
pub const SST_COLUMN_ALIASES: &[&str] = &[
    "WTMP",
    "WTMP_C",
    "SST",
    "OTMP",
    "WATERTEMP",
    "WATER_TEMPERATURE",
];

/// Significant wave height column names, in priority order
pub const WAVE_COLUMN_ALIASES: &[&str] = &[
    "WVHT",
    "HTSGW",
    "SIG_WVHT",
    "SIGNIFICANT_WAVE_HEIGHT",
    "WVHT(M)",
];

/// Header tokens that denote date/time components (matched case-insensitively)
///
/// Used to count leading date columns when no measurement alias resolves,
/// so the positional fallback index lands on the first data column.
pub const DATE_COLUMN_TOKENS: &[&str] = &[
    "#YY", "YYYY", "YY", "MM", "DD", "HH", "TIME", "DATE",
];

// =============================================================================
// Feed Conventions
// =============================================================================

/// Missing value marker used by NDBC tabular feeds
pub const MISSING_VALUE_SENTINEL: &str = "MM";

/// Number of leading lines inspected when locating a header row
pub const HEADER_SCAN_LINES: usize = 10;

/// Minimum token count for a record to carry a YY MM DD hh mm timestamp
pub const TIMESTAMP_TOKEN_COUNT: usize = 5;

/// Two-digit years are pivoted into this century (e.g. 23 -> 2023)
pub const TWO_DIGIT_YEAR_BASE: i32 = 2000;

// =============================================================================
// Unit Conversion
// =============================================================================

/// Feet to meters conversion factor
pub const FEET_TO_METERS: f64 = 0.3048;
