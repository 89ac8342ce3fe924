//! Dual-format observation parser for NDBC buoy feeds
//!
//! This module extracts sea-surface temperature, significant wave height,
//! and an observation timestamp from raw feed text of unknown exact shape.
//! Two layouts are supported:
//! - [`tabular`] - whitespace-delimited columns, optionally preceded by a
//!   `#`-prefixed header row
//! - [`freeform`] - line-oriented `label: value` statements, falling back to
//!   the tabular path when no labels match
//!
//! Supporting components:
//! - [`column_resolver`] - header alias lookup with positional fallback
//! - [`timestamp`] - UTC timestamp derivation from leading date/time tokens
//!
//! Parsing is best-effort and pure: malformed lines are skipped silently,
//! nothing is cached between calls, and a feed that yields no measurement
//! produces `None` rather than an error.
//!
//! ## Usage
//!
//! ```rust
//! use ndbc_extractor::app::services::feed_parser;
//!
//! let feed = "#YY MM DD hh mm WVHT WTMP\n23 01 15 12 00 1.20 14.50\n";
//! let obs = feed_parser::parse_tabular(feed).unwrap();
//!
//! assert_eq!(obs.wave_m, Some(1.20));
//! assert_eq!(obs.sst_c, Some(14.50));
//! ```

pub mod column_resolver;
pub mod freeform;
pub mod tabular;
pub mod timestamp;

#[cfg(test)]
mod tests;

// Re-export main entry points for easy access
pub use column_resolver::ColumnIndices;
pub use freeform::parse as parse_freeform;
pub use tabular::parse as parse_tabular;
