//! NDBC Extractor Library
//!
//! A Rust library for extracting sea-surface temperature and significant
//! wave height observations from NOAA NDBC buoy text feeds.
//!
//! This library provides tools for:
//! - Parsing whitespace-delimited tabular feeds with optional `#` headers
//! - Parsing freeform `label: value` feeds with unit conversion
//! - Resolving measurement columns by header alias or positional fallback
//! - Deriving UTC timestamps from leading date/time columns
//! - Degrading gracefully when feeds are partial, malformed, or missing

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod feed_parser;
    }
    pub mod adapters {
        pub mod filesystem;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::Observation;
pub use app::services::feed_parser::{parse_freeform, parse_tabular};

/// Result type alias for the NDBC extractor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for NDBC extraction operations
///
/// Parsing itself never fails: a feed that yields no measurements produces
/// `None`, not an error. These variants cover the CLI and adapter layers.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// JSON report serialization error
    #[error("Report serialization error: {message}")]
    ReportSerialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a report serialization error
    pub fn report_serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::ReportSerialization {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::ReportSerialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
