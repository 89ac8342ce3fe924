//! Filesystem adapter for acquiring feed text
//!
//! The parser core treats feed acquisition as an external collaborator with
//! a trivial contract: produce a text blob or report its absence. Any read
//! failure is logged and mapped to `None`, never propagated, so a missing
//! feed degrades to "no data available" rather than aborting the run.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

/// Read a feed file, mapping any failure to `None`
pub fn read_feed(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(text) => {
            debug!(path = %path.display(), bytes = text.len(), "read feed");
            Some(text)
        }
        Err(error) => {
            warn!(path = %path.display(), %error, "feed unavailable");
            None
        }
    }
}
