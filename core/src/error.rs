//! Error types for persistence paths.
//!
//! The overlay is a debug tool and must never take the host down: settings
//! parsing recovers by skipping, lookups return `Option`. The only errors
//! surfaced to callers are filesystem/serialization failures when writing
//! state out.

use thiserror::Error;

/// Failure while persisting overlay state (config or layout files).
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config serialization failed: {0}")]
    Serialize(#[from] toml::ser::Error),
}
