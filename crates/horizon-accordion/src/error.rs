//! Error types for the accordion model.
//!
//! Selection transitions never fail. Errors only surface at the edges:
//! addressing an item that is not registered, or loading a malformed
//! configuration.

use std::path::PathBuf;

use crate::descendants::ItemId;

/// Result type alias for accordion operations.
pub type Result<T> = std::result::Result<T, AccordionError>;

/// Errors that can occur when driving an accordion.
#[derive(Debug, thiserror::Error)]
pub enum AccordionError {
    /// The item was never registered or has already been removed.
    #[error("Unknown accordion item {0:?}")]
    UnknownItem(ItemId),

    /// TOML configuration could not be parsed.
    #[error("Invalid accordion configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON configuration could not be parsed.
    #[error("Invalid accordion configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be read.
    #[error("Failed to read accordion configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AccordionError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
