//! Error types for the event pipeline.

use thiserror::Error;

/// Failures talking to the event catalog.
///
/// The orchestrator maps these to an empty event list at the synthesis
/// boundary, so upstream trouble degrades to "no events" instead of a
/// request failure; the variants exist so logging can tell transport
/// problems apart from malformed payloads.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
