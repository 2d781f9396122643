//! Error types for the ui-filter crate.
//!
//! Building a descriptor from a typed event never fails. Errors only appear
//! at the JSON boundary and when parsing textual enums.

use thiserror::Error;

/// Errors that can occur when decoding events or encoding descriptors.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The lazy-load event document could not be decoded.
    #[error("invalid lazy-load event: {0}")]
    InvalidEvent(#[source] serde_json::Error),

    /// The filter descriptor document could not be decoded.
    #[error("invalid filter descriptor: {0}")]
    InvalidDescriptor(#[source] serde_json::Error),

    /// The filter descriptor could not be encoded.
    #[error("failed to encode filter descriptor: {0}")]
    Encode(#[source] serde_json::Error),

    /// Sort direction text was neither `asc` nor `desc`.
    #[error("invalid sort direction '{0}', expected 'asc' or 'desc'")]
    InvalidSortDirection(String),
}

/// Result type for ui-filter operations.
pub type Result<T> = std::result::Result<T, FilterError>;
