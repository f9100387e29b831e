//! Error types for table store operations.

use thiserror::Error;

/// Errors that can occur while talking to a table store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Transport-level HTTP failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("Store returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// A response body could not be decoded.
    #[error("Failed to decode store response: {0}")]
    Decode(String),

    /// A count request came back without a usable total.
    #[error("Store did not report a row count for table '{0}'")]
    MissingCount(String),

    /// The configured endpoint is not a usable base URL.
    #[error("Invalid store URL '{0}'")]
    InvalidUrl(String),

    /// Failure injected by the in-memory store.
    #[error("Injected failure on {operation} into '{table}'")]
    Injected {
        operation: &'static str,
        table: String,
    },
}
