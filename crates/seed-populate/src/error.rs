//! Error types for the seeding routine.

use seed_core::{ConfigError, Table};
use seed_store::StoreError;
use thiserror::Error;

/// Errors that end a seeding run.
#[derive(Error, Debug)]
pub enum SeedError {
    /// Reading a row count failed.
    #[error("Failed to count rows in '{table}': {source}")]
    Count {
        table: Table,
        #[source]
        source: StoreError,
    },

    /// Looking up existing rows failed.
    #[error("Failed to select from '{table}': {source}")]
    Select {
        table: Table,
        #[source]
        source: StoreError,
    },

    /// Writing rows failed.
    #[error("Failed to insert into '{table}': {source}")]
    Insert {
        table: Table,
        #[source]
        source: StoreError,
    },

    /// An insert succeeded but the stored row carried no usable id.
    #[error("Insert into '{0}' returned no identifier")]
    MissingId(Table),

    /// A row could not be encoded for the store.
    #[error("Failed to encode row: {0}")]
    Encode(#[from] serde_json::Error),

    /// No unused email was found for a new person.
    #[error("No unused email found for '{nome}' after {attempts} attempts")]
    EmailExhausted { nome: String, attempts: u32 },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl SeedError {
    /// Whether the failure happened while reading from the store.
    pub fn is_read_failure(&self) -> bool {
        matches!(self, Self::Count { .. } | Self::Select { .. })
    }
}
