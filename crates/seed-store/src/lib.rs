//! Table store clients for venda-seed.
//!
//! The seeding routine only needs three operations from a store: count
//! rows, select rows by equality, and insert rows getting the stored rows
//! back. [`TableStore`] captures those; two implementations exist:
//!
//! - [`RestStore`] - a PostgREST (Supabase) endpoint over HTTP
//! - [`MemoryStore`] - an in-process store with failure injection, used
//!   for dry runs and tests

pub mod error;
pub mod memory;
pub mod rest;
pub mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use rest::RestStore;
pub use store::{Filter, Row, TableStore};
