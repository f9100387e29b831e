//! Core types for venda-seed.
//!
//! This crate provides the foundational types shared by the generator,
//! the store clients and the seeding routine:
//!
//! - [`Table`] - The two tables the seeder writes to
//! - [`NewPerson`] / [`Person`] - Rows of the `pessoa` table
//! - [`NewSale`] - Rows of the `venda` table
//! - [`SeedMode`] / [`SeedCaps`] / [`SeedConfig`] - What a run should do
//!
//! # Architecture
//!
//! ```text
//! seed-core (this crate)
//!    │
//!    ├─── seed-generator  (synthesizes NewPerson / NewSale values)
//!    ├─── seed-store      (count / select / insert against a table store)
//!    └─── seed-populate   (the seeding routine gluing both together)
//! ```

pub mod config;
pub mod records;

// Re-exports for convenience
pub use config::{ConfigError, SeedCaps, SeedConfig, SeedMode, Table};
pub use records::{NewPerson, NewSale, Person, PersonId, Quantity};
