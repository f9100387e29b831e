//! Seeding routine for the `pessoa` and `venda` tables.
//!
//! [`Seeder`] reads the current row counts, then synthesizes and inserts
//! persons and sales until the configured caps are reached. Any store
//! failure ends the run; rows already inserted stay.

pub mod args;
pub mod error;
pub mod report;
pub mod seeder;

pub use args::SeedArgs;
pub use error::SeedError;
pub use report::{RunStatus, SeedReport};
pub use seeder::Seeder;
