//! Synthetic record generator for venda-seed.
//!
//! This crate provides the [`RecordGenerator`] which synthesizes person and
//! sale rows for the `pessoa` and `venda` tables. Every value comes from a
//! small fixed list or a numeric range; nothing here touches the store.
//!
//! # Architecture
//!
//! ```text
//!  SeedMode + RNG seed
//!        │
//!        ▼
//! ┌──────────────────┐
//! │ RecordGenerator  │
//! │                  │
//! │  - mode          │
//! │  - rng (StdRng)  │
//! │  - today         │
//! └────────┬─────────┘
//!          │
//!          ▼
//!   NewPerson / NewSale
//! ```
//!
//! # Example
//!
//! ```rust
//! use seed_core::SeedMode;
//! use seed_generator::RecordGenerator;
//!
//! let mut generator = RecordGenerator::new(SeedMode::Checked, Some(42));
//! let person = generator.person();
//! let sale = generator.sale(1, 1);
//! assert!((18..=65).contains(&person.idade));
//! assert_eq!(sale.cliente_id, 1);
//! ```
//!
//! # Generators
//!
//! - `name` - First name and surname from two fixed lists
//! - `tax_id` - `ddd.ddd.ddd-dd` tax id without checksum
//! - `email` - Derived from a name with a 4-digit suffix
//! - `numeric` - Ages, amounts and quantities
//! - `date` - Recent dates or dates since 2020-01-01

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::RecordGenerator;
