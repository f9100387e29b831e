//! Command handlers.
//!
//! This module contains handlers for the seed, counts and preview commands.

pub mod counts;
pub mod preview;
pub mod seed;

pub use counts::run_counts;
pub use preview::run_preview;
pub use seed::run_seed;
