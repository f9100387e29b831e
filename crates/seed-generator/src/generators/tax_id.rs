//! Tax id (CPF-shaped) generator.
//!
//! The output only has the right shape; no check digits are computed.

use rand::Rng;

/// Generate a tax id formatted as `ddd.ddd.ddd-dd`.
pub fn tax_id<R: Rng>(rng: &mut R) -> String {
    format!(
        "{:03}.{:03}.{:03}-{:02}",
        rng.random_range(0..1000),
        rng.random_range(0..1000),
        rng.random_range(0..1000),
        rng.random_range(0..100)
    )
}
