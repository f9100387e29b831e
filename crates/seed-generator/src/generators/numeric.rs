//! Numeric value generators.

use rand::Rng;
use rust_decimal::Decimal;

pub const MIN_AGE: u8 = 18;
pub const MAX_AGE: u8 = 65;

/// Upper bound (exclusive) of generated sale amounts.
const MAX_AMOUNT: i64 = 1000;
/// Upper bound (exclusive) of generated fractional quantities.
const MAX_QUANTITY: i64 = 100;
const QUANTITY_SCALE: u32 = 4;
/// Whole-unit quantities fall in `1..=MAX_UNITS`.
const MAX_UNITS: i64 = 10;

/// Generate an age in `[MIN_AGE, MAX_AGE]`.
pub fn age<R: Rng>(rng: &mut R) -> u8 {
    rng.random_range(MIN_AGE..=MAX_AGE)
}

/// Generate a decimal in `[0, max)` with `scale` fraction digits.
fn scaled_decimal<R: Rng>(rng: &mut R, max: i64, scale: u32) -> Decimal {
    let steps = max * 10i64.pow(scale);
    Decimal::new(rng.random_range(0..steps), scale)
}

/// Generate a sale amount in `[0, 1000)` with `scale` fraction digits.
pub fn amount<R: Rng>(rng: &mut R, scale: u32) -> Decimal {
    scaled_decimal(rng, MAX_AMOUNT, scale)
}

/// Generate a fractional quantity in `[0, 100)` with 4 fraction digits.
pub fn fractional_quantity<R: Rng>(rng: &mut R) -> Decimal {
    scaled_decimal(rng, MAX_QUANTITY, QUANTITY_SCALE)
}

/// Generate a whole-unit quantity in `[1, 10]`.
pub fn unit_quantity<R: Rng>(rng: &mut R) -> i64 {
    rng.random_range(1..=MAX_UNITS)
}
