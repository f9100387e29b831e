//! Individual value generators.
//!
//! Each function draws one value from the caller's RNG and performs no I/O.

pub mod date;
pub mod email;
pub mod name;
pub mod numeric;
pub mod tax_id;

pub use date::{date_since, recent_date, DateWindow, HISTORY_START, RECENT_DAYS};
pub use email::{email_for, EMAIL_DOMAINS};
pub use name::{full_name, FIRST_NAMES, SURNAMES};
pub use numeric::{age, amount, fractional_quantity, unit_quantity, MAX_AGE, MIN_AGE};
pub use tax_id::tax_id;

use rand::Rng;

/// Pick one entry of a non-empty list.
pub(crate) fn pick<'a, R: Rng>(rng: &mut R, values: &[&'a str]) -> &'a str {
    values[rng.random_range(0..values.len())]
}
