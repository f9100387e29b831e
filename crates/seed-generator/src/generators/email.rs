//! Email generator.

use super::pick;
use rand::Rng;

pub const EMAIL_DOMAINS: [&str; 3] = ["gmail.com", "hotmail.com", "outlook.com"];

/// Derive an email from a person name.
///
/// The name is lower-cased with spaces replaced by dots, followed by a
/// random 4-digit suffix and one of [`EMAIL_DOMAINS`].
pub fn email_for<R: Rng>(rng: &mut R, name: &str) -> String {
    let local = name.trim().to_lowercase().replace(' ', ".");
    let suffix: u16 = rng.random_range(1000..=9999);
    format!("{local}{suffix}@{}", pick(rng, &EMAIL_DOMAINS))
}
