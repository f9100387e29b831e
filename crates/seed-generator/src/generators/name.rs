//! Person name generator.

use super::pick;
use rand::Rng;

pub const FIRST_NAMES: [&str; 10] = [
    "Ana", "Bruno", "Carla", "Diego", "Eduarda", "Felipe", "Gabriela", "Henrique", "Isabela",
    "Joao",
];

pub const SURNAMES: [&str; 10] = [
    "Silva", "Santos", "Oliveira", "Souza", "Rodrigues", "Ferreira", "Alves", "Pereira", "Lima",
    "Gomes",
];

/// Generate "First Surname".
pub fn full_name<R: Rng>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, &FIRST_NAMES), pick(rng, &SURNAMES))
}
