//! Record generator producing person and sale rows.

use crate::generators::{self, DateWindow};
use chrono::{NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seed_core::{NewPerson, NewSale, PersonId, Quantity, SeedMode};

/// Generator that synthesizes rows for one seed mode.
///
/// With a fixed seed and a fixed `today`, the sequence of generated rows
/// is reproducible.
pub struct RecordGenerator {
    /// Mode deciding the shape of sale rows
    mode: SeedMode,
    /// Seeded random number generator
    rng: StdRng,
    /// Upper bound of generated sale dates
    today: NaiveDate,
}

impl RecordGenerator {
    /// Create a generator. `None` seeds the RNG from the OS.
    pub fn new(mode: SeedMode, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            mode,
            rng,
            today: Utc::now().date_naive(),
        }
    }

    /// Pin the date treated as today.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Window sale dates are drawn from in the current mode.
    pub fn date_window(&self) -> DateWindow {
        match self.mode {
            SeedMode::Bulk => DateWindow::Recent,
            SeedMode::Incremental | SeedMode::Checked => DateWindow::SinceHistoryStart,
        }
    }

    /// Generate a person.
    pub fn person(&mut self) -> NewPerson {
        let nome = generators::full_name(&mut self.rng);
        let email = generators::email_for(&mut self.rng, &nome);
        NewPerson {
            cpf: generators::tax_id(&mut self.rng),
            idade: generators::age(&mut self.rng),
            nome,
            email,
        }
    }

    /// Generate a fresh email for an existing person name.
    pub fn email_for(&mut self, nome: &str) -> String {
        generators::email_for(&mut self.rng, nome)
    }

    /// Generate a sale between the given buyer and seller.
    pub fn sale(&mut self, cliente_id: PersonId, vendedor_id: PersonId) -> NewSale {
        let quantidade = match self.mode {
            SeedMode::Bulk => Quantity::Decimal(generators::fractional_quantity(&mut self.rng)),
            SeedMode::Incremental | SeedMode::Checked => {
                Quantity::Units(generators::unit_quantity(&mut self.rng))
            }
        };
        NewSale {
            cliente_id,
            vendedor_id,
            quantidade,
            valor: generators::amount(&mut self.rng, self.mode.amount_scale()),
            data: self.date_window().generate(&mut self.rng, self.today),
        }
    }

    /// Pick an id in `1..=max`, used when sales reference persons that
    /// were never read back.
    pub fn person_id_up_to(&mut self, max: PersonId) -> PersonId {
        self.rng.random_range(1..=max.max(1))
    }
}
