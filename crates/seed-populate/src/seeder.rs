//! The seeding routine.

use crate::error::SeedError;
use crate::report::SeedReport;
use seed_core::{ConfigError, NewPerson, Person, PersonId, SeedConfig, Table};
use seed_generator::RecordGenerator;
use seed_store::{Filter, Row, TableStore};
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, error, info};

/// Attempts at finding an unused email before giving up on a person.
pub const MAX_EMAIL_ATTEMPTS: u32 = 50;

/// Read the current `(persons, sales)` row counts.
pub async fn read_counts<S: TableStore + ?Sized>(store: &S) -> Result<(u64, u64), SeedError> {
    let mut counts = [0u64; 2];
    for (slot, table) in counts.iter_mut().zip([Table::Pessoa, Table::Venda]) {
        *slot = store
            .count(table)
            .await
            .map_err(|source| SeedError::Count { table, source })?;
    }
    Ok((counts[0], counts[1]))
}

fn encode<T: Serialize>(value: &T) -> Result<Row, SeedError> {
    Ok(serde_json::to_value(value)?)
}

/// Brings the `pessoa` and `venda` tables up to the configured caps.
///
/// Counts are read once at the start of a run; concurrent writers are not
/// accounted for and can push the tables past the caps.
pub struct Seeder<S> {
    store: S,
    generator: RecordGenerator,
    config: SeedConfig,
}

impl<S: TableStore> Seeder<S> {
    /// Create a seeder writing to `store`.
    pub fn new(store: S, config: SeedConfig) -> Result<Self, SeedError> {
        config.validate()?;
        let generator = RecordGenerator::new(config.mode, config.seed);
        Ok(Self {
            store,
            generator,
            config,
        })
    }

    /// Replace the record generator (e.g. to pin the current date).
    pub fn with_generator(mut self, generator: RecordGenerator) -> Self {
        self.generator = generator;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Run the routine once.
    ///
    /// On failure the error is logged and returned; rows inserted before
    /// the failure are left in place.
    pub async fn run(&mut self) -> Result<SeedReport, SeedError> {
        let start_time = Instant::now();
        let mut report = SeedReport::default();

        let result = self.run_inner(&mut report).await;
        report.total_duration = start_time.elapsed();

        match result {
            Ok(()) => {
                info!(
                    "Seeding complete: {} persons and {} sales inserted in {:?} ({:.2} rows/sec)",
                    report.persons_inserted,
                    report.sales_inserted,
                    report.total_duration,
                    report.rows_per_second()
                );
                Ok(report)
            }
            Err(e) => {
                error!(
                    "Seeding aborted after {} persons and {} sales: {}",
                    report.persons_inserted, report.sales_inserted, e
                );
                Err(e)
            }
        }
    }

    async fn run_inner(&mut self, report: &mut SeedReport) -> Result<(), SeedError> {
        let (persons, sales) = read_counts(&self.store).await?;
        report.persons_before = persons;
        report.sales_before = sales;

        info!(
            "Seeding in {} mode: {} persons (cap {}), {} sales (cap {}, {} per person)",
            self.config.mode,
            persons,
            self.config.caps.persons,
            sales,
            self.config.caps.sales,
            self.config.caps.sales_per_person
        );

        if self.config.mode.is_incremental() {
            self.run_incremental(report).await
        } else {
            self.run_bulk(report).await
        }
    }

    /// Insert persons then sales in batches of `batch_size` rows.
    async fn run_bulk(&mut self, report: &mut SeedReport) -> Result<(), SeedError> {
        let caps = self.config.caps;
        let max_person_id =
            PersonId::try_from(caps.persons).map_err(|_| ConfigError::CapTooLarge("person cap"))?;

        let mut remaining = caps.person_headroom(report.persons_before);
        while remaining > 0 {
            let batch_count = remaining.min(self.config.batch_size as u64);
            let rows = (0..batch_count)
                .map(|_| encode(&self.generator.person()))
                .collect::<Result<Vec<_>, _>>()?;

            self.insert_rows(Table::Pessoa, rows, report).await?;
            report.persons_inserted += batch_count;
            remaining -= batch_count;

            debug!(
                "Person batch inserted: {} rows, {} remaining",
                batch_count, remaining
            );
        }

        let mut remaining = caps.sale_headroom(report.sales_before);
        while remaining > 0 {
            let batch_count = remaining.min(self.config.batch_size as u64);
            let rows = (0..batch_count)
                .map(|_| {
                    let buyer = self.generator.person_id_up_to(max_person_id);
                    let seller = self.generator.person_id_up_to(max_person_id);
                    encode(&self.generator.sale(buyer, seller))
                })
                .collect::<Result<Vec<_>, _>>()?;

            self.insert_rows(Table::Venda, rows, report).await?;
            report.sales_inserted += batch_count;
            remaining -= batch_count;

            debug!(
                "Sale batch inserted: {} rows, {} remaining",
                batch_count, remaining
            );
        }

        Ok(())
    }

    /// Insert one person at a time, each followed by its sales.
    async fn run_incremental(&mut self, report: &mut SeedReport) -> Result<(), SeedError> {
        let caps = self.config.caps;
        let mut persons = report.persons_before;

        while persons < caps.persons {
            let person = self.insert_person(report).await?;
            persons += 1;

            let sale_count =
                caps.sales_for_next_person(report.sales_before + report.sales_inserted);
            // The person is both buyer and seller, so it is referenced by
            // exactly `sale_count` sales.
            for _ in 0..sale_count {
                let row = encode(&self.generator.sale(person.id, person.id))?;
                self.insert_rows(Table::Venda, vec![row], report).await?;
                report.sales_inserted += 1;
            }

            debug!(
                "Person {} ({}) inserted with {} sales",
                person.id, person.fields.email, sale_count
            );
        }

        Ok(())
    }

    /// Generate, check and insert one person, returning it with its id.
    async fn insert_person(&mut self, report: &mut SeedReport) -> Result<Person, SeedError> {
        let mut fields = self.generator.person();
        if self.config.mode.checks_duplicate_email() {
            fields.email = self.unused_email(&fields).await?;
        }

        let inserted = self
            .insert_rows(Table::Pessoa, vec![encode(&fields)?], report)
            .await?;
        let id = inserted
            .first()
            .and_then(|row| row.get("id"))
            .and_then(|id| id.as_i64())
            .ok_or(SeedError::MissingId(Table::Pessoa))?;

        report.persons_inserted += 1;
        Ok(Person { id, fields })
    }

    /// Find an email for `person` that no stored person uses yet.
    async fn unused_email(&mut self, person: &NewPerson) -> Result<String, SeedError> {
        let mut candidate = person.email.clone();
        for attempt in 1..=MAX_EMAIL_ATTEMPTS {
            let existing = self
                .store
                .select(Table::Pessoa, &Filter::eq("email", &candidate))
                .await
                .map_err(|source| SeedError::Select {
                    table: Table::Pessoa,
                    source,
                })?;
            if existing.is_empty() {
                return Ok(candidate);
            }

            debug!("Email {} already taken (attempt {})", candidate, attempt);
            candidate = self.generator.email_for(&person.nome);
        }

        Err(SeedError::EmailExhausted {
            nome: person.nome.clone(),
            attempts: MAX_EMAIL_ATTEMPTS,
        })
    }

    async fn insert_rows(
        &self,
        table: Table,
        rows: Vec<Row>,
        report: &mut SeedReport,
    ) -> Result<Vec<Row>, SeedError> {
        report.insert_calls += 1;
        self.store
            .insert(table, rows)
            .await
            .map_err(|source| SeedError::Insert { table, source })
    }
}
