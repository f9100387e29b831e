//! Counts command runner.

use anyhow::Context;
use seed_core::Table;
use seed_populate::seeder::read_counts;
use seed_store::TableStore;

use crate::StoreOpts;

/// Print the current row counts of both tables.
pub async fn run_counts(store_opts: &StoreOpts) -> anyhow::Result<(u64, u64)> {
    let store = store_opts.connect()?;
    let counts = print_counts(&store).await?;
    Ok(counts)
}

pub async fn print_counts<S: TableStore>(store: &S) -> anyhow::Result<(u64, u64)> {
    let (persons, sales) = read_counts(store)
        .await
        .context("Failed to read row counts")?;

    println!("{}: {persons}", Table::Pessoa);
    println!("{}: {sales}", Table::Venda);
    Ok((persons, sales))
}
