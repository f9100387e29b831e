//! Seed command runner.

use anyhow::Context;
use seed_core::SeedConfig;
use seed_populate::{RunStatus, SeedArgs, SeedError, SeedReport, Seeder};
use seed_store::{MemoryStore, TableStore};

use crate::logging::mask_secret;
use crate::StoreOpts;

/// Run the seeding routine once and print the final status line.
pub async fn run_seed(args: &SeedArgs, store_opts: &StoreOpts) -> anyhow::Result<SeedReport> {
    let config = args.to_config().context("Invalid seed configuration")?;

    let result = if args.dry_run {
        tracing::info!(
            "[DRY-RUN] Would seed {} (key {}) in {} mode",
            store_opts.supabase_url,
            mask_secret(&store_opts.supabase_key),
            config.mode
        );
        tracing::info!("[DRY-RUN] Running against an empty in-memory store");
        seed_with(MemoryStore::new(), config).await
    } else {
        tracing::info!(
            "Seeding {} (key {})",
            store_opts.supabase_url,
            mask_secret(&store_opts.supabase_key)
        );
        seed_with(store_opts.connect()?, config).await
    };

    println!("{}", RunStatus::from(&result));

    let report = result.context("Seeding failed")?;
    if report.is_noop() {
        tracing::info!(
            "Nothing to insert: {} persons and {} sales already present",
            report.persons_before,
            report.sales_before
        );
    }
    Ok(report)
}

/// Run the seeding routine against any store.
pub async fn seed_with<S: TableStore>(
    store: S,
    config: SeedConfig,
) -> Result<SeedReport, SeedError> {
    let mut seeder = Seeder::new(store, config)?;
    seeder.run().await
}
