//! venda-seed library
//!
//! Seeds the `pessoa` (person) and `venda` (sale) tables of a PostgREST /
//! Supabase backend with synthetic rows, up to fixed caps.
//!
//! # Crates
//!
//! - `seed_core` - record and configuration types
//! - `seed_generator` - random names, tax ids, emails, ages, dates, amounts
//! - `seed_store` - the `TableStore` trait with HTTP and in-memory stores
//! - `seed_populate` - the seeding routine
//!
//! # CLI Usage
//!
//! ```bash
//! # Seed with the default caps (100 persons, 4000 sales, 40 per person)
//! venda-seed seed --supabase-url https://xyz.supabase.co --supabase-key $KEY
//!
//! # Reproducible bulk seeding
//! venda-seed seed --mode bulk --seed 42
//!
//! # Inspect current row counts
//! venda-seed counts
//!
//! # Print sample rows without touching the backend
//! venda-seed preview --count 3
//! ```

use clap::Parser;
use seed_store::RestStore;

pub mod commands;
pub mod config;
pub mod logging;

#[derive(Parser, Clone, Debug)]
pub struct StoreOpts {
    /// Base URL of the Supabase project (e.g. https://xyz.supabase.co)
    #[arg(long, env = "SUPABASE_URL")]
    pub supabase_url: String,

    /// API key sent as `apikey` header and bearer token
    #[arg(long, env = "SUPABASE_KEY", hide_env_values = true)]
    pub supabase_key: String,

    /// Request timeout (e.g. 30s, 5m)
    #[arg(long, default_value = "30s", env = "SUPABASE_TIMEOUT")]
    pub timeout: String,
}

impl StoreOpts {
    /// Build the HTTP store client.
    pub fn connect(&self) -> anyhow::Result<RestStore> {
        use anyhow::Context;

        let timeout = config::parse_duration(&self.timeout)
            .with_context(|| format!("Invalid --timeout '{}'", self.timeout))?;
        RestStore::new(&self.supabase_url, self.supabase_key.clone(), timeout)
            .with_context(|| format!("Failed to create store client for {}", self.supabase_url))
    }
}
