//! Command-line interface for venda-seed
//!
//! # Usage Examples
//!
//! ## Seeding
//! ```bash
//! # Incremental seeding with duplicate-email checks (default mode)
//! venda-seed seed \
//!   --supabase-url https://xyz.supabase.co \
//!   --supabase-key "$SUPABASE_KEY"
//!
//! # One bulk insert per table, reproducible data
//! venda-seed seed --mode bulk --seed 42 --batch-size 1000
//!
//! # Run against an in-memory store; the backend is never contacted, but the
//! # connection settings are still required (flags or SUPABASE_URL / SUPABASE_KEY)
//! SUPABASE_URL=https://xyz.supabase.co SUPABASE_KEY="$SUPABASE_KEY" \
//!   venda-seed seed --dry-run
//! ```
//!
//! ## Inspection
//! ```bash
//! venda-seed counts
//! venda-seed preview --mode incremental --count 5
//! ```

use clap::{Parser, Subcommand};
use seed_core::SeedMode;
use seed_populate::SeedArgs;
use venda_seed::{commands, logging, StoreOpts};

#[derive(Parser)]
#[command(name = "venda-seed")]
#[command(about = "Seed the pessoa and venda tables with synthetic data")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Insert persons and sales until the caps are reached
    Seed {
        #[command(flatten)]
        args: SeedArgs,

        #[command(flatten)]
        store: StoreOpts,
    },

    /// Print the current row counts of both tables
    Counts {
        #[command(flatten)]
        store: StoreOpts,
    },

    /// Print sample rows as JSON lines without touching the backend
    Preview {
        /// Seed mode whose row shape to preview
        #[arg(long, default_value = "checked")]
        mode: SeedMode,

        /// Random seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Number of persons (and sales) to print
        #[arg(long, default_value = "5")]
        count: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    logging::init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Seed { args, store } => {
            commands::run_seed(&args, &store).await?;
        }
        Commands::Counts { store } => {
            commands::run_counts(&store).await?;
        }
        Commands::Preview { mode, seed, count } => {
            commands::run_preview(mode, seed, count)?;
        }
    }

    Ok(())
}
