//! CLI argument definitions for the seeding routine.

use clap::Args;
use seed_core::{ConfigError, SeedCaps, SeedConfig, SeedMode};

/// Arguments controlling what a seeding run does.
#[derive(Args, Clone, Debug)]
pub struct SeedArgs {
    /// How rows are generated and written (bulk, incremental, checked)
    #[arg(long, default_value = "checked")]
    pub mode: SeedMode,

    /// Random seed for reproducible data (omit for a random seed)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Maximum number of person rows
    #[arg(long, default_value_t = SeedCaps::DEFAULT_PERSONS)]
    pub person_cap: u64,

    /// Maximum number of sale rows
    #[arg(long, default_value_t = SeedCaps::DEFAULT_SALES)]
    pub sale_cap: u64,

    /// Maximum number of sales attached to each new person
    #[arg(long, default_value_t = SeedCaps::DEFAULT_SALES_PER_PERSON)]
    pub sales_per_person: u64,

    /// Rows per insert request in bulk mode
    #[arg(long, default_value_t = SeedConfig::DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Dry-run mode: run against an empty in-memory store instead of the backend
    #[arg(long)]
    pub dry_run: bool,
}

impl SeedArgs {
    /// Build and validate the run configuration.
    pub fn to_config(&self) -> Result<SeedConfig, ConfigError> {
        let config = SeedConfig {
            mode: self.mode,
            caps: SeedCaps {
                persons: self.person_cap,
                sales: self.sale_cap,
                sales_per_person: self.sales_per_person,
            },
            batch_size: self.batch_size,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: SeedArgs,
    }

    #[test]
    fn test_defaults() {
        let cli = TestCli::parse_from(["test"]);
        let config = cli.args.to_config().unwrap();

        assert_eq!(config, SeedConfig::default());
        assert!(!cli.args.dry_run);
    }

    #[test]
    fn test_overrides() {
        let cli = TestCli::parse_from([
            "test",
            "--mode",
            "bulk",
            "--seed",
            "7",
            "--person-cap",
            "10",
            "--sale-cap",
            "50",
            "--sales-per-person",
            "5",
            "--batch-size",
            "20",
        ]);
        let config = cli.args.to_config().unwrap();

        assert_eq!(config.mode, SeedMode::Bulk);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.caps.persons, 10);
        assert_eq!(config.caps.sales, 50);
        assert_eq!(config.caps.sales_per_person, 5);
        assert_eq!(config.batch_size, 20);
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(TestCli::try_parse_from(["test", "--mode", "fast"]).is_err());
    }

    #[test]
    fn test_rejects_zero_batch() {
        let cli = TestCli::parse_from(["test", "--batch-size", "0"]);
        assert_eq!(
            cli.args.to_config(),
            Err(ConfigError::ZeroLimit("batch size"))
        );
    }
}
