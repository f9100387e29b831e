//! Run configuration: target tables, seed modes and row caps.

use std::fmt;
use std::str::FromStr;

/// Error type for invalid run configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Unknown seed mode name
    #[error("Unknown seed mode '{0}' (expected one of: bulk, incremental, checked)")]
    UnknownMode(String),

    /// A cap or size that must be positive was zero
    #[error("'{0}' must be at least 1")]
    ZeroLimit(&'static str),

    /// A cap that must fit a store id exceeded `i64::MAX`
    #[error("'{0}' is too large for a store id")]
    CapTooLarge(&'static str),
}

/// Tables written by the seeder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    /// Person rows (`pessoa`)
    Pessoa,
    /// Sale rows (`venda`)
    Venda,
}

impl Table {
    /// Table name as known to the store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pessoa => "pessoa",
            Self::Venda => "venda",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How persons and sales are synthesized and written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedMode {
    /// One bulk insert per table; sales reference random person ids.
    Bulk,
    /// One row per insert; every sale is bought and sold by the new person.
    Incremental,
    /// Like `Incremental`, but emails are checked against existing persons
    /// before insert.
    #[default]
    Checked,
}

impl SeedMode {
    /// Whether persons are inserted one at a time.
    pub fn is_incremental(&self) -> bool {
        !matches!(self, Self::Bulk)
    }

    /// Whether the email of a new person must not already exist.
    pub fn checks_duplicate_email(&self) -> bool {
        matches!(self, Self::Checked)
    }

    /// Fraction digits of the generated sale amount.
    pub fn amount_scale(&self) -> u32 {
        match self {
            Self::Bulk => 4,
            Self::Incremental | Self::Checked => 2,
        }
    }
}

impl fmt::Display for SeedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bulk => write!(f, "bulk"),
            Self::Incremental => write!(f, "incremental"),
            Self::Checked => write!(f, "checked"),
        }
    }
}

impl FromStr for SeedMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bulk" => Ok(Self::Bulk),
            "incremental" => Ok(Self::Incremental),
            "checked" => Ok(Self::Checked),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}

/// Upper bounds on the rows a run may bring the tables to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedCaps {
    /// Total person rows
    pub persons: u64,
    /// Total sale rows
    pub sales: u64,
    /// Sales inserted per person created in the run
    pub sales_per_person: u64,
}

impl SeedCaps {
    pub const DEFAULT_PERSONS: u64 = 100;
    pub const DEFAULT_SALES: u64 = 4000;
    pub const DEFAULT_SALES_PER_PERSON: u64 = 40;

    /// Persons still missing given the current count.
    pub fn person_headroom(&self, current: u64) -> u64 {
        self.persons.saturating_sub(current)
    }

    /// Sales still missing given the current count.
    pub fn sale_headroom(&self, current: u64) -> u64 {
        self.sales.saturating_sub(current)
    }

    /// Sales to attach to one new person given the current sale count.
    pub fn sales_for_next_person(&self, current: u64) -> u64 {
        self.sales_per_person.min(self.sale_headroom(current))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.persons == 0 {
            return Err(ConfigError::ZeroLimit("person cap"));
        }
        // Person ids are drawn up to the cap in bulk mode
        if i64::try_from(self.persons).is_err() {
            return Err(ConfigError::CapTooLarge("person cap"));
        }
        if self.sales_per_person == 0 {
            return Err(ConfigError::ZeroLimit("sales per person"));
        }
        Ok(())
    }
}

impl Default for SeedCaps {
    fn default() -> Self {
        Self {
            persons: Self::DEFAULT_PERSONS,
            sales: Self::DEFAULT_SALES,
            sales_per_person: Self::DEFAULT_SALES_PER_PERSON,
        }
    }
}

/// Everything a seeding run needs apart from the store itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    pub mode: SeedMode,
    pub caps: SeedCaps,
    /// Rows per request in bulk mode
    pub batch_size: usize,
    /// Fixed RNG seed; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl SeedConfig {
    pub const DEFAULT_BATCH_SIZE: usize = 500;

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.caps.validate()?;
        if self.batch_size == 0 {
            return Err(ConfigError::ZeroLimit("batch size"));
        }
        Ok(())
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            mode: SeedMode::default(),
            caps: SeedCaps::default(),
            batch_size: Self::DEFAULT_BATCH_SIZE,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_names() {
        assert_eq!(Table::Pessoa.as_str(), "pessoa");
        assert_eq!(Table::Venda.to_string(), "venda");
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("bulk".parse::<SeedMode>().unwrap(), SeedMode::Bulk);
        assert_eq!(" Checked ".parse::<SeedMode>().unwrap(), SeedMode::Checked);
        assert_eq!(
            "nope".parse::<SeedMode>(),
            Err(ConfigError::UnknownMode("nope".to_string()))
        );
    }

    #[test]
    fn test_mode_display_parses_back() {
        for mode in [SeedMode::Bulk, SeedMode::Incremental, SeedMode::Checked] {
            assert_eq!(mode.to_string().parse::<SeedMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_headroom() {
        let caps = SeedCaps::default();
        assert_eq!(caps.person_headroom(95), 5);
        assert_eq!(caps.person_headroom(150), 0);
        assert_eq!(caps.sales_for_next_person(0), 40);
        assert_eq!(caps.sales_for_next_person(3990), 10);
        assert_eq!(caps.sales_for_next_person(4000), 0);
    }

    #[test]
    fn test_validate() {
        assert!(SeedConfig::default().validate().is_ok());

        let mut config = SeedConfig::default();
        config.caps.persons = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroLimit("person cap"))
        );

        let config = SeedConfig {
            batch_size: 0,
            ..SeedConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroLimit("batch size")));
    }

    #[test]
    fn test_validate_rejects_caps_beyond_store_ids() {
        let mut caps = SeedCaps {
            persons: i64::MAX as u64,
            ..SeedCaps::default()
        };
        assert!(caps.validate().is_ok());

        caps.persons = i64::MAX as u64 + 1;
        assert_eq!(caps.validate(), Err(ConfigError::CapTooLarge("person cap")));

        caps.persons = u64::MAX;
        let err = caps.validate().unwrap_err();
        assert!(err.to_string().contains("person cap"));
    }

    #[test]
    fn test_mode_dispatch() {
        assert!(!SeedMode::Bulk.is_incremental());
        assert!(SeedMode::Incremental.is_incremental());
        assert!(SeedMode::Checked.is_incremental());
        assert!(SeedMode::Checked.checks_duplicate_email());
        assert!(!SeedMode::Incremental.checks_duplicate_email());
    }
}
