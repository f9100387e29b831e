//! Outcome of a seeding run.

use std::fmt;
use std::time::Duration;

/// Counters from a seeding run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Person rows before the run.
    pub persons_before: u64,
    /// Sale rows before the run.
    pub sales_before: u64,
    /// Person rows inserted by the run.
    pub persons_inserted: u64,
    /// Sale rows inserted by the run.
    pub sales_inserted: u64,
    /// Insert requests issued.
    pub insert_calls: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl SeedReport {
    pub fn rows_inserted(&self) -> u64 {
        self.persons_inserted + self.sales_inserted
    }

    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_inserted() as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Whether the run found nothing to do.
    pub fn is_noop(&self) -> bool {
        self.rows_inserted() == 0
    }
}

/// Status line shown to the user once a run ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    Failure,
}

impl<E> From<&Result<SeedReport, E>> for RunStatus {
    fn from(result: &Result<SeedReport, E>) -> Self {
        match result {
            Ok(_) => Self::Success,
            Err(_) => Self::Failure,
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "data inserted successfully"),
            Self::Failure => write!(f, "error inserting data"),
        }
    }
}
