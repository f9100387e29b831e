//! The table store abstraction consumed by the seeder.

use crate::error::StoreError;
use async_trait::async_trait;
use seed_core::Table;
use serde_json::Value;

/// A row as exchanged with the store: a JSON object keyed by column name.
pub type Row = Value;

/// Equality filter on one or more columns, combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    conditions: Vec<(String, String)>,
}

impl Filter {
    /// Filter rows whose `column` equals `value`.
    pub fn eq(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::default().and_eq(column, value)
    }

    pub fn and_eq(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.conditions.push((column.into(), value.into()));
        self
    }

    pub fn conditions(&self) -> &[(String, String)] {
        &self.conditions
    }

    /// Whether a row satisfies every condition.
    ///
    /// Values compare by their textual form, the way PostgREST compares
    /// `eq.` filters.
    pub fn matches(&self, row: &Row) -> bool {
        self.conditions.iter().all(|(column, expected)| match row.get(column) {
            Some(Value::String(s)) => s == expected,
            Some(Value::Null) | None => false,
            Some(other) => other.to_string() == *expected,
        })
    }
}

/// Count, select and insert against named tables.
///
/// Every call is awaited by the caller before the next one is issued.
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Number of rows currently in `table`.
    async fn count(&self, table: Table) -> Result<u64, StoreError>;

    /// Rows of `table` matching `filter`.
    async fn select(&self, table: Table, filter: &Filter) -> Result<Vec<Row>, StoreError>;

    /// Insert `rows` into `table`, returning the stored rows with their
    /// assigned identifiers.
    async fn insert(&self, table: Table, rows: Vec<Row>) -> Result<Vec<Row>, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_matches_strings_and_numbers() {
        let row = json!({"id": 4, "email": "ana@gmail.com", "idade": 30});

        assert!(Filter::eq("email", "ana@gmail.com").matches(&row));
        assert!(Filter::eq("idade", "30").matches(&row));
        assert!(Filter::eq("email", "ana@gmail.com")
            .and_eq("id", "4")
            .matches(&row));
        assert!(!Filter::eq("email", "bruno@gmail.com").matches(&row));
        assert!(!Filter::eq("missing", "x").matches(&row));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(Filter::default().matches(&json!({"id": 1})));
    }
}
