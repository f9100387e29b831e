//! In-memory table store.
//!
//! Assigns sequential ids the way a serial primary key would, and can be
//! told to fail specific calls so abort paths of the seeder can be driven
//! without a live backend.

use crate::error::StoreError;
use crate::store::{Filter, Row, TableStore};
use async_trait::async_trait;
use seed_core::Table;
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct TableState {
    rows: Vec<Row>,
    next_id: i64,
    insert_calls: u64,
}

#[derive(Debug, Default)]
struct State {
    tables: HashMap<Table, TableState>,
    /// (table, 1-based insert call number) that must fail
    failing_inserts: HashSet<(Table, u64)>,
    failing_counts: HashSet<Table>,
    failing_selects: HashSet<Table>,
    /// Tables whose inserts return rows without an `id`
    omit_ids: HashSet<Table>,
}

impl State {
    fn table(&mut self, table: Table) -> &mut TableState {
        self.tables.entry(table).or_insert_with(|| TableState {
            next_id: 1,
            ..TableState::default()
        })
    }
}

/// Table store held entirely in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load rows; each gets the next id.
    pub fn with_rows(mut self, table: Table, rows: impl IntoIterator<Item = Row>) -> Self {
        let state = self.state.get_mut().table(table);
        for mut row in rows {
            assign_id(&mut row, state.next_id);
            state.next_id += 1;
            state.rows.push(row);
        }
        self
    }

    /// Pre-load `count` filler rows.
    ///
    /// Person fillers carry a unique email so duplicate checks see them.
    pub fn with_existing(self, table: Table, count: u64) -> Self {
        let rows = (0..count).map(move |i| match table {
            Table::Pessoa => json!({
                "nome": format!("Existing {i}"),
                "email": format!("existing{i}@example.com"),
            }),
            Table::Venda => json!({}),
        });
        self.with_rows(table, rows)
    }

    /// Make the `nth` insert call (1-based) into `table` fail.
    pub fn fail_insert_at(mut self, table: Table, nth: u64) -> Self {
        self.state.get_mut().failing_inserts.insert((table, nth));
        self
    }

    pub fn fail_count(mut self, table: Table) -> Self {
        self.state.get_mut().failing_counts.insert(table);
        self
    }

    pub fn fail_select(mut self, table: Table) -> Self {
        self.state.get_mut().failing_selects.insert(table);
        self
    }

    /// Return inserted rows of `table` without their ids.
    pub fn omit_ids(mut self, table: Table) -> Self {
        self.state.get_mut().omit_ids.insert(table);
        self
    }

    /// Snapshot of the rows currently in `table`.
    pub async fn rows(&self, table: Table) -> Vec<Row> {
        let mut state = self.state.lock().await;
        state.table(table).rows.clone()
    }

    /// Number of insert calls made against `table`, failed ones included.
    pub async fn insert_calls(&self, table: Table) -> u64 {
        let mut state = self.state.lock().await;
        state.table(table).insert_calls
    }
}

fn assign_id(row: &mut Row, id: i64) {
    if let Value::Object(map) = row {
        map.insert("id".to_string(), Value::from(id));
    }
}

#[async_trait]
impl TableStore for MemoryStore {
    async fn count(&self, table: Table) -> Result<u64, StoreError> {
        let mut state = self.state.lock().await;
        if state.failing_counts.contains(&table) {
            return Err(StoreError::Injected {
                operation: "count",
                table: table.to_string(),
            });
        }
        Ok(state.table(table).rows.len() as u64)
    }

    async fn select(&self, table: Table, filter: &Filter) -> Result<Vec<Row>, StoreError> {
        let mut state = self.state.lock().await;
        if state.failing_selects.contains(&table) {
            return Err(StoreError::Injected {
                operation: "select",
                table: table.to_string(),
            });
        }
        Ok(state
            .table(table)
            .rows
            .iter()
            .filter(|row| filter.matches(row))
            .cloned()
            .collect())
    }

    async fn insert(&self, table: Table, rows: Vec<Row>) -> Result<Vec<Row>, StoreError> {
        let mut state = self.state.lock().await;
        let call = {
            let entry = state.table(table);
            entry.insert_calls += 1;
            entry.insert_calls
        };
        if state.failing_inserts.contains(&(table, call)) {
            return Err(StoreError::Injected {
                operation: "insert",
                table: table.to_string(),
            });
        }
        if rows.iter().any(|row| !row.is_object()) {
            return Err(StoreError::Decode(format!(
                "rows for '{table}' must be JSON objects"
            )));
        }

        let omit_ids = state.omit_ids.contains(&table);
        let entry = state.table(table);
        let mut inserted = Vec::with_capacity(rows.len());
        for mut row in rows {
            assign_id(&mut row, entry.next_id);
            entry.next_id += 1;
            entry.rows.push(row.clone());
            if omit_ids {
                if let Value::Object(map) = &mut row {
                    map.remove("id");
                }
            }
            inserted.push(row);
        }
        Ok(inserted)
    }
}
