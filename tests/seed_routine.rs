//! End-to-end tests of the seeding routine against the in-memory store.
//!
//! Each test builds a `MemoryStore` in a given starting state, runs the
//! seeder with the default caps (100 persons, 4000 sales, 40 per person)
//! and inspects the rows that ended up in the store.

use regex::Regex;
use seed_core::{SeedConfig, SeedMode, Table};
use seed_populate::{SeedError, SeedReport, Seeder};
use seed_store::{MemoryStore, Row, TableStore};
use std::collections::{HashMap, HashSet};

const SEED: u64 = 42;

fn config(mode: SeedMode) -> SeedConfig {
    SeedConfig {
        mode,
        seed: Some(SEED),
        ..SeedConfig::default()
    }
}

async fn seed(
    store: MemoryStore,
    mode: SeedMode,
) -> (Result<SeedReport, SeedError>, MemoryStore) {
    let mut seeder = Seeder::new(store, config(mode)).expect("valid config");
    let result = seeder.run().await;
    (result, seeder.into_store())
}

/// Number of sales referencing each person, as buyer or seller.
///
/// A sale where the same person is buyer and seller counts once.
fn references_per_person(sales: &[Row]) -> HashMap<i64, u64> {
    let mut counts = HashMap::new();
    for sale in sales {
        let buyer = sale["cliente_id"].as_i64().expect("cliente_id");
        let seller = sale["vendedor_id"].as_i64().expect("vendedor_id");
        *counts.entry(buyer).or_default() += 1;
        if seller != buyer {
            *counts.entry(seller).or_default() += 1;
        }
    }
    counts
}

#[tokio::test]
async fn test_fills_empty_store_to_caps() {
    for mode in [SeedMode::Bulk, SeedMode::Incremental, SeedMode::Checked] {
        let (result, store) = seed(MemoryStore::new(), mode).await;
        let report = result.unwrap();

        assert_eq!(report.persons_inserted, 100, "{mode}");
        assert_eq!(report.sales_inserted, 4000, "{mode}");
        assert_eq!(store.count(Table::Pessoa).await.unwrap(), 100, "{mode}");
        assert_eq!(store.count(Table::Venda).await.unwrap(), 4000, "{mode}");
    }
}

#[tokio::test]
async fn test_per_person_cap_in_incremental_modes() {
    for mode in [SeedMode::Incremental, SeedMode::Checked] {
        let (result, store) = seed(MemoryStore::new(), mode).await;
        result.unwrap();

        let sales = store.rows(Table::Venda).await;
        let references = references_per_person(&sales);
        assert_eq!(references.len(), 100, "{mode}");
        let busiest = references.values().copied().max().unwrap_or(0);
        assert!(busiest <= 40, "{mode}: a person is referenced by {busiest} sales");
    }
}

#[tokio::test]
async fn test_checked_mode_sales_are_self_sold() {
    let store = MemoryStore::new().with_existing(Table::Pessoa, 10);
    let (result, store) = seed(store, SeedMode::Checked).await;
    result.unwrap();

    let sales = store.rows(Table::Venda).await;
    assert_eq!(sales.len(), 90 * 40);
    assert!(sales.iter().all(|s| s["cliente_id"] == s["vendedor_id"]));
    // Pre-existing persons (ids 1..=10) are never referenced
    assert!(references_per_person(&sales).keys().all(|&id| id > 10));
}

#[tokio::test]
async fn test_generated_person_fields() {
    let tax_id = Regex::new(r"^\d{3}\.\d{3}\.\d{3}-\d{2}$").unwrap();
    let (result, store) = seed(MemoryStore::new(), SeedMode::Checked).await;
    result.unwrap();

    for person in store.rows(Table::Pessoa).await {
        let cpf = person["cpf"].as_str().unwrap();
        assert!(tax_id.is_match(cpf), "bad tax id {cpf}");

        let age = person["idade"].as_u64().unwrap();
        assert!((18..=65).contains(&age), "bad age {age}");
    }
}

#[tokio::test]
async fn test_checked_mode_emails_are_unique() {
    let (result, store) = seed(MemoryStore::new(), SeedMode::Checked).await;
    result.unwrap();

    let persons = store.rows(Table::Pessoa).await;
    let emails: HashSet<&str> = persons
        .iter()
        .map(|p| p["email"].as_str().unwrap())
        .collect();
    assert_eq!(emails.len(), persons.len());
}

#[tokio::test]
async fn test_near_caps_inserts_only_the_difference() {
    let store = MemoryStore::new()
        .with_existing(Table::Pessoa, 95)
        .with_existing(Table::Venda, 3990);

    let (result, store) = seed(store, SeedMode::Checked).await;
    let report = result.unwrap();

    assert_eq!(report.persons_before, 95);
    assert_eq!(report.sales_before, 3990);
    assert_eq!(report.persons_inserted, 5);
    assert!(report.sales_inserted <= 10);
    assert_eq!(store.count(Table::Pessoa).await.unwrap(), 100);
    assert!(store.count(Table::Venda).await.unwrap() <= 4000);
}

#[tokio::test]
async fn test_first_person_insert_failure_inserts_no_sales() {
    for mode in [SeedMode::Bulk, SeedMode::Incremental, SeedMode::Checked] {
        let store = MemoryStore::new().fail_insert_at(Table::Pessoa, 1);
        let (result, store) = seed(store, mode).await;

        let err = result.unwrap_err();
        assert!(
            matches!(err, SeedError::Insert { table: Table::Pessoa, .. }),
            "{mode}: {err}"
        );
        assert_eq!(store.insert_calls(Table::Venda).await, 0, "{mode}");
        assert_eq!(store.count(Table::Venda).await.unwrap(), 0, "{mode}");
    }
}

#[tokio::test]
async fn test_rerun_at_caps_is_noop() {
    let (result, store) = seed(MemoryStore::new(), SeedMode::Incremental).await;
    result.unwrap();

    let (result, store) = seed(store, SeedMode::Checked).await;
    let report = result.unwrap();

    assert!(report.is_noop());
    assert_eq!(report.insert_calls, 0);
    assert_eq!(store.count(Table::Pessoa).await.unwrap(), 100);
    assert_eq!(store.count(Table::Venda).await.unwrap(), 4000);
}

#[tokio::test]
async fn test_sales_reference_new_persons() {
    let store = MemoryStore::new().with_existing(Table::Pessoa, 60);
    let (result, store) = seed(store, SeedMode::Incremental).await;
    result.unwrap();

    // New persons got ids 61..=100
    let sales = store.rows(Table::Venda).await;
    assert_eq!(sales.len(), 40 * 40);
    for sale in &sales {
        assert!((61..=100).contains(&sale["cliente_id"].as_i64().unwrap()));
        assert!((61..=100).contains(&sale["vendedor_id"].as_i64().unwrap()));
    }
}
