//! Seed pipeline integration tests against the in-memory target.
//!
//! These exercise the full generate -> reset -> bulk insert -> close protocol
//! with injected faults, without needing a running database.

use chrono::{TimeZone, Utc};
use recipe_generator::RecipeGenerator;
use seed_populate::{LoadError, MemoryStore, MemoryStoreError, SeedLoader, StoreOperation};
use serde_json::json;

const SEED: u64 = 42;

fn unrelated_documents(count: usize) -> Vec<serde_json::Value> {
    (0..count)
        .map(|i| json!({ "legacy_id": i, "kind": "unrelated" }))
        .collect()
}

fn position(journal: &[StoreOperation], pred: impl Fn(&StoreOperation) -> bool) -> usize {
    journal.iter().position(pred).expect("operation missing from journal")
}

#[tokio::test]
async fn test_five_records_into_empty_store() {
    let store = MemoryStore::new("cookbook", "recipes");
    let records = RecipeGenerator::new(SEED).generate(5).unwrap();

    let report = SeedLoader::new(false).load(&store, &records).await.unwrap();

    assert_eq!(report.inserted, 5);
    assert_eq!(report.failed, 0);
    assert_eq!(report.deleted, None);

    let documents = store.documents();
    assert_eq!(documents.len(), 5);
    for (document, record) in documents.iter().zip(&records) {
        assert_eq!(document["name"], record.name.as_str());
        assert_eq!(document["sender"]["email"], record.sender.email.as_str());
        assert!(document["ingredients"].is_array());
        assert!(document["created_at"].is_string());
        assert!(document["updated_at"].is_string());
    }
}

#[tokio::test]
async fn test_reset_replaces_prepopulated_documents() {
    let store = MemoryStore::new("cookbook", "recipes").with_documents(unrelated_documents(10));
    let records = RecipeGenerator::new(SEED).generate(3).unwrap();

    let report = SeedLoader::new(true).load(&store, &records).await.unwrap();

    assert_eq!(report.deleted, Some(10));
    assert_eq!(report.inserted, 3);

    let documents = store.documents();
    assert_eq!(documents.len(), 3);
    assert!(documents.iter().all(|d| d.get("legacy_id").is_none()));

    let journal = store.journal();
    let clear = position(&journal, |op| matches!(op, StoreOperation::Clear { deleted: 10 }));
    let insert = position(&journal, |op| matches!(op, StoreOperation::BulkInsert { .. }));
    assert!(clear < insert, "clear must complete before insert");
}

#[tokio::test]
async fn test_without_reset_documents_are_appended() {
    let store = MemoryStore::new("cookbook", "recipes").with_documents(unrelated_documents(4));
    let records = RecipeGenerator::new(SEED).generate(6).unwrap();

    let report = SeedLoader::new(false).load(&store, &records).await.unwrap();

    assert_eq!(report.deleted, None);
    assert_eq!(report.inserted, 6);

    let documents = store.documents();
    assert_eq!(documents.len(), 10);
    assert_eq!(documents[..4], unrelated_documents(4)[..]);
    assert!(!store
        .journal()
        .iter()
        .any(|op| matches!(op, StoreOperation::Clear { .. })));
}

#[tokio::test]
async fn test_partial_acceptance_is_reported_not_raised() {
    let store = MemoryStore::new("cookbook", "recipes").reject_every(3);
    let records = RecipeGenerator::new(SEED).generate(12).unwrap();

    let report = SeedLoader::new(false).load(&store, &records).await.unwrap();

    assert!(report.inserted < records.len() as u64);
    assert_eq!(report.inserted, 8);
    assert_eq!(report.failed, 4);
    assert_eq!(report.submitted, 12);
    assert!(!report.is_complete());
    assert_eq!(store.document_count(), 8);
    assert_eq!(store.close_count(), 1);
}

#[tokio::test]
async fn test_connect_failure_skips_close() {
    let store = MemoryStore::new("cookbook", "recipes").fail_on_connect();
    let records = RecipeGenerator::new(SEED).generate(3).unwrap();

    let err = SeedLoader::new(true)
        .load(&store, &records)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        LoadError::Connection {
            source: MemoryStoreError::ConnectionRefused,
            ..
        }
    ));
    assert_eq!(store.close_count(), 0);
    assert!(store.journal().is_empty());
}

#[tokio::test]
async fn test_clear_failure_aborts_before_insert_and_closes_once() {
    let store = MemoryStore::new("cookbook", "recipes")
        .with_documents(unrelated_documents(2))
        .fail_on_clear();
    let records = RecipeGenerator::new(SEED).generate(3).unwrap();

    let err = SeedLoader::new(true)
        .load(&store, &records)
        .await
        .unwrap_err();

    assert!(matches!(err, LoadError::Clear { .. }));
    assert_eq!(store.close_count(), 1);
    assert_eq!(store.document_count(), 2);
    assert!(!store
        .journal()
        .iter()
        .any(|op| matches!(op, StoreOperation::BulkInsert { .. })));
}

#[tokio::test]
async fn test_insert_failure_closes_once() {
    let store = MemoryStore::new("cookbook", "recipes").fail_on_insert();
    let records = RecipeGenerator::new(SEED).generate(3).unwrap();

    let err = SeedLoader::new(false)
        .load(&store, &records)
        .await
        .unwrap_err();

    assert!(matches!(err, LoadError::Insert { .. }));
    assert_eq!(store.close_count(), 1);
    assert_eq!(
        store.journal().last(),
        Some(&StoreOperation::Close),
        "close must be the final operation"
    );
}

#[tokio::test]
async fn test_successful_run_closes_once() {
    let store = MemoryStore::new("cookbook", "recipes");
    let mut generator = RecipeGenerator::new(SEED);

    SeedLoader::new(true)
        .populate(&store, &mut generator, 20)
        .await
        .unwrap();

    assert_eq!(store.close_count(), 1);
    assert_eq!(store.journal().last(), Some(&StoreOperation::Close));
}

#[tokio::test]
async fn test_error_messages_name_the_target() {
    let store = MemoryStore::new("cookbook", "recipes").fail_on_clear();
    let records = RecipeGenerator::new(SEED).generate(1).unwrap();

    let err = SeedLoader::new(true)
        .load(&store, &records)
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Failed to clear existing documents from cookbook.recipes"
    );
    assert_eq!(
        std::error::Error::source(&err).map(|s| s.to_string()),
        Some("Clear rejected by in-memory store".to_string())
    );
}

#[tokio::test]
async fn test_seeded_runs_store_identical_documents() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let first = MemoryStore::new("cookbook", "recipes");
    let second = MemoryStore::new("cookbook", "recipes");

    let records_a = RecipeGenerator::new(SEED).generate_at(8, now).unwrap();
    let records_b = RecipeGenerator::new(SEED).generate_at(8, now).unwrap();
    SeedLoader::new(false).load(&first, &records_a).await.unwrap();
    SeedLoader::new(false).load(&second, &records_b).await.unwrap();

    assert_eq!(first.documents(), second.documents());
}
