//! Bulk INSERT and reset logic for MongoDB.

use crate::error::MongoDBPopulatorError;
use bson::{doc, Document};
use mongodb::error::ErrorKind;
use mongodb::Collection;
use recipe_generator::SyntheticRecord;
use seed_populate::{BulkInsertOutcome, InsertBatch};

/// Insert a batch of recipes with one unordered `insert_many`.
///
/// Unordered submission lets the server persist every valid document even
/// when some are rejected. Individual write errors are counted, not raised.
pub async fn insert_batch(
    collection: &Collection<Document>,
    batch: &InsertBatch<'_>,
) -> Result<BulkInsertOutcome, MongoDBPopulatorError> {
    if batch.is_empty() {
        return Ok(BulkInsertOutcome::default());
    }

    let submitted = batch.len() as u64;
    let documents: Vec<Document> = batch.records().map(record_to_document).collect();

    match collection.insert_many(documents).ordered(false).await {
        Ok(result) => Ok(BulkInsertOutcome {
            inserted: result.inserted_ids.len() as u64,
            failed: 0,
        }),
        Err(err) => match partial_failure_count(&err) {
            Some(failed) => Ok(BulkInsertOutcome {
                inserted: submitted.saturating_sub(failed),
                failed: failed.min(submitted),
            }),
            None => Err(err.into()),
        },
    }
}

/// Number of rejected documents when `err` describes a partially applied batch.
///
/// Returns `None` for anything that is not a plain per-document failure,
/// including write concern errors, since the persisted count is unknown then.
fn partial_failure_count(err: &mongodb::error::Error) -> Option<u64> {
    match err.kind.as_ref() {
        ErrorKind::InsertMany(failure) if failure.write_concern_error.is_none() => failure
            .write_errors
            .as_ref()
            .map(|errors| errors.len() as u64),
        _ => None,
    }
}

/// Delete every document of the collection.
pub async fn delete_all(collection: &Collection<Document>) -> Result<u64, MongoDBPopulatorError> {
    let result = collection.delete_many(doc! {}).await?;
    Ok(result.deleted_count)
}

/// Get the document count for a collection.
pub async fn count_documents(
    collection: &Collection<Document>,
) -> Result<u64, MongoDBPopulatorError> {
    let count = collection.count_documents(doc! {}).await?;
    Ok(count)
}

/// Convert a recipe to the BSON document stored in MongoDB.
///
/// Timestamps become BSON datetimes, so they sort and compare natively.
pub fn record_to_document(record: &SyntheticRecord) -> Document {
    doc! {
        "name": record.name.as_str(),
        "category": record.category.as_str(),
        "cuisine": record.cuisine.as_str(),
        "description": record.description.as_str(),
        "ingredients": record.ingredients.clone(),
        "instructions": record.instructions.as_str(),
        "sender": {
            "email": record.sender.email.as_str(),
            "first_name": record.sender.first_name.as_str(),
            "last_name": record.sender.last_name.as_str(),
        },
        "created_at": bson::DateTime::from_chrono(record.created_at),
        "updated_at": bson::DateTime::from_chrono(record.updated_at),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use recipe_generator::{RecipeGenerator, Sender};

    fn sample_record() -> SyntheticRecord {
        SyntheticRecord {
            name: "Pad Thai".to_string(),
            category: "tangy".to_string(),
            cuisine: "thai".to_string(),
            description: "Stir-fried rice noodles.".to_string(),
            ingredients: vec![
                "rice noodles".to_string(),
                "shrimp".to_string(),
                "lime".to_string(),
            ],
            instructions: "Soak.\nFry.".to_string(),
            sender: Sender {
                email: "kenji_sato@gmail.com".to_string(),
                first_name: "Kenji".to_string(),
                last_name: "Sato".to_string(),
            },
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 4, 1, 8, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_record_to_document() {
        let record = sample_record();
        let doc = record_to_document(&record);

        assert_eq!(doc.get_str("name").unwrap(), "Pad Thai");
        assert_eq!(doc.get_str("cuisine").unwrap(), "thai");
        assert_eq!(doc.get_array("ingredients").unwrap().len(), 3);

        let sender = doc.get_document("sender").unwrap();
        assert_eq!(sender.get_str("email").unwrap(), "kenji_sato@gmail.com");
        assert_eq!(sender.get_str("first_name").unwrap(), "Kenji");
        assert_eq!(sender.get_str("last_name").unwrap(), "Sato");

        let created = doc.get_datetime("created_at").unwrap();
        let updated = doc.get_datetime("updated_at").unwrap();
        assert_eq!(created.timestamp_millis(), record.created_at.timestamp_millis());
        assert!(created <= updated);
        assert!(!doc.contains_key("_id"));
    }

    #[test]
    fn test_generated_records_keep_order_in_documents() {
        let records = RecipeGenerator::new(42).generate(5).unwrap();
        let batch = InsertBatch::from_records(&records);

        let names: Vec<String> = batch
            .records()
            .map(record_to_document)
            .map(|doc| doc.get_str("name").unwrap().to_string())
            .collect();
        let expected: Vec<String> = records.iter().map(|r| r.name.clone()).collect();

        assert_eq!(names, expected);
    }
}
