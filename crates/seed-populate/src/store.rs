//! Store seam used by the seed loader.
//!
//! A `SeedStore` knows how to open a session against one target collection.
//! The `SeedSession` it returns is owned by a single run and is driven
//! strictly sequentially: connect, optional clear, one bulk insert, close.
//!
//! ```ignore
//! pub async fn seed<S: SeedStore>(store: &S, records: &[SyntheticRecord]) -> Result<()> {
//!     let report = SeedLoader::new(true).load(store, records).await?;
//!     println!("{report}");
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use recipe_generator::SyntheticRecord;

/// One insert operation inside a batch.
#[derive(Debug, Clone, Copy)]
pub struct InsertOne<'a> {
    /// Position of the record in the caller's input.
    pub position: usize,
    pub record: &'a SyntheticRecord,
}

/// A batch of independent insert operations, one per record, in input order.
#[derive(Debug, Clone, Default)]
pub struct InsertBatch<'a> {
    operations: Vec<InsertOne<'a>>,
}

impl<'a> InsertBatch<'a> {
    /// Build a batch with one insert per record, preserving order.
    pub fn from_records(records: &'a [SyntheticRecord]) -> Self {
        let operations = records
            .iter()
            .enumerate()
            .map(|(position, record)| InsertOne { position, record })
            .collect();
        Self { operations }
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn operations(&self) -> &[InsertOne<'a>] {
        &self.operations
    }

    /// The records of the batch, in submission order.
    pub fn records(&self) -> impl Iterator<Item = &'a SyntheticRecord> + '_ {
        self.operations.iter().map(|op| op.record)
    }
}

/// Result of a single bulk submission.
///
/// A store that accepts only part of a batch reports it here instead of
/// failing the whole submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulkInsertOutcome {
    /// Documents actually persisted.
    pub inserted: u64,
    /// Documents the store rejected.
    pub failed: u64,
}

/// A target that sessions can be opened against.
#[async_trait]
pub trait SeedStore: Send + Sync {
    /// Error produced by every store operation.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Session handle owned by one run.
    type Session: SeedSession<Error = Self::Error>;

    /// Human-readable `database.collection` name used in reports.
    fn target(&self) -> String;

    /// Open a session. Nothing needs releasing when this fails.
    async fn connect(&self) -> Result<Self::Session, Self::Error>;
}

/// An open session against the target collection.
#[async_trait]
pub trait SeedSession: Send {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Delete every document of the collection, returning how many were removed.
    async fn clear_collection(&mut self) -> Result<u64, Self::Error>;

    /// Submit the whole batch as one bulk operation.
    ///
    /// Partial acceptance is reported through the outcome. An `Err` means the
    /// submission failed as a whole.
    async fn bulk_insert(
        &mut self,
        batch: &InsertBatch<'_>,
    ) -> Result<BulkInsertOutcome, Self::Error>;

    /// Release the session.
    async fn close(&mut self) -> Result<(), Self::Error>;
}
