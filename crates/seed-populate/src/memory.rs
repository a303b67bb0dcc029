//! In-memory seed target.
//!
//! Backs `--dry-run` and the pipeline tests. Documents are kept as JSON
//! values, every store operation is appended to a journal, and faults can be
//! injected at each step of the protocol.

use crate::store::{BulkInsertOutcome, InsertBatch, SeedSession, SeedStore};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;

/// Errors raised by the in-memory store.
#[derive(Error, Debug)]
pub enum MemoryStoreError {
    #[error("Connection refused by in-memory store")]
    ConnectionRefused,

    #[error("Clear rejected by in-memory store")]
    ClearRejected,

    #[error("Bulk insert rejected by in-memory store")]
    InsertRejected,

    #[error("Session already closed")]
    SessionClosed,

    #[error("Failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// One operation as observed by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOperation {
    Connect,
    Clear { deleted: u64 },
    BulkInsert { submitted: usize, inserted: u64 },
    Close,
}

#[derive(Debug, Clone, Copy, Default)]
struct FaultPlan {
    fail_connect: bool,
    fail_clear: bool,
    fail_insert: bool,
    /// Reject every n-th insert of a batch (1-based).
    reject_every: Option<usize>,
}

#[derive(Debug, Default)]
struct MemoryState {
    documents: Vec<Value>,
    journal: Vec<StoreOperation>,
}

/// In-memory collection shared by every session opened from it.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    database: String,
    collection: String,
    faults: FaultPlan,
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    pub fn new(database: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            collection: collection.into(),
            faults: FaultPlan::default(),
            state: Arc::default(),
        }
    }

    /// Pre-populate the collection.
    pub fn with_documents(self, documents: impl IntoIterator<Item = Value>) -> Self {
        self.lock().documents.extend(documents);
        self
    }

    /// Refuse every connection attempt.
    pub fn fail_on_connect(mut self) -> Self {
        self.faults.fail_connect = true;
        self
    }

    /// Fail the clear step.
    pub fn fail_on_clear(mut self) -> Self {
        self.faults.fail_clear = true;
        self
    }

    /// Fail every bulk submission outright.
    pub fn fail_on_insert(mut self) -> Self {
        self.faults.fail_insert = true;
        self
    }

    /// Accept bulk submissions but reject every `n`-th document.
    pub fn reject_every(mut self, n: usize) -> Self {
        self.faults.reject_every = (n > 0).then_some(n);
        self
    }

    /// Snapshot of the stored documents.
    pub fn documents(&self) -> Vec<Value> {
        self.lock().documents.clone()
    }

    pub fn document_count(&self) -> usize {
        self.lock().documents.len()
    }

    /// Every operation performed so far, in order.
    pub fn journal(&self) -> Vec<StoreOperation> {
        self.lock().journal.clone()
    }

    /// How many times a session was closed.
    pub fn close_count(&self) -> usize {
        self.lock()
            .journal
            .iter()
            .filter(|op| **op == StoreOperation::Close)
            .count()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl SeedStore for MemoryStore {
    type Error = MemoryStoreError;
    type Session = MemorySession;

    fn target(&self) -> String {
        format!("{}.{}", self.database, self.collection)
    }

    async fn connect(&self) -> Result<MemorySession, MemoryStoreError> {
        if self.faults.fail_connect {
            return Err(MemoryStoreError::ConnectionRefused);
        }

        self.lock().journal.push(StoreOperation::Connect);
        Ok(MemorySession {
            store: self.clone(),
            closed: false,
        })
    }
}

/// Session over a `MemoryStore`.
#[derive(Debug)]
pub struct MemorySession {
    store: MemoryStore,
    closed: bool,
}

impl MemorySession {
    fn ensure_open(&self) -> Result<(), MemoryStoreError> {
        if self.closed {
            Err(MemoryStoreError::SessionClosed)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SeedSession for MemorySession {
    type Error = MemoryStoreError;

    async fn clear_collection(&mut self) -> Result<u64, MemoryStoreError> {
        self.ensure_open()?;
        if self.store.faults.fail_clear {
            return Err(MemoryStoreError::ClearRejected);
        }

        let mut state = self.store.lock();
        let deleted = state.documents.len() as u64;
        state.documents.clear();
        state.journal.push(StoreOperation::Clear { deleted });
        Ok(deleted)
    }

    async fn bulk_insert(
        &mut self,
        batch: &InsertBatch<'_>,
    ) -> Result<BulkInsertOutcome, MemoryStoreError> {
        self.ensure_open()?;
        if self.store.faults.fail_insert {
            return Err(MemoryStoreError::InsertRejected);
        }

        let mut accepted = Vec::with_capacity(batch.len());
        let mut failed = 0u64;
        for op in batch.operations() {
            let rejected = self
                .store
                .faults
                .reject_every
                .is_some_and(|n| (op.position + 1) % n == 0);
            if rejected {
                failed += 1;
            } else {
                accepted.push(serde_json::to_value(op.record)?);
            }
        }

        let inserted = accepted.len() as u64;
        let mut state = self.store.lock();
        state.documents.extend(accepted);
        state.journal.push(StoreOperation::BulkInsert {
            submitted: batch.len(),
            inserted,
        });

        Ok(BulkInsertOutcome { inserted, failed })
    }

    async fn close(&mut self) -> Result<(), MemoryStoreError> {
        self.ensure_open()?;
        self.closed = true;
        self.store.lock().journal.push(StoreOperation::Close);
        Ok(())
    }
}
