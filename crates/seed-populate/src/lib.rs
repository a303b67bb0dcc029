//! Store-agnostic seeding pipeline.
//!
//! This crate provides the pieces every seed target shares: the common CLI
//! arguments, the `SeedStore`/`SeedSession` seam, the `SeedLoader` that runs
//! the reset-then-insert protocol, and an in-memory target used for dry runs
//! and tests. Store-specific crates (e.g. `seed-populate-mongodb`) implement
//! the seam.

pub mod args;
pub mod error;
pub mod loader;
pub mod memory;
pub mod store;

pub use args::{parse_flag, CommonPopulateArgs, DEFAULT_RECORD_COUNT};
pub use error::LoadError;
pub use loader::{LoadPhase, LoadReport, SeedLoader};
pub use memory::{MemorySession, MemoryStore, MemoryStoreError, StoreOperation};
pub use store::{BulkInsertOutcome, InsertBatch, InsertOne, SeedSession, SeedStore};
