//! MongoDB target for recipe-seed.
//!
//! Implements the `seed-populate` store seam on top of the official MongoDB
//! driver: `MongoDBStore` opens sessions, `MongoDBSession` clears the target
//! collection and submits recipes as a single unordered bulk insert.

pub mod args;
pub mod error;
pub mod insert;
pub mod store;

pub use args::MongoDBPopulateArgs;
pub use error::MongoDBPopulatorError;
pub use insert::record_to_document;
pub use store::{MongoDBSession, MongoDBStore};
