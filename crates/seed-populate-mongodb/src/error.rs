//! Error types for the MongoDB target.

use thiserror::Error;

/// Errors that can occur while talking to MongoDB.
#[derive(Error, Debug)]
pub enum MongoDBPopulatorError {
    /// MongoDB connection or command error.
    #[error("MongoDB error: {0}")]
    MongoDB(#[from] mongodb::error::Error),

    /// The session was already closed.
    #[error("MongoDB session already closed")]
    SessionClosed,
}
