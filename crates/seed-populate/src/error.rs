//! Error types for the seed loader.

use recipe_generator::GeneratorError;
use thiserror::Error;

/// Errors that abort a seed run.
///
/// `E` is the store's own error type. Partial insert failures are not errors;
/// they only show up in the `LoadReport`.
#[derive(Error, Debug)]
pub enum LoadError<E> {
    /// The session could not be opened.
    #[error("Failed to connect to {target}")]
    Connection {
        target: String,
        #[source]
        source: E,
    },

    /// The reset step failed; nothing was inserted.
    #[error("Failed to clear existing documents from {target}")]
    Clear {
        target: String,
        #[source]
        source: E,
    },

    /// The bulk submission failed as a whole.
    #[error("Bulk insert into {target} failed")]
    Insert {
        target: String,
        #[source]
        source: E,
    },

    /// Records could not be generated.
    #[error(transparent)]
    Generate(#[from] GeneratorError),
}
