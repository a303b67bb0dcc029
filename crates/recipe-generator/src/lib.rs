//! Synthetic recipe generator for recipe-seed.
//!
//! This crate provides the `RecipeGenerator` which produces synthetic cooking
//! recipes shaped like the documents the seeding tool writes to MongoDB. The
//! generator owns a seeded RNG, so the same seed and reference time always
//! yield the same records.
//!
//! # Architecture
//!
//! ```text
//!   seed / entropy
//!        │
//!        ▼
//! ┌──────────────────┐
//! │ RecipeGenerator  │
//! │                  │
//! │  - rng (StdRng)  │
//! │  - index         │
//! └────────┬─────────┘
//!          │
//!          ▼
//!    SyntheticRecord { name, cuisine, ingredients, sender, created_at, .. }
//! ```
//!
//! # Example
//!
//! ```rust
//! use recipe_generator::RecipeGenerator;
//!
//! let mut generator = RecipeGenerator::new(42);
//! let recipes = generator.generate(3).unwrap();
//! assert_eq!(recipes.len(), 3);
//! assert!(recipes.iter().all(|r| r.created_at <= r.updated_at));
//! ```
//!
//! # Field generators
//!
//! - `timestamp` - past timestamps relative to a reference time
//! - `array` - ingredient lists sampled with replacement
//! - `email` - sender addresses derived from first/last names
//! - `text` - description templates and lorem paragraphs
//! - `vocab` - word pools every generator draws from

pub mod generator;
pub mod generators;
pub mod record;

// Re-exports for convenience
pub use generator::{GeneratorError, RecipeGenerator, RecordIterator};
pub use record::{Sender, SyntheticRecord};
