//! Main generator for producing synthetic recipes.

use crate::generators::timestamp::{self, DEFAULT_PAST_YEARS};
use crate::generators::{array, email, pick, text, vocab};
use crate::record::{Sender, SyntheticRecord};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Paragraphs in every recipe's instructions.
const INSTRUCTION_PARAGRAPHS: usize = 2;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GeneratorError {
    /// Record count must be at least one
    #[error("Invalid record count {0}: at least one record must be requested")]
    InvalidCount(u64),
}

/// Generator that produces synthetic recipe records.
///
/// The random source is owned by the generator, so two generators built
/// with the same seed yield identical records for the same reference time.
pub struct RecipeGenerator {
    /// Seeded random number generator for reproducibility
    rng: StdRng,
    /// Number of records produced so far
    index: u64,
}

impl RecipeGenerator {
    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            index: 0,
        }
    }

    /// Create a generator seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            index: 0,
        }
    }

    /// Number of records produced so far.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Generate `count` records relative to the current time.
    pub fn generate(&mut self, count: u64) -> Result<Vec<SyntheticRecord>, GeneratorError> {
        self.generate_at(count, timestamp::now_millis())
    }

    /// Generate `count` records relative to a fixed reference time.
    pub fn generate_at(
        &mut self,
        count: u64,
        now: DateTime<Utc>,
    ) -> Result<Vec<SyntheticRecord>, GeneratorError> {
        Ok(self.records(count, now)?.collect())
    }

    /// Lazily generate `count` records relative to `now`.
    pub fn records(
        &mut self,
        count: u64,
        now: DateTime<Utc>,
    ) -> Result<RecordIterator<'_>, GeneratorError> {
        if count == 0 {
            return Err(GeneratorError::InvalidCount(count));
        }

        Ok(RecordIterator {
            generator: self,
            now,
            remaining: count,
        })
    }

    /// Generate one record relative to `now`.
    pub fn next_record(&mut self, now: DateTime<Utc>) -> SyntheticRecord {
        let rng = &mut self.rng;

        let first_name = pick(rng, vocab::FIRST_NAMES).to_string();
        let last_name = pick(rng, vocab::LAST_NAMES).to_string();

        // created_at is drawn relative to updated_at, never the other way round
        let updated_at = timestamp::generate_past(rng, now, DEFAULT_PAST_YEARS);
        let created_at = timestamp::generate_past(rng, updated_at, DEFAULT_PAST_YEARS);

        let name = pick(rng, vocab::DISHES).to_string();
        let category = pick(rng, vocab::ADJECTIVES).to_string();
        let cuisine = pick(rng, vocab::ETHNIC_CATEGORIES).to_lowercase();
        let description = text::generate_description(rng);
        let ingredients = array::generate_ingredients(rng, vocab::INGREDIENTS);
        let instructions = text::generate_paragraphs(rng, INSTRUCTION_PARAGRAPHS);
        let email = email::derive_email(rng, &first_name, &last_name);

        self.index += 1;

        SyntheticRecord {
            name,
            category,
            cuisine,
            description,
            ingredients,
            instructions,
            sender: Sender {
                email,
                first_name,
                last_name,
            },
            created_at,
            updated_at,
        }
    }
}

/// Iterator that lazily generates records.
pub struct RecordIterator<'a> {
    generator: &'a mut RecipeGenerator,
    now: DateTime<Utc>,
    remaining: u64,
}

impl Iterator for RecordIterator<'_> {
    type Item = SyntheticRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_record(self.now))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RecordIterator<'_> {}
