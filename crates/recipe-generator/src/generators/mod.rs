//! Individual field generators for synthetic recipes.
//!
//! Every generator takes the caller's RNG explicitly, so a seeded
//! `RecipeGenerator` stays reproducible across all fields.

pub mod array;
pub mod email;
pub mod text;
pub mod timestamp;
pub mod vocab;

use rand::Rng;

/// Pick one entry from a non-empty word pool.
pub fn pick<'a, R: Rng>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    debug_assert!(!pool.is_empty(), "word pools are never empty");
    pool[rng.gen_range(0..pool.len())]
}
