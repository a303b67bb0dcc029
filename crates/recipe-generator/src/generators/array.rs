//! Array generators.

use rand::seq::SliceRandom;
use rand::Rng;

/// Smallest ingredient list a recipe gets.
pub const MIN_INGREDIENTS: usize = 3;
/// Largest ingredient list a recipe gets.
pub const MAX_INGREDIENTS: usize = 10;

/// Generate an array by sampling from a pool of values, with replacement.
///
/// The length is drawn uniformly from `min_length..=max_length`. Duplicates
/// are allowed.
pub fn generate_sample_array<R: Rng>(
    rng: &mut R,
    pool: &[&str],
    min_length: usize,
    max_length: usize,
) -> Vec<String> {
    if pool.is_empty() || max_length == 0 {
        return vec![];
    }

    let length = rng.gen_range(min_length.min(max_length)..=max_length);

    (0..length)
        .filter_map(|_| pool.choose(rng))
        .map(|item| (*item).to_string())
        .collect()
}

/// Generate the ingredient list of one recipe.
pub fn generate_ingredients<R: Rng>(rng: &mut R, pool: &[&str]) -> Vec<String> {
    generate_sample_array(rng, pool, MIN_INGREDIENTS, MAX_INGREDIENTS)
}
