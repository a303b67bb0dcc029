//! Free-text generators: template descriptions and lorem paragraphs.
//!
//! Templates support these placeholders:
//! - `{dish}` - dish name
//! - `{ingredient}` - ingredient, drawn anew for every occurrence
//! - `{adjective}` - food adjective
//! - `{cooking}` - cooking method

use super::{pick, vocab};
use rand::Rng;

/// Sentences per lorem paragraph.
pub const SENTENCES_PER_PARAGRAPH: usize = 3;
const MIN_WORDS_PER_SENTENCE: usize = 3;
const MAX_WORDS_PER_SENTENCE: usize = 10;

/// Fill every placeholder of `template` with an independent draw.
pub fn fill_template<R: Rng>(template: &str, rng: &mut R) -> String {
    let mut result = String::with_capacity(template.len() * 2);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        let end = start + end;
        result.push_str(&rest[..start]);

        match &rest[start + 1..end] {
            "dish" => result.push_str(pick(rng, vocab::DISHES)),
            "ingredient" => result.push_str(pick(rng, vocab::INGREDIENTS)),
            "adjective" => result.push_str(pick(rng, vocab::ADJECTIVES)),
            "cooking" => result.push_str(pick(rng, vocab::COOKING_METHODS)),
            // Unknown placeholder, keep it verbatim
            _ => result.push_str(&rest[start..=end]),
        }

        rest = &rest[end + 1..];
    }

    result.push_str(rest);
    capitalize(&result)
}

/// Generate a one-sentence recipe description.
pub fn generate_description<R: Rng>(rng: &mut R) -> String {
    let template = pick(rng, vocab::DESCRIPTION_TEMPLATES);
    fill_template(template, rng)
}

/// Generate one lorem sentence, capitalized and terminated by a period.
pub fn generate_sentence<R: Rng>(rng: &mut R) -> String {
    let word_count = rng.gen_range(MIN_WORDS_PER_SENTENCE..=MAX_WORDS_PER_SENTENCE);
    let words: Vec<&str> = (0..word_count)
        .map(|_| pick(rng, vocab::LOREM_WORDS))
        .collect();

    format!("{}.", capitalize(&words.join(" ")))
}

/// Generate one lorem paragraph.
pub fn generate_paragraph<R: Rng>(rng: &mut R) -> String {
    (0..SENTENCES_PER_PARAGRAPH)
        .map(|_| generate_sentence(rng))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Generate `count` lorem paragraphs joined by newlines.
pub fn generate_paragraphs<R: Rng>(rng: &mut R, count: usize) -> String {
    (0..count)
        .map(|_| generate_paragraph(rng))
        .collect::<Vec<_>>()
        .join("\n")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
