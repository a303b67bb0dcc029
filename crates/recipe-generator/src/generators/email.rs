//! Sender email derivation.
//!
//! The local part is always `{first}{sep}{last}` built from the sender's
//! sanitized names, optionally followed by a two-digit suffix. Only the
//! separator, the suffix and the provider are random.

use super::{pick, vocab};
use rand::Rng;

const SEPARATORS: &[&str] = &[".", "_", ""];

/// Lower-case ASCII alphanumerics of `name`, e.g. "O'Brien" -> "obrien".
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Build the local part of an address from a name pair.
pub fn local_part(first_name: &str, last_name: &str, separator: &str) -> String {
    let first = sanitize_name(first_name);
    let last = sanitize_name(last_name);

    match (first.is_empty(), last.is_empty()) {
        (true, true) => "user".to_string(),
        (false, true) => first,
        (true, false) => last,
        (false, false) => format!("{first}{separator}{last}"),
    }
}

/// Derive a lower-cased email address for the given names.
pub fn derive_email<R: Rng>(rng: &mut R, first_name: &str, last_name: &str) -> String {
    let separator = pick(rng, SEPARATORS);
    let mut local = local_part(first_name, last_name, separator);

    if rng.gen_bool(0.5) {
        local.push_str(&rng.gen_range(10..100).to_string());
    }

    let provider = pick(rng, vocab::EMAIL_PROVIDERS);
    format!("{local}@{provider}").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("O'Brien"), "obrien");
        assert_eq!(sanitize_name("Van der Berg"), "vanderberg");
        assert_eq!(sanitize_name("Ada"), "ada");
    }

    #[test]
    fn test_local_part_fallbacks() {
        assert_eq!(local_part("Ada", "Lovelace", "."), "ada.lovelace");
        assert_eq!(local_part("Ada", "'", "."), "ada");
        assert_eq!(local_part("", "Lovelace", "_"), "lovelace");
        assert_eq!(local_part("", "", "."), "user");
    }

    #[test]
    fn test_derive_email_shape() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let email = derive_email(&mut rng, "Grace", "O'Connell");
            let (local, domain) = email.split_once('@').unwrap();

            assert_eq!(email, email.to_lowercase());
            assert!(local.starts_with("grace"));
            assert!(local.contains("oconnell"));
            assert!(vocab::EMAIL_PROVIDERS.contains(&domain));
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(
            derive_email(&mut rng1, "Noah", "Kim"),
            derive_email(&mut rng2, "Noah", "Kim")
        );
    }
}
