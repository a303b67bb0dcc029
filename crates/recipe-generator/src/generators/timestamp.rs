//! Timestamp generators.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// How far back `generate_past` reaches by default.
pub const DEFAULT_PAST_YEARS: i64 = 1;

/// The current UTC time truncated to whole milliseconds.
///
/// MongoDB stores datetimes with millisecond precision, so generating at the
/// same precision keeps `created_at <= updated_at` intact after a round trip.
pub fn now_millis() -> DateTime<Utc> {
    truncate_to_millis(Utc::now())
}

/// Drop any sub-millisecond component of `dt`.
pub fn truncate_to_millis(dt: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(dt.timestamp_millis()).unwrap_or(dt)
}

/// Generate a random timestamp within `years` years before `reference`.
///
/// The result is uniformly distributed in `[reference - years, reference]`
/// with millisecond resolution and never later than `reference`.
pub fn generate_past<R: Rng>(rng: &mut R, reference: DateTime<Utc>, years: i64) -> DateTime<Utc> {
    let reference = truncate_to_millis(reference);
    let end = reference.timestamp_millis();
    let start = (reference - Duration::days(365 * years.max(0))).timestamp_millis();

    if start >= end {
        return reference;
    }

    let random_ms = rng.gen_range(start..=end);
    DateTime::from_timestamp_millis(random_ms).unwrap_or(reference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_past_within_window() {
        let mut rng = StdRng::seed_from_u64(42);
        let reference = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let earliest = reference - Duration::days(365);

        for _ in 0..200 {
            let dt = generate_past(&mut rng, reference, DEFAULT_PAST_YEARS);
            assert!(dt <= reference);
            assert!(dt >= earliest);
        }
    }

    #[test]
    fn test_generate_past_zero_years() {
        let mut rng = StdRng::seed_from_u64(42);
        let reference = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

        assert_eq!(generate_past(&mut rng, reference, 0), reference);
    }

    #[test]
    fn test_truncate_to_millis() {
        let dt = Utc.timestamp_opt(1_700_000_000, 123_456_789).unwrap();
        let truncated = truncate_to_millis(dt);

        assert_eq!(truncated.timestamp_subsec_nanos(), 123_000_000);
        assert!(truncated <= dt);
    }

    #[test]
    fn test_deterministic_generation() {
        let reference = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);

        assert_eq!(
            generate_past(&mut rng1, reference, 1),
            generate_past(&mut rng2, reference, 1)
        );
    }
}
