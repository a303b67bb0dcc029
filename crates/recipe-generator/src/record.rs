//! The synthetic recipe document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author of a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sender {
    /// Lower-cased address derived from `first_name` and `last_name`.
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// One generated recipe.
///
/// Records are plain values: they are built once by the generator, handed to
/// the loader and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntheticRecord {
    /// Dish name, e.g. "Chicken Fajitas".
    pub name: String,
    /// Descriptive food adjective, e.g. "crispy".
    pub category: String,
    /// Lower-cased ethnic category, e.g. "italian".
    pub cuisine: String,
    pub description: String,
    /// Between 3 and 10 ingredients, duplicates allowed.
    pub ingredients: Vec<String>,
    /// Two paragraphs separated by a newline.
    pub instructions: String,
    pub sender: Sender,
    /// Always at or before `updated_at`.
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> SyntheticRecord {
        SyntheticRecord {
            name: "Pasta Carbonara".to_string(),
            category: "savory".to_string(),
            cuisine: "italian".to_string(),
            description: "A classic.".to_string(),
            ingredients: vec!["egg".into(), "pecorino".into(), "guanciale".into()],
            instructions: "Boil.\nStir.".to_string(),
            sender: Sender {
                email: "ada.lovelace@example.com".to_string(),
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
            },
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_serialized_field_names() {
        let value = serde_json::to_value(sample()).unwrap();

        for key in [
            "name",
            "category",
            "cuisine",
            "description",
            "ingredients",
            "instructions",
            "sender",
            "created_at",
            "updated_at",
        ] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(value["sender"]["first_name"], "Ada");
        assert_eq!(value["sender"]["last_name"], "Lovelace");
    }
}
