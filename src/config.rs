//! Validated runtime configuration.
//!
//! Settings come from CLI flags or their environment variables (see
//! `MongoDBPopulateArgs`). `SeedConfig::try_from_args` checks all of them at
//! once so a bad bundle is rejected before any connection is attempted.
//!
//! # Environment Variables
//!
//! - `MONGODB_URI`: connection string, `mongodb://` or `mongodb+srv://` (required)
//! - `MONGODB_DATABASE`: target database (required)
//! - `MONGODB_COLLECTION`: target collection (required)
//! - `MONGODB_RESET_BEFORE_INSERTING`: wipe the collection first (required)
//! - `RECIPES_TO_INSERT`: number of recipes, at least 1 (default: 300)
//! - `RECIPES_SEED`: fixed random seed (optional)

use seed_populate_mongodb::MongoDBPopulateArgs;
use mongodb::options::ConnectionString;

/// Error returned when the configuration is invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", .problems.join("; "))]
pub struct ConfigError {
    problems: Vec<String>,
}

impl ConfigError {
    /// Every problem found, in field order.
    pub fn problems(&self) -> &[String] {
        &self.problems
    }
}

/// Validated settings for one seed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    pub store_uri: String,
    pub database_name: String,
    pub collection_name: String,
    pub reset_before_inserting: bool,
    pub record_count: u64,
    /// `None` seeds the generator from OS entropy.
    pub seed: Option<u64>,
    pub dry_run: bool,
}

impl SeedConfig {
    /// Validate parsed CLI/environment settings.
    pub fn try_from_args(args: &MongoDBPopulateArgs) -> Result<Self, ConfigError> {
        let mut problems = Vec::new();

        let store_uri = required(&args.mongodb_uri, "MONGODB_URI", &mut problems);
        if let Some(uri) = &store_uri {
            if let Err(e) = validate_store_uri(uri) {
                problems.push(format!("\"MONGODB_URI\" {e}"));
            }
        }
        let database_name = required(&args.mongodb_database, "MONGODB_DATABASE", &mut problems);
        let collection_name =
            required(&args.mongodb_collection, "MONGODB_COLLECTION", &mut problems);

        let reset_before_inserting = args.common.reset_before_inserting;
        if reset_before_inserting.is_none() {
            problems.push("\"MONGODB_RESET_BEFORE_INSERTING\" is required".to_string());
        }

        let record_count = args.common.record_count;
        if record_count < 1 {
            problems.push(format!(
                "\"RECIPES_TO_INSERT\" must be greater than or equal to 1, got {record_count}"
            ));
        }

        match (store_uri, database_name, collection_name, reset_before_inserting) {
            (Some(store_uri), Some(database_name), Some(collection_name), Some(reset))
                if problems.is_empty() =>
            {
                Ok(Self {
                    store_uri,
                    database_name,
                    collection_name,
                    reset_before_inserting: reset,
                    record_count,
                    seed: args.common.seed,
                    dry_run: args.common.dry_run,
                })
            }
            _ => Err(ConfigError { problems }),
        }
    }

    /// `database.collection`, as used in log lines.
    pub fn target(&self) -> String {
        format!("{}.{}", self.database_name, self.collection_name)
    }
}

fn required(value: &Option<String>, name: &str, problems: &mut Vec<String>) -> Option<String> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Some(v.to_string()),
        Some(_) => {
            problems.push(format!("\"{name}\" is not allowed to be empty"));
            None
        }
        None => {
            problems.push(format!("\"{name}\" is required"));
            None
        }
    }
}

/// Check that `uri` is a MongoDB connection string the driver accepts.
///
/// Parsing is purely syntactic: no DNS lookup or network call is made, so
/// `mongodb+srv://` hosts are not resolved here.
pub fn validate_store_uri(uri: &str) -> Result<(), String> {
    let (scheme, _) = uri
        .split_once("://")
        .ok_or_else(|| "must be a valid uri".to_string())?;

    if !matches!(scheme, "mongodb" | "mongodb+srv") {
        return Err(format!(
            "must use the mongodb:// or mongodb+srv:// scheme, got {scheme}://"
        ));
    }

    ConnectionString::parse(uri)
        .map(|_| ())
        .map_err(|e| format!("must be a valid connection string: {e}"))
}
