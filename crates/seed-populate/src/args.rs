//! Common CLI argument definitions shared by all seed targets.

use clap::Args;

/// Number of recipes inserted when nothing else is configured.
pub const DEFAULT_RECORD_COUNT: u64 = 300;

/// Common arguments shared by all seed targets.
///
/// Every field can also be supplied through the environment, which is how the
/// seeding tool is normally configured (optionally via a `.env` file).
#[derive(Args, Clone, Debug)]
pub struct CommonPopulateArgs {
    /// Number of recipes to generate and insert
    #[arg(long, env = "RECIPES_TO_INSERT", default_value_t = DEFAULT_RECORD_COUNT)]
    pub record_count: u64,

    /// Delete every existing document of the target collection before inserting
    /// (true/false, 1/0, yes/no, on/off)
    #[arg(
        long,
        env = "MONGODB_RESET_BEFORE_INSERTING",
        action = clap::ArgAction::Set,
        value_parser = parse_flag
    )]
    pub reset_before_inserting: Option<bool>,

    /// Random seed for deterministic generation (same seed = same recipes)
    #[arg(long, env = "RECIPES_SEED")]
    pub seed: Option<u64>,

    /// Dry-run mode: run the whole pipeline against an in-memory collection
    #[arg(long)]
    pub dry_run: bool,
}

/// Parse a boolean setting the way environment files usually spell it.
pub fn parse_flag(value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(format!("expected a boolean, got '{other}'")),
    }
}
