//! Seed run orchestration.

use crate::config::SeedConfig;
use crate::logging::mask_connection_password;
use anyhow::Context;
use recipe_generator::RecipeGenerator;
use seed_populate::{LoadReport, MemoryStore, SeedLoader};
use seed_populate_mongodb::MongoDBStore;
use std::io::Write;
use tracing::info;

/// Build the generator for a run, seeded when a seed is configured.
pub fn build_generator(seed: Option<u64>) -> RecipeGenerator {
    match seed {
        Some(seed) => {
            info!("Generating recipes with fixed seed {}", seed);
            RecipeGenerator::new(seed)
        }
        None => RecipeGenerator::from_entropy(),
    }
}

/// Run one seed: connect, optionally reset, generate, bulk insert, close.
pub async fn run_seed(config: &SeedConfig) -> anyhow::Result<LoadReport> {
    let mut generator = build_generator(config.seed);
    let loader = SeedLoader::new(config.reset_before_inserting);

    if config.dry_run {
        info!(
            "[DRY-RUN] Would seed {} with {} recipes (reset={})",
            config.target(),
            config.record_count,
            config.reset_before_inserting
        );
        info!(
            "[DRY-RUN] Connection: {}",
            mask_connection_password(&config.store_uri)
        );

        let store = MemoryStore::new(&config.database_name, &config.collection_name);
        let report = loader
            .populate(&store, &mut generator, config.record_count)
            .await
            .context("Dry-run seed failed")?;
        info!(
            "[DRY-RUN] {} documents held in memory",
            store.document_count()
        );
        return Ok(report);
    }

    info!(
        "Seeding {} with {} recipes (reset={}) via {}",
        config.target(),
        config.record_count,
        config.reset_before_inserting,
        mask_connection_password(&config.store_uri)
    );

    let store = MongoDBStore::new(
        &config.store_uri,
        &config.database_name,
        &config.collection_name,
    );
    loader
        .populate(&store, &mut generator, config.record_count)
        .await
        .with_context(|| format!("Failed to seed {}", config.target()))
}

/// Write `count` generated recipes to `out` as JSON lines.
pub fn write_records<W: Write>(mut out: W, count: u64, seed: Option<u64>) -> anyhow::Result<()> {
    let mut generator = build_generator(seed);
    let records = generator
        .generate(count)
        .context("Failed to generate recipes")?;

    for record in &records {
        serde_json::to_writer(&mut out, record).context("Failed to serialize recipe")?;
        writeln!(out)?;
    }
    out.flush()?;

    Ok(())
}
