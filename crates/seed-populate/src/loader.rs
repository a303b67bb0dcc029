//! Reset-then-insert seed loader.

use crate::error::LoadError;
use crate::store::{InsertBatch, SeedSession, SeedStore};
use recipe_generator::{GeneratorError, RecipeGenerator, SyntheticRecord};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Where a run is in the seed protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Connecting,
    Clearing,
    Inserting,
    Reporting,
    Closed,
}

/// Outcome of one seed run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// `database.collection` that was seeded.
    pub target: String,
    /// Documents removed by the reset step, `None` when no reset happened.
    pub deleted: Option<u64>,
    /// Records submitted in the bulk insert.
    pub submitted: u64,
    /// Records actually persisted.
    pub inserted: u64,
    /// Records the store rejected.
    pub failed: u64,
    /// Time spent generating records.
    pub generation_duration: Duration,
    /// Time spent in the bulk insert.
    pub insert_duration: Duration,
    /// Total time from connect to close.
    pub total_duration: Duration,
}

impl LoadReport {
    /// Calculate inserted records per second.
    pub fn records_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.inserted as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Whether the store accepted every submitted record.
    pub fn is_complete(&self) -> bool {
        self.inserted == self.submitted
    }
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} recipes inserted into {}", self.inserted, self.target)?;
        if self.failed > 0 {
            write!(f, " ({} rejected)", self.failed)?;
        }
        Ok(())
    }
}

/// Records to load: either supplied by the caller or drawn after the reset.
enum RecordSource<'a> {
    Provided(&'a [SyntheticRecord]),
    Generated {
        generator: &'a mut RecipeGenerator,
        count: u64,
    },
}

/// Runs the seed protocol against a `SeedStore`.
///
/// The session is closed exactly once on every path once it has been
/// acquired, whether the run succeeds or fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedLoader {
    reset_before_inserting: bool,
}

impl SeedLoader {
    pub fn new(reset_before_inserting: bool) -> Self {
        Self {
            reset_before_inserting,
        }
    }

    /// Load already generated records.
    pub async fn load<S: SeedStore>(
        &self,
        store: &S,
        records: &[SyntheticRecord],
    ) -> Result<LoadReport, LoadError<S::Error>> {
        self.run(store, RecordSource::Provided(records)).await
    }

    /// Generate `count` records once the collection is ready and load them.
    ///
    /// An invalid count is rejected before any connection is attempted.
    pub async fn populate<S: SeedStore>(
        &self,
        store: &S,
        generator: &mut RecipeGenerator,
        count: u64,
    ) -> Result<LoadReport, LoadError<S::Error>> {
        if count == 0 {
            return Err(GeneratorError::InvalidCount(count).into());
        }
        self.run(store, RecordSource::Generated { generator, count })
            .await
    }

    async fn run<S: SeedStore>(
        &self,
        store: &S,
        source: RecordSource<'_>,
    ) -> Result<LoadReport, LoadError<S::Error>> {
        let start_time = Instant::now();
        let target = store.target();
        enter(LoadPhase::Idle, &target);

        enter(LoadPhase::Connecting, &target);
        let mut session = store
            .connect()
            .await
            .map_err(|source| LoadError::Connection {
                target: target.clone(),
                source,
            })?;
        info!("Session opened for {}", target);

        let outcome = self.run_session(&mut session, &target, source).await;

        enter(LoadPhase::Closed, &target);
        if let Err(e) = session.close().await {
            warn!("Failed to close session for {}: {}", target, e);
        }

        let mut report = outcome?;
        report.total_duration = start_time.elapsed();

        info!(
            "Seeding complete: {} recipes in {:?} ({:.2} docs/sec)",
            report.inserted,
            report.total_duration,
            report.records_per_second()
        );

        Ok(report)
    }

    async fn run_session<T: SeedSession>(
        &self,
        session: &mut T,
        target: &str,
        source: RecordSource<'_>,
    ) -> Result<LoadReport, LoadError<T::Error>> {
        let mut report = LoadReport {
            target: target.to_string(),
            ..LoadReport::default()
        };

        if self.reset_before_inserting {
            enter(LoadPhase::Clearing, target);
            let deleted =
                session
                    .clear_collection()
                    .await
                    .map_err(|source| LoadError::Clear {
                        target: target.to_string(),
                        source,
                    })?;
            info!("Previous data deleted from {} ({} documents)", target, deleted);
            report.deleted = Some(deleted);
        }

        let generated;
        let records = match source {
            RecordSource::Provided(records) => records,
            RecordSource::Generated { generator, count } => {
                let gen_start = Instant::now();
                generated = generator.generate(count)?;
                report.generation_duration = gen_start.elapsed();
                debug!(
                    "Generated {} recipes in {:?}",
                    generated.len(),
                    report.generation_duration
                );
                generated.as_slice()
            }
        };

        enter(LoadPhase::Inserting, target);
        let batch = InsertBatch::from_records(records);
        report.submitted = batch.len() as u64;

        if batch.is_empty() {
            debug!("Nothing to insert into {}", target);
        } else {
            let insert_start = Instant::now();
            let outcome = session
                .bulk_insert(&batch)
                .await
                .map_err(|source| LoadError::Insert {
                    target: target.to_string(),
                    source,
                })?;
            report.insert_duration = insert_start.elapsed();
            report.inserted = outcome.inserted.min(report.submitted);
            report.failed = outcome.failed.min(report.submitted - report.inserted);
        }

        enter(LoadPhase::Reporting, target);
        if report.failed > 0 {
            warn!(
                "{} of {} recipes were rejected by {}",
                report.failed, report.submitted, target
            );
        }
        info!("{}", report);

        Ok(report)
    }
}

fn enter(phase: LoadPhase, target: &str) {
    debug!(?phase, "Seed load of {} entering phase", target);
}
