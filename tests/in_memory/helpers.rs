//! Shared test helpers for in-memory repository integration tests.

use mockable::DefaultClock;
use rstest::fixture;
use std::io;
use std::sync::Arc;
use talkcare::analysis::{
    adapters::memory::InMemoryAnalysisRepository,
    domain::{AiAnalysis, AnalysisSequence, AnalysisType, UserId},
    ports::AnalysisRepository,
    services::AnalysisService,
};
use tokio::runtime::Runtime;

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides a fresh in-memory repository for each test.
#[fixture]
pub fn repo() -> Arc<InMemoryAnalysisRepository> {
    Arc::new(InMemoryAnalysisRepository::new())
}

/// Provides a clock for record creation.
#[fixture]
pub fn clock() -> DefaultClock {
    DefaultClock
}

/// Builds a service sharing the given repository.
pub fn service(
    repo: &Arc<InMemoryAnalysisRepository>,
) -> AnalysisService<InMemoryAnalysisRepository, DefaultClock> {
    AnalysisService::new(Arc::clone(repo), Arc::new(DefaultClock))
}

/// Stores one record per `(user, type, sequence)` triple.
///
/// # Errors
///
/// Returns an error if any store operation fails.
pub fn seed_analyses(
    rt: &Runtime,
    repo: &Arc<InMemoryAnalysisRepository>,
    clock: &DefaultClock,
    triples: &[(i32, i32, i32)],
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    for &(user, kind, sequence) in triples {
        let record = AiAnalysis::new(
            UserId::new(user),
            AnalysisType::new(kind),
            AnalysisSequence::new(sequence),
            format!("analysis {sequence}"),
            clock,
        );
        rt.block_on(repo.store(&record))?;
    }
    Ok(())
}
