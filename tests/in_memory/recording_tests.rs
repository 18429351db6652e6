//! Recording flow tests for the analysis service over in-memory storage.

use crate::in_memory::helpers::{clock, repo, runtime, seed_analyses, service};
use mockable::DefaultClock;
use rstest::rstest;
use std::io;
use std::sync::Arc;
use talkcare::analysis::{
    adapters::memory::InMemoryAnalysisRepository,
    domain::{AiAnalysis, AnalysisSequence, AnalysisType, UserId},
    ports::{AnalysisRepository, AnalysisRepositoryError},
};
use tokio::runtime::Runtime;

/// Recording starts at sequence one and increments per `(user, type)` pair.
#[rstest]
fn recording_numbers_analyses_from_one(
    runtime: io::Result<Runtime>,
    repo: Arc<InMemoryAnalysisRepository>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let svc = service(&repo);
    let user = UserId::new(1);
    let kind = AnalysisType::new(2);

    let first = rt.block_on(svc.record_analysis(user, kind, "first pass"))?;
    let second = rt.block_on(svc.record_analysis(user, kind, "second pass"))?;
    let other_type = rt.block_on(svc.record_analysis(user, AnalysisType::new(3), "survey"))?;

    assert_eq!(first.analysis_sequence(), AnalysisSequence::new(1));
    assert_eq!(second.analysis_sequence(), AnalysisSequence::new(2));
    assert_eq!(other_type.analysis_sequence(), AnalysisSequence::new(1));
    Ok(())
}

/// Recording picks up after existing history, including gaps.
#[rstest]
fn recording_continues_after_sparse_history(
    runtime: io::Result<Runtime>,
    repo: Arc<InMemoryAnalysisRepository>,
    clock: DefaultClock,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    seed_analyses(&rt, &repo, &clock, &[(1, 2, 1), (1, 2, 2), (1, 2, 5)])?;
    let svc = service(&repo);

    let recorded = rt.block_on(svc.record_analysis(UserId::new(1), AnalysisType::new(2), "next"))?;

    assert_eq!(recorded.analysis_sequence(), AnalysisSequence::new(6));
    Ok(())
}

/// A sequence claimed by a concurrent writer surfaces as a typed error.
#[rstest]
fn claimed_sequence_is_rejected(
    runtime: io::Result<Runtime>,
    repo: Arc<InMemoryAnalysisRepository>,
    clock: DefaultClock,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    seed_analyses(&rt, &repo, &clock, &[(1, 2, 1)])?;

    let duplicate = AiAnalysis::new(
        UserId::new(1),
        AnalysisType::new(2),
        AnalysisSequence::new(1),
        "late writer",
        &clock,
    );
    let result = rt.block_on(repo.store(&duplicate));

    assert!(matches!(
        result,
        Err(AnalysisRepositoryError::DuplicateSequence { .. })
    ));
    Ok(())
}

/// History reflects what recording stored, oldest first.
#[rstest]
fn history_reflects_recorded_analyses(
    runtime: io::Result<Runtime>,
    repo: Arc<InMemoryAnalysisRepository>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let svc = service(&repo);
    let user = UserId::new(1);
    let kind = AnalysisType::new(2);

    rt.block_on(svc.record_analysis(user, kind, "first pass"))?;
    rt.block_on(svc.record_analysis(user, kind, "second pass"))?;

    let history = rt.block_on(svc.history(user, kind))?;

    let results: Vec<&str> = history.iter().map(AiAnalysis::analysis_result).collect();
    assert_eq!(results, vec!["first pass", "second pass"]);
    Ok(())
}
