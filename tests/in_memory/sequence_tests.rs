//! Sequence basis lookup tests for [`InMemoryAnalysisRepository`].
//!
//! Exercises the max-sequence aggregate across users and analysis types.

use crate::in_memory::helpers::{clock, repo, runtime, seed_analyses};
use mockable::DefaultClock;
use rstest::rstest;
use std::io;
use std::sync::Arc;
use talkcare::analysis::{
    adapters::memory::InMemoryAnalysisRepository,
    domain::{AnalysisSequence, AnalysisType, UserId},
    ports::AnalysisRepository,
};
use tokio::runtime::Runtime;

/// With no matching records, the lookup returns exactly zero.
#[rstest]
fn lookup_defaults_to_zero_on_empty_store(
    runtime: io::Result<Runtime>,
    repo: Arc<InMemoryAnalysisRepository>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;

    let basis = rt.block_on(repo.max_sequence(UserId::new(1), AnalysisType::new(2)))?;

    assert_eq!(basis, AnalysisSequence::ZERO);
    Ok(())
}

/// Only records matching both key fields influence the maximum.
#[rstest]
fn lookup_scopes_to_user_and_type(
    runtime: io::Result<Runtime>,
    repo: Arc<InMemoryAnalysisRepository>,
    clock: DefaultClock,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    seed_analyses(
        &rt,
        &repo,
        &clock,
        &[(1, 2, 1), (1, 2, 2), (1, 2, 5), (1, 3, 9)],
    )?;

    let matching = rt.block_on(repo.max_sequence(UserId::new(1), AnalysisType::new(2)))?;
    assert_eq!(matching, AnalysisSequence::new(5));

    let no_history = rt.block_on(repo.max_sequence(UserId::new(1), AnalysisType::new(4)))?;
    assert_eq!(no_history, AnalysisSequence::ZERO);

    Ok(())
}

/// Reading twice without intervening writes yields identical results.
#[rstest]
fn lookup_has_no_side_effects(
    runtime: io::Result<Runtime>,
    repo: Arc<InMemoryAnalysisRepository>,
    clock: DefaultClock,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    seed_analyses(&rt, &repo, &clock, &[(1, 2, 3)])?;

    let first = rt.block_on(repo.max_sequence(UserId::new(1), AnalysisType::new(2)))?;
    let second = rt.block_on(repo.max_sequence(UserId::new(1), AnalysisType::new(2)))?;

    assert_eq!(first, second);
    Ok(())
}
