//! In-memory repository for analysis record tests.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::analysis::{
    domain::{AiAnalysis, AnalysisSequence, AnalysisType, UserId},
    ports::{AnalysisRepository, AnalysisRepositoryError, AnalysisRepositoryResult},
};

/// Thread-safe in-memory analysis repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAnalysisRepository {
    records: Arc<RwLock<Vec<AiAnalysis>>>,
}

impl InMemoryAnalysisRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_err(err: impl std::fmt::Display) -> AnalysisRepositoryError {
    AnalysisRepositoryError::database(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl AnalysisRepository for InMemoryAnalysisRepository {
    async fn store(&self, analysis: &AiAnalysis) -> AnalysisRepositoryResult<()> {
        let mut records = self.records.write().map_err(lock_err)?;

        let conflict = records.iter().any(|existing| {
            existing.user_id() == analysis.user_id()
                && existing.analysis_type() == analysis.analysis_type()
                && existing.analysis_sequence() == analysis.analysis_sequence()
        });
        if conflict {
            return Err(AnalysisRepositoryError::DuplicateSequence {
                user_id: analysis.user_id(),
                analysis_type: analysis.analysis_type(),
                sequence: analysis.analysis_sequence(),
            });
        }

        records.push(analysis.clone());
        Ok(())
    }

    async fn max_sequence(
        &self,
        user_id: UserId,
        analysis_type: AnalysisType,
    ) -> AnalysisRepositoryResult<AnalysisSequence> {
        let records = self.records.read().map_err(lock_err)?;

        let max = records
            .iter()
            .filter(|r| r.user_id() == user_id && r.analysis_type() == analysis_type)
            .map(AiAnalysis::analysis_sequence)
            .max()
            .unwrap_or(AnalysisSequence::ZERO);
        Ok(max)
    }

    async fn find_by_user_and_type(
        &self,
        user_id: UserId,
        analysis_type: AnalysisType,
    ) -> AnalysisRepositoryResult<Vec<AiAnalysis>> {
        let records = self.records.read().map_err(lock_err)?;

        let mut matching: Vec<AiAnalysis> = records
            .iter()
            .filter(|r| r.user_id() == user_id && r.analysis_type() == analysis_type)
            .cloned()
            .collect();
        matching.sort_by_key(AiAnalysis::analysis_sequence);
        Ok(matching)
    }
}
