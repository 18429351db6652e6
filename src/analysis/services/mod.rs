//! Application services for analysis sequence tracking.
//!
//! Provides [`AnalysisService`], which coordinates sequence lookup and
//! analysis recording over an [`AnalysisRepository`].
//!
//! The read-then-increment in [`AnalysisService::record_analysis`] is not
//! atomic: two callers recording concurrently for the same `(user, type)`
//! pair can both read the same basis. Storage uniqueness on the
//! `(user, type, sequence)` key turns the loser into a
//! [`AnalysisRepositoryError::DuplicateSequence`] error rather than a
//! silent duplicate.
//!
//! [`AnalysisRepositoryError::DuplicateSequence`]: crate::analysis::ports::AnalysisRepositoryError::DuplicateSequence

use crate::analysis::{
    domain::{AiAnalysis, AnalysisSequence, AnalysisType, UserId},
    ports::{AnalysisRepository, AnalysisRepositoryResult},
};
use mockable::Clock;
use std::sync::Arc;

/// Sequence tracking and recording service for AI analyses.
///
/// All failures propagate unchanged from the repository; the service adds
/// no retry or recovery behaviour.
#[derive(Clone)]
pub struct AnalysisService<R, C>
where
    R: AnalysisRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> AnalysisService<R, C>
where
    R: AnalysisRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new analysis service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns the sequence number the next analysis should carry.
    ///
    /// Computed as the highest recorded sequence plus one; `1` for a user
    /// with no history of the given type.
    ///
    /// # Errors
    ///
    /// Propagates repository errors unchanged.
    pub async fn next_sequence(
        &self,
        user_id: UserId,
        analysis_type: AnalysisType,
    ) -> AnalysisRepositoryResult<AnalysisSequence> {
        let basis = self.repository.max_sequence(user_id, analysis_type).await?;
        Ok(basis.next())
    }

    /// Records a new analysis under the next free sequence number.
    ///
    /// Reads the current basis, stamps the record with the clock's time,
    /// and stores it. Returns the stored record.
    ///
    /// # Errors
    ///
    /// Propagates repository errors unchanged, including
    /// `DuplicateSequence` when a concurrent writer claimed the same
    /// sequence first.
    pub async fn record_analysis(
        &self,
        user_id: UserId,
        analysis_type: AnalysisType,
        analysis_result: impl Into<String> + Send,
    ) -> AnalysisRepositoryResult<AiAnalysis> {
        let sequence = self.next_sequence(user_id, analysis_type).await?;
        let analysis = AiAnalysis::new(
            user_id,
            analysis_type,
            sequence,
            analysis_result,
            &*self.clock,
        );
        self.repository.store(&analysis).await?;
        Ok(analysis)
    }

    /// Returns the user's analysis history for one type, oldest first.
    ///
    /// # Errors
    ///
    /// Propagates repository errors unchanged.
    pub async fn history(
        &self,
        user_id: UserId,
        analysis_type: AnalysisType,
    ) -> AnalysisRepositoryResult<Vec<AiAnalysis>> {
        self.repository
            .find_by_user_and_type(user_id, analysis_type)
            .await
    }
}
