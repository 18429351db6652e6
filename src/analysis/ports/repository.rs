//! Repository port for analysis record persistence and sequence lookup.

use crate::analysis::domain::{AiAnalysis, AnalysisSequence, AnalysisType, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for analysis repository operations.
pub type AnalysisRepositoryResult<T> = Result<T, AnalysisRepositoryError>;

/// Analysis record persistence contract.
///
/// Implementations provide the actual storage mechanism (`PostgreSQL`,
/// in-memory for testing) while the domain logic remains storage-agnostic.
/// Sequence numbers must be unique within a `(user, analysis type)` pair.
#[async_trait]
pub trait AnalysisRepository: Send + Sync {
    /// Stores a new analysis record.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisRepositoryError::DuplicateSequence`] when a record
    /// with the same `(user, analysis type, sequence)` key already exists,
    /// or a persistence error when the store is unreachable.
    async fn store(&self, analysis: &AiAnalysis) -> AnalysisRepositoryResult<()>;

    /// Returns the highest recorded sequence for the given user and
    /// analysis type, or [`AnalysisSequence::ZERO`] when no records match.
    ///
    /// This is a point-in-time read with no side effects. Records matching
    /// only one of the two key fields never influence the result.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the store is unreachable; no retry
    /// or recovery is attempted at this layer.
    async fn max_sequence(
        &self,
        user_id: UserId,
        analysis_type: AnalysisType,
    ) -> AnalysisRepositoryResult<AnalysisSequence>;

    /// Returns all analysis records for the given user and analysis type,
    /// ordered by ascending sequence.
    ///
    /// Returns an empty vector when no records match.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the query fails.
    async fn find_by_user_and_type(
        &self,
        user_id: UserId,
        analysis_type: AnalysisType,
    ) -> AnalysisRepositoryResult<Vec<AiAnalysis>>;
}

/// Errors returned by analysis repository implementations.
#[derive(Debug, Clone, Error)]
pub enum AnalysisRepositoryError {
    /// A record with the same `(user, analysis type, sequence)` key exists.
    #[error(
        "duplicate analysis sequence {sequence} for user {user_id}, type {analysis_type}"
    )]
    DuplicateSequence {
        /// The user the conflicting record belongs to.
        user_id: UserId,
        /// The analysis type of the conflicting record.
        analysis_type: AnalysisType,
        /// The conflicting sequence number.
        sequence: AnalysisSequence,
    },

    /// Persistence-layer failure.
    #[error("database error: {0}")]
    Database(Arc<dyn std::error::Error + Send + Sync>),

    /// A connection could not be obtained or a task could not complete.
    #[error("connection error: {0}")]
    Connection(String),
}

impl AnalysisRepositoryError {
    /// Wraps a persistence error from any error type.
    #[must_use]
    pub fn database(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Database(Arc::new(err))
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }
}
