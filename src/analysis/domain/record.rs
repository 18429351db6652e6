//! AI analysis record aggregate.

use super::{AnalysisSequence, AnalysisType, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// One stored AI analysis for a user.
///
/// Records are identified by the `(user, analysis type, sequence)` triple;
/// storage enforces uniqueness of that key. The result payload is free-form
/// text produced by the external AI service and is not interpreted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiAnalysis {
    user_id: UserId,
    analysis_type: AnalysisType,
    analysis_sequence: AnalysisSequence,
    analysis_result: String,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted analysis record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedAnalysisData {
    /// Persisted user identifier.
    pub user_id: UserId,
    /// Persisted analysis type code.
    pub analysis_type: AnalysisType,
    /// Persisted sequence number.
    pub analysis_sequence: AnalysisSequence,
    /// Persisted result payload.
    pub analysis_result: String,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl AiAnalysis {
    /// Creates a new analysis record stamped with the clock's current time.
    #[must_use]
    pub fn new(
        user_id: UserId,
        analysis_type: AnalysisType,
        analysis_sequence: AnalysisSequence,
        analysis_result: impl Into<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            user_id,
            analysis_type,
            analysis_sequence,
            analysis_result: analysis_result.into(),
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a record from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedAnalysisData) -> Self {
        Self {
            user_id: data.user_id,
            analysis_type: data.analysis_type,
            analysis_sequence: data.analysis_sequence,
            analysis_result: data.analysis_result,
            created_at: data.created_at,
        }
    }

    /// Returns the user the analysis belongs to.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the analysis type code.
    #[must_use]
    pub const fn analysis_type(&self) -> AnalysisType {
        self.analysis_type
    }

    /// Returns the sequence number within the user's history.
    #[must_use]
    pub const fn analysis_sequence(&self) -> AnalysisSequence {
        self.analysis_sequence
    }

    /// Returns the result payload.
    #[must_use]
    pub fn analysis_result(&self) -> &str {
        &self.analysis_result
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
