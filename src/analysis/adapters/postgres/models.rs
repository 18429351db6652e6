//! Diesel row models for analysis record persistence.

use super::schema::ai_analyses;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for analysis records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = ai_analyses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AiAnalysisRow {
    /// Surrogate row identifier.
    pub id: i64,
    /// User the analysis belongs to.
    pub user_id: i32,
    /// Analysis type code.
    pub analysis_type: i32,
    /// Sequence within the `(user, type)` history.
    pub analysis_sequence: i32,
    /// Result payload.
    pub analysis_result: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for analysis records; the surrogate id is database-assigned.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = ai_analyses)]
pub struct NewAiAnalysisRow {
    /// User the analysis belongs to.
    pub user_id: i32,
    /// Analysis type code.
    pub analysis_type: i32,
    /// Sequence within the `(user, type)` history.
    pub analysis_sequence: i32,
    /// Result payload.
    pub analysis_result: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
