//! `PostgreSQL` repository implementation for analysis records.

use super::{
    models::{AiAnalysisRow, NewAiAnalysisRow},
    schema::ai_analyses,
};
use crate::analysis::{
    domain::{AiAnalysis, AnalysisSequence, AnalysisType, PersistedAnalysisData, UserId},
    ports::{AnalysisRepository, AnalysisRepositoryError, AnalysisRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by analysis adapters.
pub type AnalysisPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed analysis record repository.
///
/// Uses Diesel ORM with connection pooling via r2d2. All database
/// operations are offloaded to a blocking thread pool via
/// [`tokio::task::spawn_blocking`] to avoid blocking the async runtime.
#[derive(Debug, Clone)]
pub struct PostgresAnalysisRepository {
    pool: AnalysisPgPool,
}

impl PostgresAnalysisRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: AnalysisPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> AnalysisRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> AnalysisRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool
                .get()
                .map_err(|err| AnalysisRepositoryError::connection(err.to_string()))?;
            f(&mut connection)
        })
        .await
        .map_err(|err| AnalysisRepositoryError::connection(format!("task join error: {err}")))?
    }
}

#[async_trait]
impl AnalysisRepository for PostgresAnalysisRepository {
    async fn store(&self, analysis: &AiAnalysis) -> AnalysisRepositoryResult<()> {
        let user_id = analysis.user_id();
        let analysis_type = analysis.analysis_type();
        let sequence = analysis.analysis_sequence();
        let new_row = to_new_row(analysis);

        self.run_blocking(move |connection| {
            diesel::insert_into(ai_analyses::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if is_sequence_unique_violation(info.as_ref()) =>
                    {
                        AnalysisRepositoryError::DuplicateSequence {
                            user_id,
                            analysis_type,
                            sequence,
                        }
                    }
                    _ => AnalysisRepositoryError::database(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn max_sequence(
        &self,
        user_id: UserId,
        analysis_type: AnalysisType,
    ) -> AnalysisRepositoryResult<AnalysisSequence> {
        let user = user_id.into_inner();
        let kind = analysis_type.into_inner();

        self.run_blocking(move |connection| {
            let max_seq: Option<i32> = ai_analyses::table
                .filter(ai_analyses::user_id.eq(user))
                .filter(ai_analyses::analysis_type.eq(kind))
                .select(diesel::dsl::max(ai_analyses::analysis_sequence))
                .first(connection)
                .map_err(AnalysisRepositoryError::database)?;

            Ok(AnalysisSequence::new(max_seq.unwrap_or(0)))
        })
        .await
    }

    async fn find_by_user_and_type(
        &self,
        user_id: UserId,
        analysis_type: AnalysisType,
    ) -> AnalysisRepositoryResult<Vec<AiAnalysis>> {
        let user = user_id.into_inner();
        let kind = analysis_type.into_inner();

        self.run_blocking(move |connection| {
            let rows = ai_analyses::table
                .filter(ai_analyses::user_id.eq(user))
                .filter(ai_analyses::analysis_type.eq(kind))
                .order(ai_analyses::analysis_sequence.asc())
                .select(AiAnalysisRow::as_select())
                .load::<AiAnalysisRow>(connection)
                .map_err(AnalysisRepositoryError::database)?;

            Ok(rows.into_iter().map(row_to_analysis).collect())
        })
        .await
    }
}

fn to_new_row(analysis: &AiAnalysis) -> NewAiAnalysisRow {
    NewAiAnalysisRow {
        user_id: analysis.user_id().into_inner(),
        analysis_type: analysis.analysis_type().into_inner(),
        analysis_sequence: analysis.analysis_sequence().value(),
        analysis_result: analysis.analysis_result().to_owned(),
        created_at: analysis.created_at(),
    }
}

fn row_to_analysis(row: AiAnalysisRow) -> AiAnalysis {
    let AiAnalysisRow {
        user_id,
        analysis_type,
        analysis_sequence,
        analysis_result,
        created_at,
        ..
    } = row;

    AiAnalysis::from_persisted(PersistedAnalysisData {
        user_id: UserId::new(user_id),
        analysis_type: AnalysisType::new(analysis_type),
        analysis_sequence: AnalysisSequence::new(analysis_sequence),
        analysis_result,
        created_at,
    })
}

fn is_sequence_unique_violation(info: &dyn diesel::result::DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == "ai_analyses_user_type_sequence_key")
}
