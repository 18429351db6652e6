//! `PostgreSQL` adapters for analysis record persistence.

mod models;
mod repository;
mod schema;

pub use repository::{AnalysisPgPool, PostgresAnalysisRepository};
