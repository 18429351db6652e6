//! Port contracts for analysis record persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by analysis
//! services.

pub mod repository;

pub use repository::{AnalysisRepository, AnalysisRepositoryError, AnalysisRepositoryResult};
