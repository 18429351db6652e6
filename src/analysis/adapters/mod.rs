//! Persistence adapters for the analysis module.
//!
//! Concrete implementations of the [`AnalysisRepository`] port:
//!
//! - [`memory::InMemoryAnalysisRepository`]: thread-safe in-memory storage
//!   for tests
//! - [`postgres::PostgresAnalysisRepository`]: production persistence using
//!   Diesel ORM
//!
//! [`AnalysisRepository`]: crate::analysis::ports::AnalysisRepository

pub mod memory;
pub mod postgres;
