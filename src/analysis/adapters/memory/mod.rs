//! In-memory adapters for analysis record persistence.

mod repository;

pub use repository::InMemoryAnalysisRepository;
