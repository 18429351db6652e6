//! Domain model for AI analysis records.
//!
//! Models the analysis record aggregate and its identifier value types.
//! All infrastructure concerns are kept outside the domain boundary.

mod ids;
mod record;

pub use ids::{AnalysisSequence, AnalysisType, UserId};
pub use record::{AiAnalysis, PersistedAnalysisData};
