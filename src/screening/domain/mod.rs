//! Domain types for screening test results.

mod answers;
mod error;
mod test_result;

pub use answers::{Answer, AnswerSheet};
pub use error::ScreeningDomainError;
pub use test_result::TestResult;
