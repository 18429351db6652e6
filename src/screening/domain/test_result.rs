//! Screening test result data-transfer record.

use serde::{Deserialize, Serialize};

/// A submitted screening test result.
///
/// Plain value structure exchanged at the API boundary; all fields are
/// public and independently settable, and no invariant ties them together.
/// Serializes to the boundary's camelCase JSON representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    /// Identifier of the person who took the test.
    pub user_id: i32,
    /// Identifier of the administered test instance or definition.
    pub test_id: i32,
    /// Free-form or encoded outcome payload.
    pub test_result: String,
}

impl TestResult {
    /// Test identifier for a caregiver-administered screening.
    pub const CAREGIVER_ADMINISTERED: i32 = 0;

    /// Test identifier for a self-report screening.
    pub const SELF_REPORT: i32 = 1;

    /// Creates a record from its three field values.
    #[must_use]
    pub fn new(user_id: i32, test_id: i32, test_result: impl Into<String>) -> Self {
        Self {
            user_id,
            test_id,
            test_result: test_result.into(),
        }
    }
}
