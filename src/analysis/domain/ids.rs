//! Identifier and value types for the analysis domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the person an analysis belongs to.
///
/// Carries the platform's numeric user identifier unchanged; no validation
/// is performed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    /// Creates a user identifier from a raw value.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the wrapped raw identifier.
    #[must_use]
    pub const fn into_inner(self) -> i32 {
        self.0
    }
}

impl From<i32> for UserId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Integer code identifying the category of AI analysis.
///
/// The set of codes is defined by callers; unknown codes are stored and
/// queried as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisType(i32);

impl AnalysisType {
    /// Creates an analysis type from a raw code.
    #[must_use]
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    /// Returns the wrapped raw code.
    #[must_use]
    pub const fn into_inner(self) -> i32 {
        self.0
    }
}

impl From<i32> for AnalysisType {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of an analysis in a user's history for one analysis type.
///
/// Stored sequences are 1-based. [`AnalysisSequence::ZERO`] is the basis
/// value returned when no history exists, so callers can always compute
/// the next sequence as `basis.next()` without an absent check.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AnalysisSequence(i32);

impl AnalysisSequence {
    /// The no-history basis value.
    pub const ZERO: Self = Self(0);

    /// Creates a sequence from a value.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the underlying sequence value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Returns the next sequence number.
    ///
    /// Uses saturating arithmetic, so at `i32::MAX` it will not overflow
    /// but return `i32::MAX`. This is practically unreachable in normal
    /// use (would require over two billion analyses for one user).
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl From<i32> for AnalysisSequence {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for AnalysisSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
