//! Error types for screening domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or parsing screening domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScreeningDomainError {
    /// The answer sheet contains no answers.
    #[error("answer sheet must contain at least one answer")]
    EmptyAnswerSheet,

    /// An encoded entry is not of the form `<question>: <flag>`.
    #[error("malformed answer entry at position {position}: '{entry}'")]
    MalformedEntry {
        /// 1-based position of the entry in the encoded payload.
        position: usize,
        /// The offending entry text.
        entry: String,
    },

    /// Question numbering is not consecutive from 1.
    #[error("answer entry numbered {found} is out of order; expected {expected}")]
    OutOfOrderEntry {
        /// The question number required at this position.
        expected: usize,
        /// The question number found.
        found: usize,
    },

    /// An answer flag is neither `0` nor `1`.
    #[error("invalid answer flag '{value}' for question {question}")]
    InvalidAnswerFlag {
        /// The question the flag belongs to.
        question: usize,
        /// The offending flag text.
        value: String,
    },
}
