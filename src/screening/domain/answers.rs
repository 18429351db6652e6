//! Answer-sheet codec for screening test payloads.
//!
//! Screening clients submit per-question yes/no answers encoded as a
//! single string of the form `"1: 1, 2: 0, 3: 1"` — question numbers
//! starting at 1, a `1` flag for yes and `0` for no. This module provides
//! the explicit encode/decode pair for that format.

use super::ScreeningDomainError;
use serde::{Deserialize, Serialize};

/// A single yes/no answer to a screening question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    /// The respondent answered no, encoded as `0`.
    No,
    /// The respondent answered yes, encoded as `1`.
    Yes,
}

impl Answer {
    /// Returns the encoded flag character for this answer.
    #[must_use]
    pub const fn flag(self) -> char {
        match self {
            Self::No => '0',
            Self::Yes => '1',
        }
    }
}

/// Ordered yes/no answers of one screening test, numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSheet(Vec<Answer>);

impl AnswerSheet {
    /// Creates a sheet from ordered answers.
    ///
    /// # Errors
    ///
    /// Returns [`ScreeningDomainError::EmptyAnswerSheet`] when no answers
    /// are given.
    pub fn new(answers: Vec<Answer>) -> Result<Self, ScreeningDomainError> {
        if answers.is_empty() {
            return Err(ScreeningDomainError::EmptyAnswerSheet);
        }
        Ok(Self(answers))
    }

    /// Returns the answers in question order.
    #[must_use]
    pub fn answers(&self) -> &[Answer] {
        &self.0
    }

    /// Returns how many questions were answered yes.
    #[must_use]
    pub fn yes_count(&self) -> usize {
        self.0.iter().filter(|a| **a == Answer::Yes).count()
    }

    /// Encodes the sheet into the boundary payload format.
    ///
    /// Example: a yes/no/yes sheet encodes as `"1: 1, 2: 0, 3: 1"`.
    #[must_use]
    pub fn encode(&self) -> String {
        self.0
            .iter()
            .enumerate()
            .map(|(index, answer)| format!("{}: {}", index + 1, answer.flag()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Parses an encoded payload back into a sheet.
    ///
    /// Entries must be comma-separated `<question>: <flag>` pairs with
    /// question numbers consecutive from 1 and flags of `0` or `1`.
    /// Whitespace around entries and around the two parts is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ScreeningDomainError::EmptyAnswerSheet`] for a blank
    /// payload, [`ScreeningDomainError::MalformedEntry`] for an entry
    /// without the `:` separator or a non-numeric question,
    /// [`ScreeningDomainError::OutOfOrderEntry`] when numbering is not
    /// consecutive from 1, and [`ScreeningDomainError::InvalidAnswerFlag`]
    /// for a flag other than `0` or `1`.
    pub fn parse(payload: &str) -> Result<Self, ScreeningDomainError> {
        if payload.trim().is_empty() {
            return Err(ScreeningDomainError::EmptyAnswerSheet);
        }

        let mut answers = Vec::new();
        for (index, entry) in payload.split(',').enumerate() {
            let expected = index + 1;
            answers.push(parse_entry(entry, expected)?);
        }
        Self::new(answers)
    }
}

fn parse_entry(entry: &str, expected: usize) -> Result<Answer, ScreeningDomainError> {
    let malformed = || ScreeningDomainError::MalformedEntry {
        position: expected,
        entry: entry.trim().to_owned(),
    };

    let (question_text, flag_text) = entry.split_once(':').ok_or_else(malformed)?;
    let question: usize = question_text.trim().parse().map_err(|_| malformed())?;

    if question != expected {
        return Err(ScreeningDomainError::OutOfOrderEntry {
            expected,
            found: question,
        });
    }

    match flag_text.trim() {
        "0" => Ok(Answer::No),
        "1" => Ok(Answer::Yes),
        other => Err(ScreeningDomainError::InvalidAnswerFlag {
            question,
            value: other.to_owned(),
        }),
    }
}
