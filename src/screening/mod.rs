//! Screening test result records for Talkcare.
//!
//! Models the data-transfer shape carrying a submitted dementia screening
//! test result across the API boundary, plus the codec for the encoded
//! per-question answer payload. These types move data between layers and
//! are not themselves persisted by this crate.

pub mod domain;

#[cfg(test)]
mod tests;
