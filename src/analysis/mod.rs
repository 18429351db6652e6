//! AI analysis records and sequence tracking for Talkcare.
//!
//! Every AI analysis stored for a user carries a 1-based sequence number
//! scoped to the `(user, analysis type)` pair. The highest recorded sequence
//! is the basis callers use to number the next analysis. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
