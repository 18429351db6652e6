//! Talkcare: dementia-care service building blocks.
//!
//! This crate provides the server-side components behind a dementia-care
//! platform: screening test result records exchanged with clients, AI
//! analysis history with per-user sequence tracking, and the shared HTTP
//! client used to reach the external AI analysis service.
//!
//! # Architecture
//!
//! Talkcare follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, APIs, etc.)
//!
//! # Modules
//!
//! - [`screening`]: Screening test result records and the answer-sheet codec
//! - [`analysis`]: AI analysis records and sequence tracking
//! - [`ai`]: HTTP client plumbing for the external AI analysis service

pub mod ai;
pub mod analysis;
pub mod screening;
