//! HTTP client plumbing for the external AI analysis service.
//!
//! Components that call the AI service receive an [`AiServiceClient`]
//! explicitly (constructor parameter) rather than resolving it from global
//! state. One client is constructed at the composition root; clones share
//! the same underlying connection pool, so the process holds a single
//! shared instance.

mod client;

pub use client::{AiClientError, AiServiceClient, AiServiceConfig};
