//! Shared HTTP client for the external AI analysis service.

use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use thiserror::Error;
use tracing::debug;

/// Errors raised while constructing a configured AI service client.
#[derive(Debug, Error)]
pub enum AiClientError {
    /// The configured API key is not a valid header value.
    #[error("API key is not a valid header value")]
    InvalidApiKey(#[source] reqwest::header::InvalidHeaderValue),

    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Configuration for the AI service client.
///
/// Credentials are deferred: the default carries no API key, matching the
/// service's current deployment where authentication is not yet wired up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AiServiceConfig {
    api_key: Option<String>,
}

impl AiServiceConfig {
    /// Creates a configuration with no credentials.
    #[must_use]
    pub const fn new() -> Self {
        Self { api_key: None }
    }

    /// Sets the bearer API key presented to the AI service.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Returns the configured API key, if any.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

/// Shared HTTP client for calling the external AI analysis service.
///
/// Wraps one [`reqwest::Client`] with default settings: no custom
/// timeouts, no retry policy. The wrapped client is internally
/// reference-counted, so cloning this type shares the same instance and
/// connection pool across all consumers. Call-time failures are the
/// caller's responsibility.
#[derive(Debug, Clone)]
pub struct AiServiceClient {
    http: Client,
}

impl AiServiceClient {
    /// Creates a client with default configuration and no credentials.
    #[must_use]
    pub fn new() -> Self {
        debug!("constructing AI service client with default configuration");
        Self {
            http: Client::new(),
        }
    }

    /// Creates a client from a configuration.
    ///
    /// When an API key is configured it is attached as a default
    /// `Authorization: Bearer` header on every request.
    ///
    /// # Errors
    ///
    /// Returns [`AiClientError::InvalidApiKey`] when the key cannot be
    /// encoded as a header value, or [`AiClientError::Build`] when the
    /// underlying client cannot be constructed.
    pub fn with_config(config: &AiServiceConfig) -> Result<Self, AiClientError> {
        let Some(key) = config.api_key() else {
            return Ok(Self::new());
        };

        let mut bearer = HeaderValue::from_str(&format!("Bearer {key}"))
            .map_err(AiClientError::InvalidApiKey)?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer);

        debug!("constructing AI service client with bearer credentials");
        let http = Client::builder().default_headers(headers).build()?;
        Ok(Self { http })
    }

    /// Returns the shared HTTP client.
    #[must_use]
    pub const fn http(&self) -> &Client {
        &self.http
    }
}

impl Default for AiServiceClient {
    fn default() -> Self {
        Self::new()
    }
}
