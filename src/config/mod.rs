//! Configuration types for the Railway API client.
//!
//! This module provides the core configuration types used to initialize the
//! client for API communication with Railway.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`RailwayConfig`]: The configuration struct holding endpoint, token, and team
//! - [`RailwayConfigBuilder`]: A builder for constructing [`RailwayConfig`] instances
//! - [`ApiToken`]: A validated API token newtype with masked debug output
//! - [`EndpointUrl`]: A validated GraphQL endpoint URL
//!
//! # Example
//!
//! ```rust
//! use railway_api::{ApiToken, RailwayConfig};
//!
//! let config = RailwayConfig::builder()
//!     .token(ApiToken::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.endpoint().as_ref(), "https://backboard.railway.app/graphql/v2");
//! ```

mod newtypes;

pub use newtypes::{ApiToken, EndpointUrl};

use crate::error::ConfigError;

/// The environment variable consulted by [`RailwayConfig::from_env`].
pub const TOKEN_ENV_VAR: &str = "RAILWAY_TOKEN";

/// Configuration for the Railway API client.
///
/// This struct holds everything a client instance needs: the GraphQL endpoint,
/// the bearer token, and an optional team id applied to project creation when
/// the per-call input does not carry one.
///
/// # Thread Safety
///
/// `RailwayConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks. It is immutable after construction; there
/// is no process-wide singleton.
///
/// # Example
///
/// ```rust
/// use railway_api::{ApiToken, EndpointUrl, RailwayConfig};
///
/// let config = RailwayConfig::builder()
///     .token(ApiToken::new("my-token").unwrap())
///     .endpoint(EndpointUrl::new("https://backboard.railway.app/graphql/v2").unwrap())
///     .team_id("team_123")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.team_id(), Some("team_123"));
/// ```
#[derive(Clone, Debug)]
pub struct RailwayConfig {
    endpoint: EndpointUrl,
    token: ApiToken,
    team_id: Option<String>,
}

impl RailwayConfig {
    /// Creates a new builder for constructing a `RailwayConfig`.
    #[must_use]
    pub fn builder() -> RailwayConfigBuilder {
        RailwayConfigBuilder::new()
    }

    /// Creates a configuration from the process environment.
    ///
    /// Reads the token from the `RAILWAY_TOKEN` environment variable and uses
    /// the Railway public endpoint. This is the boundary the exploratory
    /// scripts exercised: a missing token fails here, before any network
    /// activity.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingToken`] if the variable is absent or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let token = std::env::var(TOKEN_ENV_VAR)
            .ok()
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::MissingToken { var: TOKEN_ENV_VAR })?;
        Self::builder().token(ApiToken::new(token)?).build()
    }

    /// Returns the GraphQL endpoint URL.
    #[must_use]
    pub const fn endpoint(&self) -> &EndpointUrl {
        &self.endpoint
    }

    /// Returns the API token.
    #[must_use]
    pub const fn token(&self) -> &ApiToken {
        &self.token
    }

    /// Returns the team id, if configured.
    #[must_use]
    pub fn team_id(&self) -> Option<&str> {
        self.team_id.as_deref()
    }
}

// Verify RailwayConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RailwayConfig>();
};

/// Builder for constructing [`RailwayConfig`] instances.
///
/// The only required field is `token`. The endpoint defaults to the Railway
/// public endpoint and `team_id` defaults to unset.
///
/// # Example
///
/// ```rust
/// use railway_api::{ApiToken, RailwayConfig};
///
/// let config = RailwayConfig::builder()
///     .token(ApiToken::new("my-token").unwrap())
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct RailwayConfigBuilder {
    endpoint: Option<EndpointUrl>,
    token: Option<ApiToken>,
    team_id: Option<String>,
}

impl RailwayConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the GraphQL endpoint URL.
    #[must_use]
    pub fn endpoint(mut self, endpoint: EndpointUrl) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the API token (required).
    #[must_use]
    pub fn token(mut self, token: ApiToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Sets the team id used as a fallback for project creation.
    #[must_use]
    pub fn team_id(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }

    /// Builds the [`RailwayConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `token` is not set.
    pub fn build(self) -> Result<RailwayConfig, ConfigError> {
        let token = self
            .token
            .ok_or(ConfigError::MissingRequiredField { field: "token" })?;

        Ok(RailwayConfig {
            endpoint: self.endpoint.unwrap_or_else(EndpointUrl::railway_public),
            token,
            team_id: self.team_id,
        })
    }
}
