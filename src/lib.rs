//! # Railway API Rust Client
//!
//! A thin, typed client for the Railway GraphQL API, covering project,
//! service, environment, and variable management.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`RailwayConfig`] and [`RailwayConfigBuilder`]
//! - Validated newtypes for the API token and endpoint URL
//! - [`RailwayClient`] with one method per API operation
//! - A small GraphQL layer ([`GraphqlClient`]) implementing the shared
//!   request/response protocol every operation follows
//!
//! Every operation is a single HTTP POST carrying a fixed GraphQL document
//! plus variables. The HTTP status code is never branched on — GraphQL
//! servers return errors with a 200 status, so the body shape is the sole
//! source of truth. There is no retry, pagination beyond the first page of
//! edges, caching, or client-side state.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use railway_api::{CreateProjectInput, CreateServiceInput, RailwayClient, RailwayConfig, ServiceSource};
//!
//! // Token from RAILWAY_TOKEN; fails before any network call when absent.
//! let config = RailwayConfig::from_env()?;
//! let client = RailwayClient::new(&config);
//!
//! let project_id = client.create_project(&CreateProjectInput::new("My-Project")).await?;
//!
//! let service_id = client
//!     .create_service(&CreateServiceInput {
//!         project_id: project_id.clone(),
//!         name: "PG".to_string(),
//!         branch: None,
//!         source: Some(ServiceSource {
//!             image: Some("postgis/postgis:11-3.3".to_string()),
//!             repo: None,
//!         }),
//!     })
//!     .await?;
//!
//! let environment_id = client.project_default_environment_id(&project_id).await?;
//! ```
//!
//! ## Error Handling
//!
//! Failures before any network activity are [`ConfigError`]; request
//! failures are [`GraphqlError`]:
//!
//! - [`GraphqlError::Api`] — the server returned a non-empty `errors` array,
//!   propagated verbatim
//! - [`GraphqlError::UnexpectedResponse`] — the body matched neither the
//!   success shape nor the error shape
//! - [`GraphqlError::Transport`] — the underlying HTTP request failed
//!
//! Nothing is retried or downgraded.
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: newtypes validate on construction
//! - **Thread-safe**: all client types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio async runtime
//! - **Server-owned state**: the client caches nothing; callers thread ids
//!   between calls themselves

pub mod clients;
pub mod config;
pub mod error;
pub mod railway;

// Re-export public types at crate root for convenience
pub use config::{ApiToken, EndpointUrl, RailwayConfig, RailwayConfigBuilder, TOKEN_ENV_VAR};
pub use error::ConfigError;

// Re-export client and transport types
pub use clients::{
    ApiError, Connection, Edge, GraphqlClient, GraphqlError, GraphqlResponse, HttpClient,
    HttpResponse, UnexpectedResponseError,
};

// Re-export the typed API surface
pub use railway::{
    ConnectServiceInput, CreateProjectInput, CreateServiceInput, Environment, Project,
    RailwayClient, ServiceSource, Variable, VariableScope, VariableUpsertInput,
};
