//! Error types for client configuration.
//!
//! This module contains the errors surfaced while building a
//! [`RailwayConfig`](crate::RailwayConfig), before any network activity.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use railway_api::{ApiToken, ConfigError};
//!
//! let result = ApiToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration values. Every variant is raised before the
/// client issues any request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API token cannot be empty.
    #[error("API token cannot be empty. Please provide a valid Railway API token.")]
    EmptyToken,

    /// The token environment variable is absent or empty.
    #[error("Missing '{var}' environment variable. Set it to a Railway API token.")]
    MissingToken {
        /// The name of the environment variable that was consulted.
        var: &'static str,
    },

    /// Endpoint URL is invalid.
    #[error("Invalid endpoint URL '{url}'. Expected an absolute URL with an http or https scheme.")]
    InvalidEndpointUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
