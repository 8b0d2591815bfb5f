//! Error types for the request path.
//!
//! This module contains the error taxonomy for everything that can go wrong
//! after configuration: the server reporting GraphQL errors, the response
//! matching neither the success nor the error shape, and transport failures.
//!
//! # Error Handling
//!
//! - [`ApiError`]: the server returned a non-empty `errors` array
//! - [`UnexpectedResponseError`]: the response shape matched neither pattern
//! - [`GraphqlError`]: unified error type for all request failures
//!
//! Nothing is retried and no error is downgraded; every failure aborts the
//! current operation and is the caller's responsibility to handle.
//!
//! # Example
//!
//! ```rust,ignore
//! use railway_api::GraphqlError;
//!
//! match client.list_projects().await {
//!     Ok(projects) => println!("{} projects", projects.len()),
//!     Err(GraphqlError::Api(e)) => println!("server errors: {}", e.message),
//!     Err(GraphqlError::UnexpectedResponse(e)) => println!("bad shape: {e}"),
//!     Err(GraphqlError::Transport(e)) => println!("network: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when the server responds with a non-empty `errors` array.
///
/// The raw error array is kept verbatim in `errors` for caller inspection;
/// `message` holds the same array pretty-serialized, which is also what the
/// `Display` implementation shows.
///
/// # Example
///
/// ```rust
/// use railway_api::ApiError;
/// use serde_json::json;
///
/// let error = ApiError::new(vec![json!({"message": "Not Authorized"})]);
/// assert!(error.to_string().contains("Not Authorized"));
/// assert_eq!(error.errors.len(), 1);
/// ```
#[derive(Debug, Error)]
#[error("GraphQL server returned errors: {message}")]
pub struct ApiError {
    /// The raw `errors` array from the response, unmodified.
    pub errors: Vec<serde_json::Value>,
    /// The error array serialized as pretty-printed JSON.
    pub message: String,
}

impl ApiError {
    /// Creates an `ApiError` from the raw `errors` array of a response.
    #[must_use]
    pub fn new(errors: Vec<serde_json::Value>) -> Self {
        let message = serde_json::to_string_pretty(&errors)
            .unwrap_or_else(|_| "<unserializable error payload>".to_string());
        Self { errors, message }
    }
}

/// Error returned when a response matches neither the expected success shape
/// nor the GraphQL error shape.
///
/// Carries the name of the operation (the `data` field that was expected) so
/// callers can tell which request produced the malformed response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unexpected response from server for `{operation}`: expected success data or a non-empty errors array")]
pub struct UnexpectedResponseError {
    /// The operation whose response could not be interpreted.
    pub operation: String,
}

/// Unified error type for all Railway API request failures.
///
/// # Example
///
/// ```rust,ignore
/// match client.create_project(&input).await {
///     Ok(id) => println!("created {id}"),
///     Err(GraphqlError::Api(e)) => eprintln!("{e}"),
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// The server returned a non-empty `errors` array.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The response shape matched neither success nor error pattern.
    #[error(transparent)]
    UnexpectedResponse(#[from] UnexpectedResponseError),

    /// Network or connection error from the underlying HTTP transport.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
}
