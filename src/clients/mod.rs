//! HTTP and GraphQL client types for Railway API communication.
//!
//! This module provides the transport layer under
//! [`RailwayClient`](crate::RailwayClient):
//!
//! - [`HttpClient`]: authenticated single-POST transport (status ignored)
//! - [`GraphqlClient`]: GraphQL document dispatch over the HTTP client
//! - [`GraphqlResponse`]: the response envelope with the shared extraction protocol
//! - [`GraphqlError`]: unified error type for request failures
//!
//! There is no retry, pagination, caching, or connection-management policy
//! beyond what reqwest provides by default.

mod errors;
pub mod graphql;
mod http_client;

pub use errors::{ApiError, GraphqlError, UnexpectedResponseError};
pub use graphql::{Connection, Edge, GraphqlClient, GraphqlResponse};
pub use http_client::{HttpClient, HttpResponse, CLIENT_VERSION};
