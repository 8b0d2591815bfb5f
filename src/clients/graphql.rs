//! GraphQL request dispatch and response interpretation.
//!
//! This module provides the [`GraphqlClient`] for posting GraphQL documents
//! and the [`GraphqlResponse`] envelope with the shared extraction protocol
//! used identically by every operation:
//!
//! 1. If the expected field is present under `data` and has the expected
//!    type, it is the operation's result.
//! 2. Otherwise, if `errors` is a non-empty array, the call fails with
//!    [`ApiError`] carrying the raw error payload.
//! 3. Otherwise the call fails with [`UnexpectedResponseError`].

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::clients::errors::{ApiError, GraphqlError, UnexpectedResponseError};
use crate::clients::http_client::HttpClient;
use crate::config::RailwayConfig;

/// Low-level GraphQL client.
///
/// Wraps `{ query, variables }` as the JSON body of an HTTP POST to the
/// configured endpoint and returns the response envelope. Documents are
/// fixed strings per operation; only the injected variables vary at runtime.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct GraphqlClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client for the given configuration.
    #[must_use]
    pub fn new(config: &RailwayConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
        }
    }

    /// Returns the endpoint URL this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.http_client.endpoint()
    }

    /// Executes a GraphQL document against the configured endpoint.
    ///
    /// This sends exactly one POST request; there is no retry, pagination,
    /// or caching. GraphQL-level errors come back with a 200 status and are
    /// surfaced by the extraction methods on [`GraphqlResponse`], not here.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Transport`] for network-level failures.
    pub async fn execute(
        &self,
        document: &str,
        variables: serde_json::Value,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let body = serde_json::json!({
            "query": document,
            "variables": variables
        });

        tracing::debug!(endpoint = self.endpoint(), "dispatching GraphQL request");

        let response = self.http_client.post(&body).await?;
        Ok(GraphqlResponse {
            status: response.code,
            body: response.body,
        })
    }
}

/// A GraphQL response envelope (`{ data?, errors? }`).
///
/// Interpretation is driven entirely by the body shape; the HTTP status is
/// retained only for logging.
#[derive(Debug, Clone)]
pub struct GraphqlResponse {
    status: u16,
    body: serde_json::Value,
}

impl GraphqlResponse {
    /// Returns the HTTP status code of the response (informational only).
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Returns the raw `data` field, if present.
    #[must_use]
    pub fn data(&self) -> Option<&serde_json::Value> {
        self.body.get("data")
    }

    /// Extracts `data.<operation>` as a typed value.
    ///
    /// Implements the shared interpretation protocol: success field first,
    /// then the `errors` array, then the unexpected-shape failure.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Api`] when the field is unusable and `errors`
    /// is a non-empty array, [`GraphqlError::UnexpectedResponse`] otherwise.
    pub fn require_field<T: DeserializeOwned>(&self, operation: &str) -> Result<T, GraphqlError> {
        if let Some(field) = self.data().and_then(|data| data.get(operation)) {
            if !field.is_null() {
                if let Ok(value) = serde_json::from_value(field.clone()) {
                    return Ok(value);
                }
            }
        }
        Err(self.failure(operation))
    }

    /// Confirms `data.<operation>` is present and non-null, for operations
    /// whose payload carries no meaning beyond acknowledging success.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`require_field`](Self::require_field).
    pub fn confirm_field(&self, operation: &str) -> Result<(), GraphqlError> {
        match self.data().and_then(|data| data.get(operation)) {
            Some(value) if !value.is_null() => Ok(()),
            _ => Err(self.failure(operation)),
        }
    }

    /// Classifies a failed extraction per the response shape.
    fn failure(&self, operation: &str) -> GraphqlError {
        if let Some(errors) = self.body.get("errors").and_then(serde_json::Value::as_array) {
            if !errors.is_empty() {
                return ApiError::new(errors.clone()).into();
            }
        }
        UnexpectedResponseError {
            operation: operation.to_string(),
        }
        .into()
    }
}

/// A first-page GraphQL connection (`{ edges: [{ node: T }] }`).
///
/// Railway wraps lists in the cursor-pagination idiom; this client only ever
/// pulls all edges from a single response and never paginates further.
#[derive(Debug, Clone, Deserialize)]
pub struct Connection<T> {
    /// The edges of the connection, in server order.
    pub edges: Vec<Edge<T>>,
}

impl<T> Connection<T> {
    /// Unwraps the edges into their nodes, preserving order.
    #[must_use]
    pub fn into_nodes(self) -> Vec<T> {
        self.edges.into_iter().map(|edge| edge.node).collect()
    }
}

/// A single edge of a [`Connection`].
#[derive(Debug, Clone, Deserialize)]
pub struct Edge<T> {
    /// The wrapped node.
    pub node: T,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(body: serde_json::Value) -> GraphqlResponse {
        GraphqlResponse { status: 200, body }
    }

    #[test]
    fn test_require_field_returns_typed_success() {
        #[derive(Deserialize)]
        struct IdPayload {
            id: String,
        }

        let res = response(json!({"data": {"projectCreate": {"id": "proj_1"}}}));
        let payload: IdPayload = res.require_field("projectCreate").unwrap();
        assert_eq!(payload.id, "proj_1");
    }

    #[test]
    fn test_require_field_prefers_success_over_errors() {
        // Both shapes present: the success field wins, matching the protocol order.
        #[derive(Deserialize)]
        struct IdPayload {
            id: String,
        }

        let res = response(json!({
            "data": {"projectCreate": {"id": "proj_1"}},
            "errors": [{"message": "partial failure elsewhere"}]
        }));
        let payload: IdPayload = res.require_field("projectCreate").unwrap();
        assert_eq!(payload.id, "proj_1");
    }

    #[test]
    fn test_require_field_reports_api_error() {
        #[derive(Debug, Deserialize)]
        struct IdPayload {
            #[allow(dead_code)]
            id: String,
        }

        let res = response(json!({"errors": [{"message": "Not Authorized"}]}));
        let result: Result<IdPayload, _> = res.require_field("projectCreate");

        match result {
            Err(GraphqlError::Api(e)) => {
                assert_eq!(e.errors, vec![json!({"message": "Not Authorized"})]);
                assert!(e.message.contains("Not Authorized"));
            }
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[test]
    fn test_require_field_reports_unexpected_shape() {
        #[derive(Deserialize)]
        struct IdPayload {
            #[allow(dead_code)]
            id: String,
        }

        let res = response(json!({}));
        let result: Result<IdPayload, _> = res.require_field("projectCreate");

        assert!(matches!(
            result,
            Err(GraphqlError::UnexpectedResponse(ref e)) if e.operation == "projectCreate"
        ));
    }

    #[test]
    fn test_require_field_empty_errors_array_is_unexpected() {
        #[derive(Deserialize)]
        struct IdPayload {
            #[allow(dead_code)]
            id: String,
        }

        let res = response(json!({"errors": []}));
        let result: Result<IdPayload, _> = res.require_field("projectCreate");
        assert!(matches!(result, Err(GraphqlError::UnexpectedResponse(_))));
    }

    #[test]
    fn test_require_field_wrong_type_with_errors_is_api_error() {
        // data.projectCreate.id is not a string and errors is non-empty.
        let res = response(json!({
            "data": {"projectCreate": {"id": 42}},
            "errors": [{"message": "type mismatch"}]
        }));

        #[derive(Deserialize)]
        struct IdPayload {
            #[allow(dead_code)]
            id: String,
        }

        let result: Result<IdPayload, _> = res.require_field("projectCreate");
        assert!(matches!(result, Err(GraphqlError::Api(_))));
    }

    #[test]
    fn test_confirm_field_accepts_scalar_payload() {
        let res = response(json!({"data": {"variableUpsert": true}}));
        assert!(res.confirm_field("variableUpsert").is_ok());
    }

    #[test]
    fn test_confirm_field_rejects_null_payload() {
        let res = response(json!({"data": {"variableUpsert": null}}));
        assert!(matches!(
            res.confirm_field("variableUpsert"),
            Err(GraphqlError::UnexpectedResponse(_))
        ));
    }

    #[test]
    fn test_connection_into_nodes_preserves_order() {
        let connection: Connection<serde_json::Value> = serde_json::from_value(json!({
            "edges": [{"node": {"id": "1"}}, {"node": {"id": "2"}}]
        }))
        .unwrap();

        let nodes = connection.into_nodes();
        assert_eq!(nodes[0]["id"], "1");
        assert_eq!(nodes[1]["id"], "2");
    }

    #[test]
    fn test_status_is_informational() {
        let res = GraphqlResponse {
            status: 500,
            body: json!({"data": {"projectCreate": {"id": "proj_1"}}}),
        };

        #[derive(Deserialize)]
        struct IdPayload {
            id: String,
        }

        // Body shape wins even for a 5xx status.
        let payload: IdPayload = res.require_field("projectCreate").unwrap();
        assert_eq!(payload.id, "proj_1");
        assert_eq!(res.status(), 500);
    }
}
