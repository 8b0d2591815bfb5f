//! HTTP transport for Railway API communication.
//!
//! This module provides the [`HttpClient`] type for issuing authenticated
//! POST requests to the configured GraphQL endpoint.

use std::collections::HashMap;

use crate::clients::errors::GraphqlError;
use crate::config::RailwayConfig;

/// Client version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Railway API.
///
/// The client handles:
/// - Bearer token authentication from the configured [`ApiToken`](crate::ApiToken)
/// - Default headers including User-Agent
/// - Body parsing with a JSON fallback for empty or malformed bodies
///
/// The HTTP status code is deliberately never branched on: GraphQL servers
/// commonly return errors with a 200 status, so the response body shape is
/// the sole source of truth. Status is still recorded on [`HttpResponse`]
/// for caller inspection and logging.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Full endpoint URL (e.g. `https://backboard.railway.app/graphql/v2`).
    endpoint: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &RailwayConfig) -> Self {
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("Railway API Library v{CLIENT_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.token().as_ref()),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: config.endpoint().as_ref().to_string(),
            default_headers,
        }
    }

    /// Returns the endpoint URL for this client.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends one POST request with a JSON body to the endpoint.
    ///
    /// There are no retries and no status-code branching; a response of any
    /// status is returned as [`HttpResponse`]. Empty or non-JSON bodies parse
    /// to an empty object, which the extraction layer then reports as an
    /// unexpected response shape.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Transport`] if the request cannot be sent or
    /// the connection fails (DNS, connection refused, timeout).
    pub async fn post(&self, body: &serde_json::Value) -> Result<HttpResponse, GraphqlError> {
        let mut req_builder = self.client.post(&self.endpoint).json(body);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let body_text = res.text().await.unwrap_or_default();
        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).unwrap_or_else(|_| serde_json::json!({}))
        };

        tracing::debug!(status = code, "received response from Railway API");

        Ok(HttpResponse { code, body })
    }
}

/// A parsed response from the Railway API.
///
/// The status code is informational only; interpretation of the response is
/// driven entirely by the body shape.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The response body parsed as JSON (empty object when unparseable).
    pub body: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiToken;

    fn create_test_config() -> RailwayConfig {
        RailwayConfig::builder()
            .token(ApiToken::new("test-token").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_uses_configured_endpoint() {
        let client = HttpClient::new(&create_test_config());
        assert_eq!(client.endpoint(), "https://backboard.railway.app/graphql/v2");
    }

    #[test]
    fn test_bearer_token_header_injection() {
        let client = HttpClient::new(&create_test_config());

        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Bearer test-token".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config());

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Railway API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&create_test_config());

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
