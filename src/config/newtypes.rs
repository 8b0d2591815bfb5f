//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Railway API token.
///
/// This newtype ensures the token is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the token value, displaying only
/// `ApiToken(*****)` instead of the actual token.
///
/// # Example
///
/// ```rust
/// use railway_api::ApiToken;
///
/// let token = ApiToken::new("my-token").unwrap();
/// assert_eq!(token.as_ref(), "my-token");
/// assert_eq!(format!("{:?}", token), "ApiToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a new validated API token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(*****)")
    }
}

/// A validated GraphQL endpoint URL.
///
/// This newtype ensures the endpoint is an absolute URL with an `http` or
/// `https` scheme. The full URL is used as-is; the client appends no paths.
///
/// # Example
///
/// ```rust
/// use railway_api::EndpointUrl;
///
/// let endpoint = EndpointUrl::new("https://backboard.railway.app/graphql/v2").unwrap();
/// assert_eq!(endpoint.as_ref(), "https://backboard.railway.app/graphql/v2");
///
/// // The Railway public endpoint is available as a default
/// let public = EndpointUrl::railway_public();
/// assert_eq!(public.as_ref(), EndpointUrl::RAILWAY_PUBLIC);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointUrl(String);

impl EndpointUrl {
    /// The Railway public GraphQL endpoint.
    pub const RAILWAY_PUBLIC: &'static str = "https://backboard.railway.app/graphql/v2";

    /// Creates a new validated endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpointUrl`] if the URL does not start
    /// with an `http://` or `https://` scheme followed by a host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"));
        match rest {
            Some(host) if !host.is_empty() => Ok(Self(url)),
            _ => Err(ConfigError::InvalidEndpointUrl { url }),
        }
    }

    /// Returns the Railway public GraphQL endpoint.
    #[must_use]
    pub fn railway_public() -> Self {
        Self(Self::RAILWAY_PUBLIC.to_string())
    }
}

impl AsRef<str> for EndpointUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EndpointUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_token_accepts_non_empty() {
        let token = ApiToken::new("secret-token").unwrap();
        assert_eq!(token.as_ref(), "secret-token");
    }

    #[test]
    fn test_api_token_rejects_empty() {
        assert!(matches!(ApiToken::new(""), Err(ConfigError::EmptyToken)));
    }

    #[test]
    fn test_api_token_debug_is_masked() {
        let token = ApiToken::new("secret-token").unwrap();
        let debug = format!("{token:?}");
        assert_eq!(debug, "ApiToken(*****)");
        assert!(!debug.contains("secret-token"));
    }

    #[test]
    fn test_endpoint_url_accepts_https() {
        let endpoint = EndpointUrl::new("https://backboard.railway.app/graphql/v2").unwrap();
        assert_eq!(endpoint.as_ref(), "https://backboard.railway.app/graphql/v2");
    }

    #[test]
    fn test_endpoint_url_accepts_http_for_local_mocks() {
        let endpoint = EndpointUrl::new("http://127.0.0.1:8080/graphql").unwrap();
        assert_eq!(endpoint.as_ref(), "http://127.0.0.1:8080/graphql");
    }

    #[test]
    fn test_endpoint_url_rejects_missing_scheme() {
        let result = EndpointUrl::new("backboard.railway.app/graphql/v2");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEndpointUrl { .. })
        ));
    }

    #[test]
    fn test_endpoint_url_rejects_scheme_without_host() {
        let result = EndpointUrl::new("https://");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEndpointUrl { .. })
        ));
    }

    #[test]
    fn test_railway_public_endpoint_is_valid() {
        let endpoint = EndpointUrl::new(EndpointUrl::RAILWAY_PUBLIC).unwrap();
        assert_eq!(endpoint, EndpointUrl::railway_public());
    }

    #[test]
    fn test_endpoint_url_display() {
        let endpoint = EndpointUrl::railway_public();
        assert_eq!(endpoint.to_string(), EndpointUrl::RAILWAY_PUBLIC);
    }
}
