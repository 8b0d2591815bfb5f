//! Typed inputs for Railway API operations.
//!
//! Inputs serialize to the camelCase shapes the API expects. Optional fields
//! are omitted from the wire entirely when unset, matching what the platform
//! receives from clients that drop undefined values during serialization.

use serde::Serialize;

/// Input for [`RailwayClient::create_project`](crate::RailwayClient::create_project).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectInput {
    /// The project name.
    pub name: String,
    /// The team to create the project under. When unset, the configured
    /// team id (if any) is used instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
}

impl CreateProjectInput {
    /// Creates an input with just a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team_id: None,
        }
    }
}

/// Source for a service: a Docker image or a GitHub repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServiceSource {
    /// Docker image reference (e.g. `postgis/postgis:11-3.3`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// GitHub repository in `owner/name` form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
}

/// Input for [`RailwayClient::create_service`](crate::RailwayClient::create_service).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceInput {
    /// The project to create the service in.
    pub project_id: String,
    /// The service name.
    pub name: String,
    /// Branch to deploy from. Transmitted as given; known to be ignored
    /// upstream for at least one source combination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// Deployment source for the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ServiceSource>,
}

impl CreateServiceInput {
    /// Creates an input for an empty service with no source.
    #[must_use]
    pub fn new(project_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            name: name.into(),
            branch: None,
            source: None,
        }
    }
}

/// Input for [`RailwayClient::connect_service`](crate::RailwayClient::connect_service).
///
/// The service id travels as a separate GraphQL variable rather than inside
/// the connect input, so it is skipped during serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectServiceInput {
    /// The service to connect.
    #[serde(skip)]
    pub service_id: String,
    /// Branch to deploy from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// Docker image reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// GitHub repository in `owner/name` form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
}

impl ConnectServiceInput {
    /// Creates an input for the given service with no connection details.
    #[must_use]
    pub fn new(service_id: impl Into<String>) -> Self {
        Self {
            service_id: service_id.into(),
            branch: None,
            image: None,
            repo: None,
        }
    }
}

/// Input for [`RailwayClient::upsert_variable`](crate::RailwayClient::upsert_variable).
///
/// Upserts are idempotent by (name, scope) per upstream semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableUpsertInput {
    /// The project scope.
    pub project_id: String,
    /// The environment scope.
    pub environment_id: String,
    /// The service scope.
    pub service_id: String,
    /// The variable name.
    pub name: String,
    /// The variable value.
    pub value: String,
}

/// The (project, environment, service) triple a variable listing is scoped to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableScope {
    /// The project scope.
    pub project_id: String,
    /// The environment scope.
    pub environment_id: String,
    /// The service scope.
    pub service_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_project_input_omits_unset_team() {
        let input = CreateProjectInput::new("My-Project");
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value, json!({"name": "My-Project"}));
    }

    #[test]
    fn test_create_project_input_serializes_team_id_camel_case() {
        let input = CreateProjectInput {
            name: "My-Project".to_string(),
            team_id: Some("team_1".to_string()),
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value, json!({"name": "My-Project", "teamId": "team_1"}));
    }

    #[test]
    fn test_create_service_input_with_image_source() {
        let input = CreateServiceInput {
            project_id: "proj_1".to_string(),
            name: "PG".to_string(),
            branch: None,
            source: Some(ServiceSource {
                image: Some("postgis/postgis:11-3.3".to_string()),
                repo: None,
            }),
        };

        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(
            value,
            json!({
                "projectId": "proj_1",
                "name": "PG",
                "source": {"image": "postgis/postgis:11-3.3"}
            })
        );
    }

    #[test]
    fn test_connect_service_input_skips_service_id() {
        let input = ConnectServiceInput {
            service_id: "svc_1".to_string(),
            branch: Some("main".to_string()),
            image: None,
            repo: Some("wertlex/railway-playground-node".to_string()),
        };

        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(
            value,
            json!({"branch": "main", "repo": "wertlex/railway-playground-node"})
        );
    }

    #[test]
    fn test_variable_upsert_input_is_camel_case() {
        let input = VariableUpsertInput {
            project_id: "proj_1".to_string(),
            environment_id: "env_1".to_string(),
            service_id: "svc_1".to_string(),
            name: "DATABASE_URL".to_string(),
            value: "postgres://localhost".to_string(),
        };

        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(
            value,
            json!({
                "projectId": "proj_1",
                "environmentId": "env_1",
                "serviceId": "svc_1",
                "name": "DATABASE_URL",
                "value": "postgres://localhost"
            })
        );
    }
}
