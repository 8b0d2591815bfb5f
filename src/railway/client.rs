//! The Railway API client.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::json;

use crate::clients::{Connection, GraphqlClient, GraphqlError, UnexpectedResponseError};
use crate::config::RailwayConfig;
use crate::railway::inputs::{
    ConnectServiceInput, CreateProjectInput, CreateServiceInput, VariableScope,
    VariableUpsertInput,
};
use crate::railway::resources::{Environment, Project, Variable};

const PROJECT_CREATE: &str = "\
mutation ProjectCreate($projectCreateInput: ProjectCreateInput!) {
  projectCreate(input: $projectCreateInput) {
    id
  }
}";

const PROJECTS: &str = "\
query Projects {
  projects {
    edges {
      node {
        id
        name
      }
    }
  }
}";

const SERVICE_CREATE: &str = "\
mutation ServiceCreate($serviceCreateInput: ServiceCreateInput!) {
  serviceCreate(input: $serviceCreateInput) {
    id
  }
}";

const SERVICE_CONNECT: &str = "\
mutation ServiceConnect($id: String!, $serviceConnectInput: ServiceConnectInput!) {
  serviceConnect(id: $id, input: $serviceConnectInput) {
    id
  }
}";

const PROJECT_ENVIRONMENTS: &str = "\
query ProjectEnvironments($id: String!) {
  project(id: $id) {
    environments {
      edges {
        node {
          id
          name
          createdAt
        }
      }
    }
  }
}";

const VARIABLE_UPSERT: &str = "\
mutation VariableUpsert($input: VariableUpsertInput!) {
  variableUpsert(input: $input)
}";

const VARIABLES: &str = "\
query Variables($projectId: String!, $environmentId: String!, $serviceId: String!) {
  variables(projectId: $projectId, environmentId: $environmentId, serviceId: $serviceId)
}";

/// Payload for operations that resolve to an object with an `id`.
#[derive(Debug, Deserialize)]
struct IdPayload {
    id: String,
}

/// Payload for the project environments query.
#[derive(Debug, Deserialize)]
struct EnvironmentsPayload {
    environments: Connection<Environment>,
}

/// Typed client for the Railway GraphQL API.
///
/// Each method builds a fixed GraphQL document, issues exactly one HTTP POST
/// with bearer authentication, and maps the response body to a typed result
/// or a [`GraphqlError`]. Every operation is a single atomic request: there
/// is no retry, pagination, caching, or client-side state beyond the
/// configuration, so callers needing cross-call ordering simply await
/// sequentially.
///
/// # Thread Safety
///
/// `RailwayClient` is `Send + Sync` and holds no mutable state; one instance
/// may be shared across async tasks, or multiple instances may run
/// concurrently against the same account.
///
/// # Example
///
/// ```rust,ignore
/// use railway_api::{CreateProjectInput, RailwayClient, RailwayConfig};
///
/// let config = RailwayConfig::from_env()?;
/// let client = RailwayClient::new(&config);
///
/// let project_id = client.create_project(&CreateProjectInput::new("My-Project")).await?;
/// let environment_id = client.project_default_environment_id(&project_id).await?;
/// ```
#[derive(Debug)]
pub struct RailwayClient {
    graphql: GraphqlClient,
    team_id: Option<String>,
}

// Verify RailwayClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RailwayClient>();
};

impl RailwayClient {
    /// Creates a new client for the given configuration.
    #[must_use]
    pub fn new(config: &RailwayConfig) -> Self {
        Self {
            graphql: GraphqlClient::new(config),
            team_id: config.team_id().map(ToString::to_string),
        }
    }

    /// Creates a project and returns its id.
    ///
    /// When the input carries no `team_id`, the configured team id (if any)
    /// is transmitted instead.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the response carries
    /// no `projectCreate.id` string.
    pub async fn create_project(&self, input: &CreateProjectInput) -> Result<String, GraphqlError> {
        let mut input = input.clone();
        if input.team_id.is_none() {
            input.team_id.clone_from(&self.team_id);
        }

        let response = self
            .graphql
            .execute(PROJECT_CREATE, json!({ "projectCreateInput": input }))
            .await?;
        let payload: IdPayload = response.require_field("projectCreate")?;
        Ok(payload.id)
    }

    /// Lists all projects visible to the token.
    ///
    /// Pulls every edge from a single response; this client never paginates
    /// past the first page. Server order is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the response carries
    /// no `projects.edges` list.
    pub async fn list_projects(&self) -> Result<Vec<Project>, GraphqlError> {
        let response = self.graphql.execute(PROJECTS, json!({})).await?;
        let connection: Connection<Project> = response.require_field("projects")?;
        Ok(connection.into_nodes())
    }

    /// Creates a service inside a project and returns its id.
    ///
    /// The `branch` field is transmitted as given, but has been observed
    /// upstream to have no effect for at least one source combination. That
    /// is an upstream quirk; this client does not attempt to infer or
    /// correct server behavior.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the response carries
    /// no `serviceCreate.id` string.
    pub async fn create_service(&self, input: &CreateServiceInput) -> Result<String, GraphqlError> {
        let response = self
            .graphql
            .execute(SERVICE_CREATE, json!({ "serviceCreateInput": input }))
            .await?;
        let payload: IdPayload = response.require_field("serviceCreate")?;
        Ok(payload.id)
    }

    /// Attaches a repository or image to a previously created empty service
    /// and returns the connected service id.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the response carries
    /// no `serviceConnect.id` string.
    pub async fn connect_service(&self, input: &ConnectServiceInput) -> Result<String, GraphqlError> {
        let variables = json!({
            "id": input.service_id,
            "serviceConnectInput": input
        });

        let response = self.graphql.execute(SERVICE_CONNECT, variables).await?;
        let payload: IdPayload = response.require_field("serviceConnect")?;
        Ok(payload.id)
    }

    /// Returns the id of a project's default environment.
    ///
    /// "Default" is a heuristic, not a server-asserted flag: the environment
    /// with the earliest `createdAt` among those returned for the project
    /// wins, regardless of response order. `createdAt` values are compared
    /// as ISO-8601 strings, which order chronologically.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::UnexpectedResponse`] when the project has no
    /// environments (an id is never silently invented), and the usual
    /// taxonomy for other failures.
    pub async fn project_default_environment_id(
        &self,
        project_id: &str,
    ) -> Result<String, GraphqlError> {
        let response = self
            .graphql
            .execute(PROJECT_ENVIRONMENTS, json!({ "id": project_id }))
            .await?;
        let payload: EnvironmentsPayload = response.require_field("project")?;

        payload
            .environments
            .into_nodes()
            .into_iter()
            .min_by(|a, b| a.created_at.cmp(&b.created_at))
            .map(|environment| environment.id)
            .ok_or_else(|| {
                UnexpectedResponseError {
                    operation: "project.environments".to_string(),
                }
                .into()
            })
    }

    /// Upserts a variable in a (project, environment, service) scope.
    ///
    /// The server payload carries no meaning beyond acknowledging success;
    /// upserts are idempotent by (name, scope) per upstream semantics.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the response does
    /// not acknowledge the upsert.
    pub async fn upsert_variable(&self, input: &VariableUpsertInput) -> Result<(), GraphqlError> {
        let response = self
            .graphql
            .execute(VARIABLE_UPSERT, json!({ "input": input }))
            .await?;
        response.confirm_field("variableUpsert")
    }

    /// Lists the variables in a (project, environment, service) scope.
    ///
    /// The server returns variables as a JSON object keyed by name; the
    /// result is flattened to a finite list in sorted-name order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the response carries
    /// no `variables` object.
    pub async fn list_variables(&self, scope: &VariableScope) -> Result<Vec<Variable>, GraphqlError> {
        let variables = json!({
            "projectId": scope.project_id,
            "environmentId": scope.environment_id,
            "serviceId": scope.service_id
        });

        let response = self.graphql.execute(VARIABLES, variables).await?;
        let map: BTreeMap<String, String> = response.require_field("variables")?;
        Ok(map
            .into_iter()
            .map(|(name, value)| Variable { name, value })
            .collect())
    }
}
