//! Records returned by Railway API operations.
//!
//! All entities are server-owned; the client never caches them. Callers
//! thread returned ids into subsequent calls explicitly.

use serde::{Deserialize, Serialize};

/// A Railway project, as returned by the projects listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// The project id.
    pub id: String,
    /// The project name.
    pub name: String,
}

/// An environment nested under a project.
///
/// `created_at` is kept as the server's ISO-8601 string; the default
/// environment heuristic orders these strings lexicographically, which
/// matches chronological order for ISO-8601 values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    /// The environment id.
    pub id: String,
    /// The environment name.
    pub name: String,
    /// Creation timestamp as reported by the server.
    pub created_at: String,
}

/// A variable scoped to a (project, environment, service) triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    /// The variable name.
    pub name: String,
    /// The variable value.
    pub value: String,
}
