//! Security administration models.
//!
//! Request bodies for the engine's security endpoints
//! (`PUT /_security/role/{name}` and `PUT /_security/user/{name}`).
//! Empty collections are skipped on the wire so an upsert only states what
//! it grants.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A named role to upsert at the security endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleSpec {
    /// Cluster-level privileges, e.g. `monitor`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cluster: Vec<String>,
    /// Per-index privilege grants.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub indices: Vec<IndexPrivileges>,
    /// Application privilege grants.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub applications: Vec<ApplicationPrivileges>,
    /// Identities this role may impersonate.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub run_as: Vec<String>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
}

/// Privileges granted on a set of index name patterns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexPrivileges {
    pub names: Vec<String>,
    pub privileges: Vec<String>,
}

/// Privileges granted within an application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationPrivileges {
    pub application: String,
    pub privileges: Vec<String>,
    pub resources: Vec<String>,
}

/// A named user to upsert at the security endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserSpec {
    pub password: String,
    /// Names of the roles this user is a member of.
    pub roles: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
}
