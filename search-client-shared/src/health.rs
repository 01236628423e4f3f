//! Cluster health models.

use serde::{Deserialize, Serialize};

/// The health monitor's snapshot of the cluster.
///
/// `healthy` is always meaningful; the remaining fields are filled in as the
/// monitor learns them and stay `None` before the first successful poll.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_version: Option<String>,
}

/// Decoded body of a `GET /_cluster/health` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterHealth {
    pub cluster_name: String,
    /// Cluster status color: `green`, `yellow` or `red`.
    pub status: String,
}

impl ClusterHealth {
    /// Green and yellow both count as healthy; a single-node cluster with
    /// unassigned replicas never reaches green.
    pub fn is_healthy(&self) -> bool {
        self.status == "green" || self.status == "yellow"
    }
}

/// Decoded body of the root info endpoint (`GET /`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootInfo {
    pub name: String,
    pub cluster_name: String,
    pub version: ServerVersion,
}

/// Version block of the root info response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerVersion {
    pub number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_health_thresholds() {
        let green = ClusterHealth {
            cluster_name: "docker-cluster".to_string(),
            status: "green".to_string(),
        };
        let yellow = ClusterHealth {
            cluster_name: "docker-cluster".to_string(),
            status: "yellow".to_string(),
        };
        let red = ClusterHealth {
            cluster_name: "docker-cluster".to_string(),
            status: "red".to_string(),
        };

        assert!(green.is_healthy());
        assert!(yellow.is_healthy());
        assert!(!red.is_healthy());
    }

    #[test]
    fn test_health_status_serializes_camel_case() {
        let status = HealthStatus {
            healthy: true,
            cluster_name: Some("docker-cluster".to_string()),
            server_name: None,
            server_version: Some("8.5.0".to_string()),
        };

        let json = serde_json::to_value(&status).unwrap();

        assert_eq!(json["healthy"], true);
        assert_eq!(json["clusterName"], "docker-cluster");
        assert_eq!(json["serverVersion"], "8.5.0");
        assert!(json.get("serverName").is_none());
    }

    #[test]
    fn test_default_status_is_unknown() {
        let status = HealthStatus::default();

        assert!(!status.healthy);
        assert!(status.cluster_name.is_none());
        assert!(status.server_name.is_none());
        assert!(status.server_version.is_none());
    }
}
