//! Cluster health monitor.

use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use elasticsearch::cluster::ClusterHealthParts;
use elasticsearch::Elasticsearch;
use tokio::time::{sleep, Instant};
use tracing::{debug, info};

use crate::errors::ClientError;
use crate::services::decode_success;
use search_client_shared::{ClusterHealth, HealthStatus, RootInfo};

/// Polls cluster health until healthy or a deadline, retaining the last
/// observed snapshot.
///
/// The monitor starts in an *unknown* state (an all-default snapshot) and
/// transitions to last-known on every poll. It is the only component that
/// deliberately swallows transient errors: a failed poll counts as "not yet
/// healthy" and the loop carries on until its deadline.
pub struct HealthMonitor {
    client: Elasticsearch,
    snapshot: RwLock<HealthStatus>,
}

impl HealthMonitor {
    pub(crate) fn new(client: Elasticsearch) -> Self {
        Self {
            client,
            snapshot: RwLock::new(HealthStatus::default()),
        }
    }

    /// Poll cluster health at `interval` cadence until the cluster reports
    /// healthy (returns `true`) or `timeout` elapses (returns `false`).
    ///
    /// The loop blocks its caller for up to `timeout`; dropping the future
    /// cancels it early. Polls run at most `timeout / interval` times, give
    /// or take one.
    pub async fn check(&self, timeout: Duration, interval: Duration) -> bool {
        let deadline = Instant::now() + timeout;

        loop {
            if self.poll_once().await {
                return true;
            }

            if Instant::now() + interval >= deadline {
                info!(?timeout, "cluster did not become healthy before the deadline");
                return false;
            }

            sleep(interval).await;
        }
    }

    /// The most recently observed health snapshot. May be stale; before the
    /// first poll it is the unknown (all-default) state.
    pub fn info(&self) -> HealthStatus {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// One poll: query cluster health, fold the outcome into the snapshot
    /// and report whether the cluster is healthy right now.
    async fn poll_once(&self) -> bool {
        match self.cluster_health().await {
            Ok(health) => {
                let healthy = health.is_healthy();
                let mut status = HealthStatus {
                    healthy,
                    cluster_name: Some(health.cluster_name),
                    ..self.info()
                };

                if healthy {
                    // Fill in server identity once reachable; best effort.
                    if let Ok(server) = self.server_info().await {
                        status.server_name = Some(server.name);
                        status.server_version = Some(server.version.number);
                    }
                }

                self.store(status);
                healthy
            }
            Err(e) => {
                debug!(error = %e, "health poll failed, treating as unhealthy");
                let status = HealthStatus {
                    healthy: false,
                    ..self.info()
                };
                self.store(status);
                false
            }
        }
    }

    async fn cluster_health(&self) -> Result<ClusterHealth, ClientError> {
        let response = self
            .client
            .cluster()
            .health(ClusterHealthParts::None)
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        decode_success(response).await
    }

    async fn server_info(&self) -> Result<RootInfo, ClientError> {
        let response = self
            .client
            .info()
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        decode_success(response).await
    }

    fn store(&self, status: HealthStatus) {
        *self
            .snapshot
            .write()
            .unwrap_or_else(PoisonError::into_inner) = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::SearchClient;
    use crate::config::Config;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> SearchClient {
        SearchClient::new(&Config::new(server.uri(), "elastic", "secret")).unwrap()
    }

    fn healthy_body() -> serde_json::Value {
        json!({ "cluster_name": "docker-cluster", "status": "yellow" })
    }

    fn root_info_body() -> serde_json::Value {
        json!({
            "name": "node-1",
            "cluster_name": "docker-cluster",
            "version": { "number": "8.5.0" }
        })
    }

    #[tokio::test]
    async fn test_snapshot_starts_unknown() {
        let server = MockServer::start().await;
        let client = test_client(&server);

        let status = client.health().info();

        assert!(!status.healthy);
        assert!(status.cluster_name.is_none());
    }

    #[tokio::test]
    async fn test_check_returns_true_and_fills_snapshot() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/_cluster/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(healthy_body()))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(root_info_body()))
            .mount(&server)
            .await;

        let client = test_client(&server);

        let healthy = client
            .health()
            .check(Duration::from_secs(2), Duration::from_millis(50))
            .await;
        assert!(healthy);

        let status = client.health().info();
        assert!(status.healthy);
        assert_eq!(status.cluster_name.as_deref(), Some("docker-cluster"));
        assert_eq!(status.server_name.as_deref(), Some("node-1"));
        assert_eq!(status.server_version.as_deref(), Some("8.5.0"));
    }

    #[tokio::test]
    async fn test_check_deadline_with_failing_polls() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/_cluster/health"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .mount(&server)
            .await;

        let client = test_client(&server);

        let healthy = client
            .health()
            .check(Duration::from_millis(250), Duration::from_millis(50))
            .await;
        assert!(!healthy);

        let status = client.health().info();
        assert!(!status.healthy);

        // Bounded polling: no more than timeout / interval polls, give or
        // take one.
        let polls = server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .filter(|r| r.url.path() == "/_cluster/health")
            .count();
        assert!(polls >= 1);
        assert!(polls <= 6, "polled {} times", polls);
    }

    #[tokio::test]
    async fn test_poll_errors_do_not_abort_the_loop() {
        let server = MockServer::start().await;
        // First poll fails, second succeeds; the loop must survive the
        // failure and report healthy.
        Mock::given(method("GET"))
            .and(path("/_cluster/health"))
            .respond_with(ResponseTemplate::new(503).set_body_string("warming up"))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/_cluster/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(healthy_body()))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(root_info_body()))
            .mount(&server)
            .await;

        let client = test_client(&server);

        let healthy = client
            .health()
            .check(Duration::from_secs(2), Duration::from_millis(50))
            .await;
        assert!(healthy);
    }

    #[tokio::test]
    async fn test_red_cluster_is_unhealthy() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/_cluster/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "cluster_name": "docker-cluster",
                "status": "red"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);

        let healthy = client
            .health()
            .check(Duration::from_millis(200), Duration::from_millis(50))
            .await;
        assert!(!healthy);

        // The snapshot still learned the cluster name from the poll.
        let status = client.health().info();
        assert!(!status.healthy);
        assert_eq!(status.cluster_name.as_deref(), Some("docker-cluster"));
    }
}
