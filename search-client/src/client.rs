//! The client facade.
//!
//! Composes every service behind one entry point. This is the only type
//! application code depends on; the underlying transport is built once and
//! shared read-only by all services.

use std::time::Duration;

use elasticsearch::Elasticsearch;
use tracing::info;

use crate::config::Config;
use crate::connection;
use crate::errors::ClientError;
use crate::services::{AccessService, DocumentService, HealthMonitor, IndexService, QueryService};

/// How long to wait for the cluster at startup.
const STARTUP_TIMEOUT: Duration = Duration::from_secs(120);
/// Poll cadence while waiting for the cluster at startup.
const STARTUP_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Typed facade over the search engine's REST API.
pub struct SearchClient {
    query: QueryService,
    document: DocumentService,
    index: IndexService,
    access: AccessService,
    health: HealthMonitor,
}

impl SearchClient {
    /// Build a client for the configured endpoint.
    ///
    /// The transport is constructed exactly once, with TLS validation when
    /// the config carries trust-anchor material, and never mutated after.
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        let transport = connection::create_transport(config)?;
        let client = Elasticsearch::new(transport);

        info!(
            service = %config.service,
            tls = config.ca_cert.is_some(),
            "created search engine client"
        );

        Ok(Self {
            query: QueryService::new(client.clone()),
            document: DocumentService::new(client.clone()),
            index: IndexService::new(client.clone()),
            access: AccessService::new(client.clone()),
            health: HealthMonitor::new(client),
        })
    }

    /// Build a client from environment configuration.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(&Config::from_env())
    }

    /// Block until the cluster reports healthy, with the standard startup
    /// deadline. Returns a connection error when the deadline passes.
    pub async fn wait_until_healthy(&self) -> Result<(), ClientError> {
        if self
            .health
            .check(STARTUP_TIMEOUT, STARTUP_POLL_INTERVAL)
            .await
        {
            Ok(())
        } else {
            Err(ClientError::connection(format!(
                "cluster not healthy after {:?}",
                STARTUP_TIMEOUT
            )))
        }
    }

    /// Query execution.
    pub fn query(&self) -> &QueryService {
        &self.query
    }

    /// Document writes without forced refresh.
    pub fn document(&self) -> &DocumentService {
        &self.document
    }

    /// Index lifecycle and refreshed document writes.
    pub fn index(&self) -> &IndexService {
        &self.index
    }

    /// Role and user provisioning.
    pub fn access(&self) -> &AccessService {
        &self.access
    }

    /// Cluster health polling.
    pub fn health(&self) -> &HealthMonitor {
        &self.health
    }
}
