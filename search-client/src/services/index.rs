//! Index lifecycle service.

use elasticsearch::indices::{IndicesCreateParts, IndicesDeleteParts, IndicesExistsParts};
use elasticsearch::params::Refresh;
use elasticsearch::{Elasticsearch, IndexParts};
use serde_json::Value;
use tracing::{debug, info};

use crate::errors::ClientError;
use crate::services::{decode_success, read_success};
use search_client_shared::{CreateResult, IndexCreateResult};

/// Creates and deletes indices and their schemas, and indexes documents
/// with immediate visibility.
#[derive(Clone)]
pub struct IndexService {
    client: Elasticsearch,
}

impl IndexService {
    pub(crate) fn new(client: Elasticsearch) -> Self {
        Self { client }
    }

    /// Index a document with an immediate refresh: the document is visible
    /// to searches before this call returns. Slower than
    /// [`DocumentService::create`](crate::services::DocumentService::create),
    /// which leaves refresh to the engine.
    pub async fn create_document(
        &self,
        index: &str,
        body: &Value,
    ) -> Result<CreateResult, ClientError> {
        debug!(index = %index, "indexing document with refresh");

        let response = self
            .client
            .index(IndexParts::Index(index))
            .refresh(Refresh::True)
            .body(body)
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        decode_success(response).await
    }

    /// Provision an index from a settings/mappings document.
    pub async fn create(
        &self,
        index: &str,
        schema: &Value,
    ) -> Result<IndexCreateResult, ClientError> {
        info!(index = %index, "creating index");

        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(index))
            .body(schema)
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        decode_success(response).await
    }

    /// Re-provision an index from a settings/mappings document. The engine
    /// treats this as a fresh creation; the index must not already exist.
    pub async fn update(
        &self,
        index: &str,
        schema: &Value,
    ) -> Result<IndexCreateResult, ClientError> {
        self.create(index, schema).await
    }

    /// Whether the index exists.
    pub async fn exists(&self, index: &str) -> Result<bool, ClientError> {
        let response = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[index]))
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        let status = response.status_code();
        if status.is_success() {
            Ok(true)
        } else if status.as_u16() == 404 {
            Ok(false)
        } else {
            let reason = response.text().await.unwrap_or_default();
            Err(ClientError::request_failed(status, reason))
        }
    }

    /// Remove an index.
    ///
    /// Succeeds only when the engine's response decodes to an object whose
    /// `acknowledged` field is the boolean `true`; any other shape or value
    /// is an error.
    pub async fn delete(&self, index: &str) -> Result<bool, ClientError> {
        info!(index = %index, "deleting index");

        let response = self
            .client
            .indices()
            .delete(IndicesDeleteParts::Index(&[index]))
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        let body = read_success(response).await?;
        let decoded: Value =
            serde_json::from_str(&body).map_err(|e| ClientError::decode(e.to_string()))?;

        match decoded.get("acknowledged").and_then(Value::as_bool) {
            Some(true) => Ok(true),
            Some(false) => Err(ClientError::validation(format!(
                "delete of index {} was not acknowledged",
                index
            ))),
            None => Err(ClientError::validation(
                "delete response is missing the acknowledged field",
            )),
        }
    }
}
