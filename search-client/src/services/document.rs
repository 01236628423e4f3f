//! Document write service.

use elasticsearch::{Elasticsearch, IndexParts, UpdateParts};
use serde_json::{json, Value};
use tracing::debug;

use crate::errors::ClientError;
use crate::services::decode_success;
use search_client_shared::CreateResult;

/// Creates and updates individual documents by index and identifier.
///
/// Writes through this service are *not* refreshed; they become visible to
/// search on the engine's own refresh cadence. Use
/// [`IndexService::create_document`](crate::services::IndexService::create_document)
/// when read-after-write visibility is required.
#[derive(Clone)]
pub struct DocumentService {
    client: Elasticsearch,
}

impl DocumentService {
    pub(crate) fn new(client: Elasticsearch) -> Self {
        Self { client }
    }

    /// Submit a new document; the engine assigns the identifier.
    ///
    /// Body content is validated by the engine, not the client. A response
    /// that cannot be parsed into a [`CreateResult`] is a decode error.
    pub async fn create(&self, index: &str, body: &Value) -> Result<CreateResult, ClientError> {
        debug!(index = %index, "creating document");

        let response = self
            .client
            .index(IndexParts::Index(index))
            .body(body)
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        decode_success(response).await
    }

    /// Apply a partial update to the document at `id`.
    ///
    /// The given body is wrapped as `{"doc": body}` per the engine's update
    /// API; only the supplied fields change.
    pub async fn update(
        &self,
        index: &str,
        id: &str,
        body: &Value,
    ) -> Result<CreateResult, ClientError> {
        debug!(index = %index, id = %id, "updating document");

        let response = self
            .client
            .update(UpdateParts::IndexId(index, id))
            .body(json!({ "doc": body }))
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        decode_success(response).await
    }
}
