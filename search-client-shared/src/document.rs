//! Result models for document and index lifecycle operations.

use serde::{Deserialize, Serialize};

/// Engine acknowledgement for a single document write.
///
/// Decoded from the body of `POST /{index}/_doc` and
/// `POST /{index}/_update/{id}` responses. Only populated when the engine
/// reports success; failed requests surface as errors instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateResult {
    /// Index the document was written to.
    #[serde(rename = "_index")]
    pub index: String,
    /// Identifier assigned to (or supplied for) the document.
    #[serde(rename = "_id")]
    pub id: String,
    /// Engine result status, e.g. `created` or `updated`.
    pub result: String,
}

/// Engine acknowledgement for index creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexCreateResult {
    /// Whether the cluster accepted the index creation.
    pub acknowledged: bool,
    /// Whether the required shard copies were started before the call returned.
    pub shards_acknowledged: bool,
    /// Name of the created index.
    pub index: String,
}
