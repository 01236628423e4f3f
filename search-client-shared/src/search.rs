//! Search and aggregation response models.
//!
//! Bindings for the engine's search API response body. Hit and bucket
//! ordering is kept exactly as returned by the engine; the client never
//! re-sorts results.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Decoded body of a `POST /{index}/_search` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Server-side execution time in milliseconds.
    pub took: Option<i64>,
    pub timed_out: Option<bool>,
    /// Opaque cursor for scrolled searches. Present only when the search
    /// was opened with a scroll keep-alive.
    #[serde(rename = "_scroll_id")]
    pub scroll_id: Option<String>,
    pub hits: Hits,
}

impl SearchResponse {
    /// Number of hits in this page.
    pub fn len(&self) -> usize {
        self.hits.hits.len()
    }

    /// True when this page carries no hits, which terminates scroll iteration.
    pub fn is_empty(&self) -> bool {
        self.hits.hits.is_empty()
    }
}

/// The hit container of a search response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hits {
    pub total: Option<HitsTotal>,
    pub max_score: Option<f64>,
    pub hits: Vec<Hit>,
}

/// Total hit count with its accuracy relation (`eq` or `gte`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HitsTotal {
    pub value: i64,
    pub relation: String,
}

/// A single matched document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hit {
    #[serde(rename = "_index")]
    pub index: String,
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_score")]
    pub score: Option<f64>,
    /// The stored document body.
    #[serde(rename = "_source", default)]
    pub source: Value,
}

/// Decoded body of an aggregation search response.
///
/// The hit section is ignored; aggregation requests are issued with
/// `size: 0` so the engine returns buckets only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aggregations {
    #[serde(default)]
    pub aggregations: HashMap<String, TermsAggregate>,
}

impl Aggregations {
    /// Buckets for a named terms aggregation, if the engine returned it.
    pub fn buckets(&self, name: &str) -> Option<&[Bucket]> {
        self.aggregations.get(name).map(|a| a.buckets.as_slice())
    }
}

/// A terms aggregation: bucketed counts per distinct field value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermsAggregate {
    #[serde(default)]
    pub doc_count_error_upper_bound: i64,
    #[serde(default)]
    pub sum_other_doc_count: i64,
    pub buckets: Vec<Bucket>,
}

/// One aggregation bucket: a distinct key and its document count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bucket {
    /// Bucket key; a string for keyword fields, a number for numeric fields.
    pub key: Value,
    pub doc_count: u64,
}
