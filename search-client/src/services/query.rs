//! Query execution service.

use std::fmt;

use elasticsearch::{ClearScrollParts, Elasticsearch, ScrollParts, SearchParts};
use serde_json::{json, Value};
use tracing::debug;

use crate::errors::ClientError;
use crate::services::{decode_success, read_success};
use search_client_shared::{Aggregations, SearchResponse};

/// Sort direction for sorted matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

/// Executes search and aggregation documents against a named index and
/// decodes the typed results.
#[derive(Clone)]
pub struct QueryService {
    client: Elasticsearch,
}

impl QueryService {
    pub(crate) fn new(client: Elasticsearch) -> Self {
        Self { client }
    }

    /// Execute a search document against `index`.
    pub async fn match_query(
        &self,
        index: &str,
        request: &Value,
    ) -> Result<SearchResponse, ClientError> {
        debug!(index = %index, "executing match query");

        let response = self
            .client
            .search(SearchParts::Index(&[index]))
            .body(request)
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        decode_success(response).await
    }

    /// Execute a search document with server-side sorting and an explicit
    /// page size.
    pub async fn match_with_sort(
        &self,
        index: &str,
        order: SortOrder,
        sort_field: &str,
        size: i64,
        request: &Value,
    ) -> Result<SearchResponse, ClientError> {
        debug!(index = %index, sort_field = %sort_field, %order, "executing sorted match query");

        let sort = format!("{}:{}", sort_field, order);
        let response = self
            .client
            .search(SearchParts::Index(&[index]))
            .sort(&[sort.as_str()])
            .size(size)
            .body(request)
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        decode_success(response).await
    }

    /// Open a scrolled search over `index`.
    ///
    /// The returned page carries the server-issued cursor in `scroll_id`;
    /// pass it to [`QueryService::scroll`] to fetch subsequent pages.
    /// Iteration ends when a page comes back empty.
    pub async fn match_with_scroll(
        &self,
        index: &str,
        size: i64,
        keep_alive: &str,
        request: &Value,
    ) -> Result<SearchResponse, ClientError> {
        debug!(index = %index, size, keep_alive = %keep_alive, "opening scrolled search");

        let response = self
            .client
            .search(SearchParts::Index(&[index]))
            .scroll(keep_alive)
            .size(size)
            .body(request)
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        decode_success(response).await
    }

    /// Fetch the next page for a server-issued scroll cursor.
    pub async fn scroll(
        &self,
        scroll_id: &str,
        keep_alive: &str,
    ) -> Result<SearchResponse, ClientError> {
        debug!(keep_alive = %keep_alive, "continuing scrolled search");

        let response = self
            .client
            .scroll(ScrollParts::None)
            .body(json!({
                "scroll": keep_alive,
                "scroll_id": scroll_id
            }))
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        decode_success(response).await
    }

    /// Release a scroll cursor's server-side resources.
    pub async fn clear_scroll(&self, scroll_id: &str) -> Result<(), ClientError> {
        let response = self
            .client
            .clear_scroll(ClearScrollParts::None)
            .body(json!({ "scroll_id": [scroll_id] }))
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        read_success(response).await.map(|_| ())
    }

    /// Execute an aggregation document against `index` and decode the
    /// bucket results.
    pub async fn match_aggregate(
        &self,
        index: &str,
        request: &Value,
    ) -> Result<Aggregations, ClientError> {
        debug!(index = %index, "executing aggregation query");

        let response = self
            .client
            .search(SearchParts::Index(&[index]))
            .body(request)
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        decode_success(response).await
    }
}
