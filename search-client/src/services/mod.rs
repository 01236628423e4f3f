//! Service interfaces over the engine's REST surface.
//!
//! One narrow service per concern: queries, documents, index lifecycle,
//! security administration and health polling. All services share clones of
//! the same client over the pooled transport.

mod access;
mod document;
mod health;
mod index;
mod query;

pub use access::AccessService;
pub use document::DocumentService;
pub use health::HealthMonitor;
pub use index::IndexService;
pub use query::{QueryService, SortOrder};

use elasticsearch::http::response::Response;
use serde::de::DeserializeOwned;
use tracing::error;

use crate::errors::ClientError;

/// Read the body of a successful response, turning a non-success status
/// into a request-failed error carrying the engine's reason text.
pub(crate) async fn read_success(response: Response) -> Result<String, ClientError> {
    let status = response.status_code();

    if !status.is_success() {
        let reason = response.text().await.unwrap_or_default();
        error!(status = %status, reason = %reason, "engine returned non-success status");
        return Err(ClientError::request_failed(status, reason));
    }

    response
        .text()
        .await
        .map_err(|e| ClientError::decode(e.to_string()))
}

/// Decode a successful response body into the expected typed result.
pub(crate) async fn decode_success<T: DeserializeOwned>(
    response: Response,
) -> Result<T, ClientError> {
    let body = read_success(response).await?;
    serde_json::from_str(&body).map_err(|e| ClientError::decode(e.to_string()))
}
