//! # Search Client Shared
//!
//! Wire models shared between the search engine client and its callers.
//! These types mirror the engine's REST response and request bodies; field
//! names that start with an underscore on the wire (`_index`, `_id`, ...)
//! are renamed via serde.

pub mod access;
pub mod document;
pub mod health;
pub mod search;

pub use access::{ApplicationPrivileges, IndexPrivileges, RoleSpec, UserSpec};
pub use document::{CreateResult, IndexCreateResult};
pub use health::{ClusterHealth, HealthStatus, RootInfo, ServerVersion};
pub use search::{Aggregations, Bucket, Hit, Hits, HitsTotal, SearchResponse, TermsAggregate};
