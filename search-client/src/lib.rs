//! # Search Client
//!
//! Typed client facade over an Elasticsearch-compatible search engine's
//! REST API. It exposes document CRUD, query execution (match, sorted,
//! scrolled, aggregated), index lifecycle, role/user provisioning and
//! cluster health polling behind narrow service interfaces, hiding the raw
//! HTTP/JSON plumbing.
//!
//! Request bodies are assembled from a closed set of typed shapes
//! ([`SearchRequest`], [`IndexSchema`]) so that malformed documents are a
//! compile-time problem, not a runtime one.

pub mod builder;
pub mod client;
pub mod config;
pub mod connection;
pub mod errors;
pub mod services;

pub use builder::{IndexSchema, SearchRequest};
pub use client::SearchClient;
pub use config::Config;
pub use errors::ClientError;
pub use services::{
    AccessService, DocumentService, HealthMonitor, IndexService, QueryService, SortOrder,
};
