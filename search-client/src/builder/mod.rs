//! Request document builders.
//!
//! Pure construction of search and index-schema request bodies. Each shape
//! the client can send is a tagged variant with its own encoder, so a
//! request body can only ever have one of the known-good layouts. No I/O
//! happens here; builders are deterministic and safe to use concurrently.

mod query;
mod schema;

pub use query::SearchRequest;
pub use schema::IndexSchema;
