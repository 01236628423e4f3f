//! Error types for client operations.

mod client_error;

pub use client_error::ClientError;
