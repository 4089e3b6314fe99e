//! # Model Index Repository
//!
//! This crate provides the interface to the remote search index and a
//! concrete implementation for OpenSearch. It includes the index
//! configuration, error types, and a client that validates batches before
//! handing them to the provider.

pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod opensearch;

pub use client::SearchIndexClient;
pub use config::{IndexConfig, SearchIndexConfig};
pub use errors::{ConfigError, SearchIndexError};
pub use interfaces::SearchIndexProvider;
pub use opensearch::OpenSearchClient;
