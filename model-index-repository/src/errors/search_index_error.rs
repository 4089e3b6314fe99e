//! Errors reported by search index providers.

use thiserror::Error;

/// Failure of a single provider call.
///
/// Values are `Clone` so that mock providers can hand out the same failure
/// repeatedly and retry loops can keep the last error around.
#[derive(Debug, Clone, Error)]
pub enum SearchIndexError {
    /// The request was rejected before reaching the engine (empty docid, blank query).
    #[error("Invalid request: {0}")]
    ValidationError(String),

    /// The engine could not be reached or the transport failed.
    #[error("Search engine unreachable: {0}")]
    ConnectionError(String),

    /// A single-document index request was refused.
    #[error("Indexing failed: {0}")]
    IndexError(String),

    #[error("Delete failed: {0}")]
    DeleteError(String),

    /// The bulk request failed, or some of its documents were rejected.
    #[error("Bulk indexing failed: {0}")]
    BulkOperationError(String),

    /// More documents were submitted in one batch than the client allows.
    #[error("Batch of {provided} documents exceeds the limit of {max}")]
    BatchSizeExceeded { provided: usize, max: usize },

    #[error("Search failed: {0}")]
    QueryError(String),

    #[error("Index creation failed: {0}")]
    IndexCreationError(String),

    /// The engine answered with a body that could not be decoded.
    #[error("Malformed engine response: {0}")]
    ParseError(String),
}

impl SearchIndexError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    pub fn index(msg: impl Into<String>) -> Self {
        Self::IndexError(msg.into())
    }

    pub fn delete(msg: impl Into<String>) -> Self {
        Self::DeleteError(msg.into())
    }

    pub fn bulk_operation(msg: impl Into<String>) -> Self {
        Self::BulkOperationError(msg.into())
    }

    pub fn batch_size_exceeded(provided: usize, max: usize) -> Self {
        Self::BatchSizeExceeded { provided, max }
    }

    pub fn query(msg: impl Into<String>) -> Self {
        Self::QueryError(msg.into())
    }

    pub fn index_creation(msg: impl Into<String>) -> Self {
        Self::IndexCreationError(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }
}

/// Transport-level failures of the OpenSearch client.
impl From<opensearch::Error> for SearchIndexError {
    fn from(err: opensearch::Error) -> Self {
        Self::ConnectionError(err.to_string())
    }
}
