//! Search index provider trait definition.
//!
//! This module defines the abstract interface for search index operations,
//! allowing for different backend implementations (OpenSearch, mock, etc.).

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::errors::SearchIndexError;
use model_index_shared::{Document, SearchQuery, SearchResponse};

/// Abstracts the underlying search index implementation.
///
/// This is the only network boundary of the model index. Implementations
/// are passed by reference into the model companion and the batch
/// synchronizer, which makes it easy to test against mock providers.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` to allow use across async tasks.
#[async_trait]
pub trait SearchIndexProvider: Send + Sync {
    /// Index a batch of documents in a single request.
    ///
    /// Documents are keyed by their identifier, so re-submitting a document
    /// replaces the stored copy instead of duplicating it.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If every document was indexed
    /// * `Err(SearchIndexError::BulkOperationError)` - If any document was rejected
    /// * `Err(SearchIndexError)` - If the request itself failed
    async fn batch_insert(&self, documents: &[Document]) -> Result<(), SearchIndexError>;

    /// Index a single document, replacing any document with the same identifier.
    async fn add_document(&self, document: &Document) -> Result<(), SearchIndexError>;

    /// Delete a document by identifier.
    ///
    /// Deleting a document that does not exist is considered successful.
    async fn delete_document(&self, doc_id: &str) -> Result<(), SearchIndexError>;

    /// Execute a query-string search.
    ///
    /// # Arguments
    ///
    /// * `query` - Query text (already scoped to a model) and paging options
    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, SearchIndexError>;

    /// Ensure the index exists, creating it with the given mapping properties.
    ///
    /// This should be called during application startup.
    async fn ensure_index_exists(
        &self,
        properties: &Map<String, Value>,
    ) -> Result<(), SearchIndexError>;

    /// Check if the search engine is healthy and reachable.
    async fn health_check(&self) -> Result<bool, SearchIndexError>;
}
