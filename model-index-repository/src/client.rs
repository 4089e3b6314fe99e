//! Search index client implementation.
//!
//! This module provides a client that validates requests before passing them
//! to the underlying provider. It implements `SearchIndexProvider` itself, so
//! it can be used anywhere a provider is expected.

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::debug;

use crate::config::SearchIndexConfig;
use crate::errors::SearchIndexError;
use crate::interfaces::SearchIndexProvider;
use model_index_shared::{Document, SearchQuery, SearchResponse};

/// Validating front for a search index provider.
pub struct SearchIndexClient {
    provider: Box<dyn SearchIndexProvider>,
    config: SearchIndexConfig,
}

impl SearchIndexClient {
    /// Create a new SearchIndexClient with default configuration.
    pub fn new(provider: Box<dyn SearchIndexProvider>) -> Self {
        Self {
            provider,
            config: SearchIndexConfig::default(),
        }
    }

    /// Create a new SearchIndexClient with custom configuration.
    pub fn with_config(provider: Box<dyn SearchIndexProvider>, config: SearchIndexConfig) -> Self {
        Self { provider, config }
    }

    /// Check if batch size exceeds the configured limit.
    fn validate_batch_size(&self, size: usize) -> Result<(), SearchIndexError> {
        if let Some(max) = self.config.max_batch_size {
            if size > max {
                return Err(SearchIndexError::batch_size_exceeded(size, max));
            }
        }
        Ok(())
    }

    fn validate_document(document: &Document) -> Result<(), SearchIndexError> {
        if document.doc_id.is_empty() {
            return Err(SearchIndexError::validation("docid is required"));
        }
        Ok(())
    }
}

#[async_trait]
impl SearchIndexProvider for SearchIndexClient {
    /// Validate and forward a batch.
    ///
    /// An empty batch succeeds without contacting the provider. The batch
    /// size is limited by the configured max_batch_size (default: 1000).
    async fn batch_insert(&self, documents: &[Document]) -> Result<(), SearchIndexError> {
        if documents.is_empty() {
            debug!("Skipping empty batch");
            return Ok(());
        }

        self.validate_batch_size(documents.len())?;

        for document in documents {
            Self::validate_document(document)?;
        }

        self.provider.batch_insert(documents).await
    }

    async fn add_document(&self, document: &Document) -> Result<(), SearchIndexError> {
        Self::validate_document(document)?;
        self.provider.add_document(document).await
    }

    async fn delete_document(&self, doc_id: &str) -> Result<(), SearchIndexError> {
        if doc_id.is_empty() {
            return Err(SearchIndexError::validation("docid is required"));
        }
        self.provider.delete_document(doc_id).await
    }

    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, SearchIndexError> {
        if query.query.trim().is_empty() {
            return Err(SearchIndexError::validation("query is required"));
        }
        self.provider.search(query).await
    }

    async fn ensure_index_exists(
        &self,
        properties: &Map<String, Value>,
    ) -> Result<(), SearchIndexError> {
        self.provider.ensure_index_exists(properties).await
    }

    async fn health_check(&self) -> Result<bool, SearchIndexError> {
        self.provider.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model_index_shared::SearchOptions;
    use serde_json::json;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    /// Mock provider for testing
    struct MockProvider {
        batches: Arc<Mutex<Vec<Vec<Document>>>>,
        deleted: Arc<Mutex<Vec<String>>>,
        should_fail: bool,
    }

    impl MockProvider {
        fn new() -> Self {
            Self {
                batches: Arc::new(Mutex::new(Vec::new())),
                deleted: Arc::new(Mutex::new(Vec::new())),
                should_fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                should_fail: true,
                ..Self::new()
            }
        }
    }

    #[async_trait]
    impl SearchIndexProvider for MockProvider {
        async fn batch_insert(&self, documents: &[Document]) -> Result<(), SearchIndexError> {
            if self.should_fail {
                return Err(SearchIndexError::bulk_operation("Mock failure"));
            }
            self.batches.lock().await.push(documents.to_vec());
            Ok(())
        }

        async fn add_document(&self, document: &Document) -> Result<(), SearchIndexError> {
            if self.should_fail {
                return Err(SearchIndexError::index("Mock failure"));
            }
            self.batches.lock().await.push(vec![document.clone()]);
            Ok(())
        }

        async fn delete_document(&self, doc_id: &str) -> Result<(), SearchIndexError> {
            self.deleted.lock().await.push(doc_id.to_string());
            Ok(())
        }

        async fn search(&self, _query: &SearchQuery) -> Result<SearchResponse, SearchIndexError> {
            Ok(SearchResponse::empty())
        }

        async fn ensure_index_exists(
            &self,
            _properties: &Map<String, Value>,
        ) -> Result<(), SearchIndexError> {
            Ok(())
        }

        async fn health_check(&self) -> Result<bool, SearchIndexError> {
            Ok(!self.should_fail)
        }
    }

    fn create_test_document(id: usize) -> Document {
        let mut document = Document::new(format!("Widget:{}", id), "Widget");
        document.insert("name", json!(format!("Widget {}", id)));
        document
    }

    #[tokio::test]
    async fn test_batch_insert_empty() {
        let provider = MockProvider::new();
        let batches = provider.batches.clone();
        let client = SearchIndexClient::new(Box::new(provider));

        client.batch_insert(&[]).await.unwrap();

        assert!(batches.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_batch_insert_forwards_documents() {
        let provider = MockProvider::new();
        let batches = provider.batches.clone();
        let client = SearchIndexClient::new(Box::new(provider));

        let documents: Vec<Document> = (1..=3).map(create_test_document).collect();
        client.batch_insert(&documents).await.unwrap();

        let batches = batches.lock().await;
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0], documents);
    }

    #[tokio::test]
    async fn test_batch_insert_batch_size_exceeded() {
        let provider = MockProvider::new();
        let config = SearchIndexConfig::with_max_batch_size(5);
        let client = SearchIndexClient::with_config(Box::new(provider), config);

        let documents: Vec<Document> = (0..10).map(create_test_document).collect();

        let result = client.batch_insert(&documents).await;
        assert!(matches!(
            result.unwrap_err(),
            SearchIndexError::BatchSizeExceeded {
                provided: 10,
                max: 5
            }
        ));
    }

    #[tokio::test]
    async fn test_batch_size_unlimited() {
        let provider = MockProvider::new();
        let client =
            SearchIndexClient::with_config(Box::new(provider), SearchIndexConfig::unlimited());

        let documents: Vec<Document> = (0..5000).map(create_test_document).collect();

        assert!(client.batch_insert(&documents).await.is_ok());
    }

    #[tokio::test]
    async fn test_batch_insert_rejects_missing_docid() {
        let client = SearchIndexClient::new(Box::new(MockProvider::new()));

        let documents = vec![create_test_document(1), Document::new("", "Widget")];

        let result = client.batch_insert(&documents).await;
        assert!(matches!(
            result.unwrap_err(),
            SearchIndexError::ValidationError(_)
        ));
    }

    #[tokio::test]
    async fn test_provider_error_is_returned() {
        let client = SearchIndexClient::new(Box::new(MockProvider::failing()));

        let result = client.batch_insert(&[create_test_document(1)]).await;
        assert!(matches!(
            result.unwrap_err(),
            SearchIndexError::BulkOperationError(_)
        ));
    }

    #[tokio::test]
    async fn test_delete_validation() {
        let provider = MockProvider::new();
        let deleted = provider.deleted.clone();
        let client = SearchIndexClient::new(Box::new(provider));

        assert!(client.delete_document("").await.is_err());
        client.delete_document("Widget:1").await.unwrap();

        assert_eq!(*deleted.lock().await, vec!["Widget:1".to_string()]);
    }

    #[tokio::test]
    async fn test_search_validation() {
        let client = SearchIndexClient::new(Box::new(MockProvider::new()));

        let blank = SearchQuery::new("   ", SearchOptions::default());
        assert!(client.search(&blank).await.is_err());

        let scoped = SearchQuery::new("model:Widget", SearchOptions::default());
        assert_eq!(client.search(&scoped).await.unwrap().total, 0);
    }
}
