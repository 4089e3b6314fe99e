//! OpenSearch client implementation.
//!
//! This module provides the concrete implementation of `SearchIndexProvider`
//! using the OpenSearch Rust client.

use async_trait::async_trait;
use opensearch::{
    cluster::ClusterHealthParts,
    http::request::JsonBody,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::{IndicesCreateParts, IndicesExistsParts},
    BulkParts, DeleteParts, IndexParts, OpenSearch, SearchParts,
};
use serde_json::{json, Map, Value};
use tracing::{debug, error, info, instrument};

use crate::config::IndexConfig;
use crate::errors::SearchIndexError;
use crate::interfaces::SearchIndexProvider;
use crate::opensearch::index_config::get_index_settings;
use crate::opensearch::queries::{build_search_query, bulk_failures, parse_search_response};
use model_index_shared::{Document, SearchQuery, SearchResponse};

/// OpenSearch client implementation.
///
/// # Example
///
/// ```ignore
/// use model_index_repository::{IndexConfig, OpenSearchClient, SearchIndexProvider};
///
/// let config = IndexConfig::from_env()?;
/// let client = OpenSearchClient::new(&config).await?;
/// client.batch_insert(&documents).await?;
/// ```
pub struct OpenSearchClient {
    client: OpenSearch,
    index: String,
}

impl OpenSearchClient {
    /// Create a new OpenSearch client for the configured URL and index.
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchClient)` - A new client instance
    /// * `Err(SearchIndexError)` - If connection setup fails
    pub async fn new(config: &IndexConfig) -> Result<Self, SearchIndexError> {
        let parsed_url = config
            .parsed_url()
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let transport = TransportBuilder::new(conn_pool)
            .disable_proxy()
            .build()
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);

        info!(
            url = %config.url,
            index = %config.index,
            "Created OpenSearch client"
        );

        Ok(Self {
            client,
            index: config.index.clone(),
        })
    }

    /// Name of the index this client writes to.
    pub fn index(&self) -> &str {
        &self.index
    }

    /// Build the NDJSON body of a bulk index request.
    fn bulk_body(&self, documents: &[Document]) -> Vec<JsonBody<Value>> {
        let mut body: Vec<JsonBody<Value>> = Vec::with_capacity(documents.len() * 2);
        for document in documents {
            body.push(json!({"index": {"_index": self.index, "_id": document.doc_id}}).into());
            body.push(document.to_source().into());
        }
        body
    }
}

#[async_trait]
impl SearchIndexProvider for OpenSearchClient {
    #[instrument(skip(self, documents), fields(count = documents.len()))]
    async fn batch_insert(&self, documents: &[Document]) -> Result<(), SearchIndexError> {
        let response = self
            .client
            .bulk(BulkParts::Index(&self.index))
            .body(self.bulk_body(documents))
            .send()
            .await?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Bulk request failed");
            return Err(SearchIndexError::bulk_operation(format!(
                "Bulk request failed with status {}: {}",
                status, error_body
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SearchIndexError::parse(e.to_string()))?;

        let failures = bulk_failures(&body);
        if !failures.is_empty() {
            error!(failed = failures.len(), "Bulk request had item failures");
            return Err(SearchIndexError::bulk_operation(format!(
                "{} of {} documents failed: {}",
                failures.len(),
                documents.len(),
                failures.join("; ")
            )));
        }

        debug!(count = documents.len(), "Documents indexed");
        Ok(())
    }

    async fn add_document(&self, document: &Document) -> Result<(), SearchIndexError> {
        let response = self
            .client
            .index(IndexParts::IndexId(&self.index, &document.doc_id))
            .body(document.to_source())
            .send()
            .await?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Index request failed");
            return Err(SearchIndexError::index(format!(
                "Index failed with status {}: {}",
                status, error_body
            )));
        }

        debug!(doc_id = %document.doc_id, "Document indexed");
        Ok(())
    }

    async fn delete_document(&self, doc_id: &str) -> Result<(), SearchIndexError> {
        let response = self
            .client
            .delete(DeleteParts::IndexId(&self.index, doc_id))
            .send()
            .await?;

        let status = response.status_code();

        // 404 is acceptable - document may not exist
        if !status.is_success() && status.as_u16() != 404 {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Delete request failed");
            return Err(SearchIndexError::delete(format!(
                "Delete failed with status {}: {}",
                status, error_body
            )));
        }

        debug!(doc_id = %doc_id, "Document deleted");
        Ok(())
    }

    #[instrument(skip(self, query), fields(query = %query.query))]
    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, SearchIndexError> {
        let response = self
            .client
            .search(SearchParts::Index(&[self.index.as_str()]))
            .body(build_search_query(query))
            .send()
            .await?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Search request failed");
            return Err(SearchIndexError::query(format!(
                "Search failed with status {}: {}",
                status, error_body
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SearchIndexError::parse(e.to_string()))?;

        parse_search_response(&body)
    }

    async fn ensure_index_exists(
        &self,
        properties: &Map<String, Value>,
    ) -> Result<(), SearchIndexError> {
        let exists = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[self.index.as_str()]))
            .send()
            .await?;

        if exists.status_code().is_success() {
            debug!(index = %self.index, "Index already exists");
            return Ok(());
        }

        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(&self.index))
            .body(get_index_settings(properties))
            .send()
            .await?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Index creation failed");
            return Err(SearchIndexError::index_creation(format!(
                "Index creation failed with status {}: {}",
                status, error_body
            )));
        }

        info!(index = %self.index, "Created search index");
        Ok(())
    }

    async fn health_check(&self) -> Result<bool, SearchIndexError> {
        let response = self
            .client
            .cluster()
            .health(ClusterHealthParts::None)
            .send()
            .await?;

        if !response.status_code().is_success() {
            return Ok(false);
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SearchIndexError::parse(e.to_string()))?;

        let status = body.get("status").and_then(Value::as_str).unwrap_or("red");
        debug!(status = %status, "Cluster health");
        Ok(status != "red")
    }
}
