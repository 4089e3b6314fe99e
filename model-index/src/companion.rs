//! Per-model index companion.
//!
//! `ModelIndex<M>` owns everything the index needs to know about one model
//! type: its field declarations, its query scope and its retry policy. It is
//! built once through [`ModelIndex::configure`] and is read-only afterwards,
//! so a single value can be shared by the whole process.
//!
//! ```ignore
//! static PEOPLE: OnceLock<ModelIndex<Person>> = OnceLock::new();
//!
//! let index = ModelIndex::configure(|fields| {
//!     fields.field("name")?;
//!     fields.field_with_options("email", FieldOptions::default().field_type(FieldType::Keyword))?;
//!     Ok(())
//! })?;
//! let index = PEOPLE.get_or_init(|| index);
//!
//! index.sync_all(&source, &provider, DEFAULT_BATCH_SIZE).await?;
//! ```

use serde_json::{json, Map, Value};
use tracing::{debug, info};

use crate::errors::ModelIndexError;
use crate::mapper::DocumentMapper;
use crate::query::QueryAugmenter;
use crate::record::{Model, RecordSource};
use crate::registry::FieldRegistry;
use crate::retry::{run_with_retry, RetryPolicy};
use crate::sync::BatchSynchronizer;
use model_index_repository::SearchIndexProvider;
use model_index_shared::{
    Document, SearchOptions, SearchQuery, SearchResponse, DOC_ID_FIELD, MODEL_FIELD,
};

/// Search index configuration of one model type.
pub struct ModelIndex<M> {
    mapper: DocumentMapper<M>,
    augmenter: QueryAugmenter,
    retry_policy: RetryPolicy,
}

impl<M: Model> ModelIndex<M> {
    /// Build the companion by running the model's field declarations.
    ///
    /// The registry is only writable inside `declare_fields`. The first
    /// declaration error aborts configuration.
    pub fn configure<F>(declare_fields: F) -> Result<Self, ModelIndexError>
    where
        F: FnOnce(&mut FieldRegistry<M>) -> Result<(), ModelIndexError>,
    {
        let mut registry = FieldRegistry::new();
        declare_fields(&mut registry)?;

        info!(
            model = M::model_name(),
            fields = registry.len(),
            "Configured model index"
        );

        Ok(Self {
            mapper: DocumentMapper::new(registry),
            augmenter: QueryAugmenter::new(M::model_name()),
            retry_policy: RetryPolicy::default(),
        })
    }

    /// Replace the retry policy used by `add`, `remove` and `sync_all`.
    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    pub fn registry(&self) -> &FieldRegistry<M> {
        self.mapper.registry()
    }

    pub fn mapper(&self) -> &DocumentMapper<M> {
        &self.mapper
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    pub fn identifier_for(&self, record: &M) -> String {
        self.mapper.identifier_for(record)
    }

    pub fn document_for(&self, record: &M) -> Result<Document, ModelIndexError> {
        self.mapper.document_for(record)
    }

    /// Scope a raw query to this model type.
    pub fn augment_query(&self, query: Option<&str>) -> String {
        self.augmenter.augment(query)
    }

    /// Mapping properties for the declared fields plus the document envelope.
    pub fn index_properties(&self) -> Map<String, Value> {
        let mut properties = self.registry().mapping_properties();
        properties.insert(DOC_ID_FIELD.to_string(), json!({ "type": "keyword" }));
        properties.insert(MODEL_FIELD.to_string(), json!({ "type": "keyword" }));
        properties
    }

    /// Create the index with this model's mappings if it does not exist.
    pub async fn ensure_index(
        &self,
        provider: &dyn SearchIndexProvider,
    ) -> Result<(), ModelIndexError> {
        provider.ensure_index_exists(&self.index_properties()).await?;
        Ok(())
    }

    /// Search documents of this model type.
    ///
    /// Searches are not retried.
    pub async fn search(
        &self,
        provider: &dyn SearchIndexProvider,
        query: &str,
        options: SearchOptions,
    ) -> Result<SearchResponse, ModelIndexError> {
        let query = SearchQuery::new(self.augment_query(Some(query)), options);
        debug!(model = M::model_name(), query = %query.query, "Searching");
        Ok(provider.search(&query).await?)
    }

    /// Index a single record.
    pub async fn add(
        &self,
        provider: &dyn SearchIndexProvider,
        record: &M,
    ) -> Result<(), ModelIndexError> {
        let document = self.document_for(record)?;
        debug!(doc_id = %document.doc_id, "Adding document");
        let document = &document;
        run_with_retry(&self.retry_policy, move || provider.add_document(document)).await
    }

    /// Remove a single record's document.
    pub async fn remove(
        &self,
        provider: &dyn SearchIndexProvider,
        record: &M,
    ) -> Result<(), ModelIndexError> {
        let doc_id = self.identifier_for(record);
        debug!(doc_id = %doc_id, "Removing document");
        let doc_id = doc_id.as_str();
        run_with_retry(&self.retry_policy, move || provider.delete_document(doc_id)).await
    }

    /// Index every record of the model and return how many were submitted.
    pub async fn sync_all(
        &self,
        source: &dyn RecordSource<M>,
        provider: &dyn SearchIndexProvider,
        batch_size: usize,
    ) -> Result<usize, ModelIndexError> {
        BatchSynchronizer::new(&self.mapper, &self.retry_policy)
            .sync_all(source, provider, batch_size)
            .await
    }
}
