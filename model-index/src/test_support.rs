//! Fixtures shared by the unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::{json, Map, Value};
use tokio::sync::Mutex;

use crate::record::Model;
use model_index_repository::{SearchIndexError, SearchIndexProvider};
use model_index_shared::{Document, SearchQuery, SearchResponse};

#[derive(Debug, Clone)]
pub struct Person {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub active: bool,
    pub age: u32,
}

impl Person {
    pub fn sample(n: u64) -> Self {
        Self {
            id: n,
            name: format!("Person {}", n),
            email: format!("person{}@example.com", n),
            active: n % 2 == 0,
            age: 20 + n as u32,
        }
    }
}

impl Model for Person {
    fn model_name() -> &'static str {
        "Person"
    }

    fn column_names() -> &'static [&'static str] {
        &["id", "name", "email", "active", "age"]
    }

    fn id(&self) -> String {
        self.id.to_string()
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "id" => Some(json!(self.id)),
            "name" => Some(json!(self.name)),
            "email" => Some(json!(self.email)),
            "active" => Some(json!(self.active)),
            "age" => Some(json!(self.age)),
            _ => None,
        }
    }
}

/// In-memory provider that records every write and fails on chosen calls.
///
/// Write calls (`batch_insert`, `add_document`, `delete_document`) share one
/// 1-based counter; a call whose number is listed in `failing_calls` returns
/// the configured failure instead of being recorded.
pub struct MockProvider {
    write_calls: AtomicUsize,
    insert_calls: AtomicUsize,
    failing_calls: Vec<usize>,
    failure: SearchIndexError,
    batches: Mutex<Vec<Vec<Document>>>,
    added: Mutex<Vec<Document>>,
    deleted: Mutex<Vec<String>>,
    searches: Mutex<Vec<SearchQuery>>,
    response: SearchResponse,
    properties: Mutex<Option<Map<String, Value>>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            write_calls: AtomicUsize::new(0),
            insert_calls: AtomicUsize::new(0),
            failing_calls: Vec::new(),
            failure: SearchIndexError::bulk_operation("document rejected"),
            batches: Mutex::new(Vec::new()),
            added: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
            searches: Mutex::new(Vec::new()),
            response: SearchResponse::empty(),
            properties: Mutex::new(None),
        }
    }

    pub fn failing_calls(mut self, calls: impl IntoIterator<Item = usize>) -> Self {
        self.failing_calls = calls.into_iter().collect();
        self
    }

    pub fn with_failure(mut self, failure: SearchIndexError) -> Self {
        self.failure = failure;
        self
    }

    pub fn with_response(mut self, response: SearchResponse) -> Self {
        self.response = response;
        self
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    pub fn write_calls(&self) -> usize {
        self.write_calls.load(Ordering::SeqCst)
    }

    pub async fn batch_sizes(&self) -> Vec<usize> {
        self.batches.lock().await.iter().map(Vec::len).collect()
    }

    pub async fn batches(&self) -> Vec<Vec<Document>> {
        self.batches.lock().await.clone()
    }

    pub async fn added(&self) -> Vec<Document> {
        self.added.lock().await.clone()
    }

    pub async fn deleted(&self) -> Vec<String> {
        self.deleted.lock().await.clone()
    }

    pub async fn searches(&self) -> Vec<SearchQuery> {
        self.searches.lock().await.clone()
    }

    pub async fn properties(&self) -> Option<Map<String, Value>> {
        self.properties.lock().await.clone()
    }

    fn next_write(&self) -> Result<(), SearchIndexError> {
        let call = self.write_calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.failing_calls.contains(&call) {
            return Err(self.failure.clone());
        }
        Ok(())
    }
}

#[async_trait]
impl SearchIndexProvider for MockProvider {
    async fn batch_insert(&self, documents: &[Document]) -> Result<(), SearchIndexError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        self.next_write()?;
        self.batches.lock().await.push(documents.to_vec());
        Ok(())
    }

    async fn add_document(&self, document: &Document) -> Result<(), SearchIndexError> {
        self.next_write()?;
        self.added.lock().await.push(document.clone());
        Ok(())
    }

    async fn delete_document(&self, doc_id: &str) -> Result<(), SearchIndexError> {
        self.next_write()?;
        self.deleted.lock().await.push(doc_id.to_string());
        Ok(())
    }

    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, SearchIndexError> {
        self.searches.lock().await.push(query.clone());
        Ok(self.response.clone())
    }

    async fn ensure_index_exists(
        &self,
        properties: &Map<String, Value>,
    ) -> Result<(), SearchIndexError> {
        *self.properties.lock().await = Some(properties.clone());
        Ok(())
    }

    async fn health_check(&self) -> Result<bool, SearchIndexError> {
        Ok(true)
    }
}
