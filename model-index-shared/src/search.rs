//! Search request and response types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Paging and projection options for a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Offset of the first hit to return.
    pub start: usize,
    /// Maximum number of hits to return.
    pub len: usize,
    /// Source fields to return with each hit. Empty returns only identifiers.
    pub fetch: Vec<String>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            start: 0,
            len: 10,
            fetch: Vec::new(),
        }
    }
}

impl SearchOptions {
    /// Set the offset of the first hit.
    pub fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    /// Set the page length.
    pub fn with_len(mut self, len: usize) -> Self {
        self.len = len;
        self
    }

    /// Add a source field to fetch.
    pub fn with_fetch(mut self, field: impl Into<String>) -> Self {
        self.fetch.push(field.into());
        self
    }
}

/// A query string plus options, ready to be executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Query in query-string syntax, already scoped to a model.
    pub query: String,
    pub options: SearchOptions,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>, options: SearchOptions) -> Self {
        Self {
            query: query.into(),
            options,
        }
    }
}

/// One matching document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Document identifier (`{TypeName}:{id}`).
    pub doc_id: String,
    /// Relevance score reported by the engine.
    pub score: f64,
    /// Fetched source fields, if any were requested.
    pub fields: Map<String, Value>,
}

impl SearchHit {
    /// Record id encoded in the document identifier.
    ///
    /// Returns the part after the last `:`, or `None` if the identifier has
    /// no type prefix.
    pub fn record_id(&self) -> Option<&str> {
        self.doc_id.rsplit_once(':').map(|(_, id)| id)
    }
}

/// Result of a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Total number of matching documents.
    pub total: u64,
    /// The requested page of hits, ordered by relevance.
    pub hits: Vec<SearchHit>,
}

impl SearchResponse {
    /// A response with no hits.
    pub fn empty() -> Self {
        Self {
            total: 0,
            hits: Vec::new(),
        }
    }

    /// Record ids of the hits, in relevance order.
    pub fn record_ids(&self) -> Vec<&str> {
        self.hits.iter().filter_map(SearchHit::record_id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(doc_id: &str) -> SearchHit {
        SearchHit {
            doc_id: doc_id.to_string(),
            score: 1.0,
            fields: Map::new(),
        }
    }

    #[test]
    fn test_record_ids() {
        let response = SearchResponse {
            total: 3,
            hits: vec![hit("Widget:7"), hit("Widget:42"), hit("malformed")],
        };

        assert_eq!(response.record_ids(), vec!["7", "42"]);
    }

    #[test]
    fn test_record_id_uses_last_separator() {
        assert_eq!(hit("Admin::User:9").record_id(), Some("9"));
    }

    #[test]
    fn test_options_builder() {
        let options = SearchOptions::default()
            .with_start(20)
            .with_len(5)
            .with_fetch("name");

        assert_eq!(options.start, 20);
        assert_eq!(options.len, 5);
        assert_eq!(options.fetch, vec!["name".to_string()]);
    }
}
