//! Document submitted to the search index for one record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the identifier key in the indexed source.
pub const DOC_ID_FIELD: &str = "docid";

/// Name of the model type key in the indexed source.
pub const MODEL_FIELD: &str = "model";

/// Flat key/value projection of one record.
///
/// `fields` keeps insertion order, which follows the order in which the
/// fields were declared for the model. The identifier and model name live
/// beside the fields rather than inside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Unique key of the document within the index (`{TypeName}:{id}`).
    pub doc_id: String,
    /// Type name of the model the record belongs to.
    pub model: String,
    /// Extracted field values keyed by field name.
    pub fields: Map<String, Value>,
}

impl Document {
    /// Create an empty document for the given identifier and model.
    pub fn new(doc_id: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            doc_id: doc_id.into(),
            model: model.into(),
            fields: Map::new(),
        }
    }

    /// Set a field value. A value already stored under `name` is replaced in place.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.fields.insert(name.into(), value);
    }

    /// Get a field value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Build the flat source object sent to the search engine.
    ///
    /// The envelope keys (`docid`, `model`) are written last, so a declared
    /// field with the same name never shadows them.
    pub fn to_source(&self) -> Value {
        let mut source = self.fields.clone();
        source.insert(DOC_ID_FIELD.to_string(), Value::String(self.doc_id.clone()));
        source.insert(MODEL_FIELD.to_string(), Value::String(self.model.clone()));
        Value::Object(source)
    }
}
