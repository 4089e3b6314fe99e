//! Document mapper.
//!
//! Projects records into documents using the model's field registry.

use serde_json::{Map, Value};

use crate::errors::ModelIndexError;
use crate::field::Accessor;
use crate::record::Model;
use crate::registry::FieldRegistry;
use model_index_shared::Document;

/// Turns records of one model type into search documents.
pub struct DocumentMapper<M> {
    registry: FieldRegistry<M>,
}

impl<M: Model> DocumentMapper<M> {
    pub fn new(registry: FieldRegistry<M>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &FieldRegistry<M> {
        &self.registry
    }

    /// Document identifier of a record: `{TypeName}:{id}`.
    ///
    /// This rule cannot be overridden, which keeps re-submission of a
    /// record idempotent.
    pub fn identifier_for(&self, record: &M) -> String {
        format!("{}:{}", M::model_name(), record.id())
    }

    /// Project a record into a document.
    ///
    /// Fields are resolved in declaration order. The first failing accessor
    /// aborts the projection with a `Mapping` error.
    pub fn document_for(&self, record: &M) -> Result<Document, ModelIndexError> {
        let doc_id = self.identifier_for(record);
        let mut fields = Map::with_capacity(self.registry.len());

        for spec in self.registry.iter() {
            let value = resolve(&spec.accessor, record).map_err(|message| {
                ModelIndexError::mapping(doc_id.as_str(), spec.name.as_str(), message)
            })?;
            fields.insert(spec.name.clone(), value);
        }

        Ok(Document {
            doc_id,
            model: M::model_name().to_string(),
            fields,
        })
    }

    /// Project a chunk of records, stopping at the first failure.
    pub fn documents_for(&self, records: &[M]) -> Result<Vec<Document>, ModelIndexError> {
        records.iter().map(|record| self.document_for(record)).collect()
    }
}

fn resolve<M: Model>(accessor: &Accessor<M>, record: &M) -> Result<Value, String> {
    match accessor {
        Accessor::Named(name) => record
            .attribute(name)
            .ok_or_else(|| format!("no attribute named `{}`", name)),
        Accessor::Function(f) => f(record).map_err(|e| e.to_string()),
    }
}
