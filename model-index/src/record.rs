//! Contracts with the persistence layer.
//!
//! The model index never queries storage itself. A model describes its
//! columns and exposes its attributes through `Model`, and a `RecordSource`
//! enumerates every stored record in chunks.

use futures::stream::{self, BoxStream};
use serde_json::Value;

use crate::errors::ModelIndexError;

/// Error type returned by function accessors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A persistent record type that can be indexed.
pub trait Model: Send + Sync + 'static {
    /// Type name used in document identifiers and query scoping.
    fn model_name() -> &'static str
    where
        Self: Sized;

    /// Names of the persistence columns backing this model.
    fn column_names() -> &'static [&'static str]
    where
        Self: Sized;

    /// Primary identifier of the record.
    fn id(&self) -> String;

    /// Read a named attribute of the record.
    ///
    /// Returns `None` if the model has no attribute with that name.
    fn attribute(&self, name: &str) -> Option<Value>;
}

/// Chunks of records produced by a `RecordSource`.
pub type RecordBatches<'a, M> = BoxStream<'a, Result<Vec<M>, ModelIndexError>>;

/// Enumerates all records of a model in bounded chunks.
///
/// Implementations must visit every record exactly once across the whole
/// stream, in a stable order. Chunks hold at most `batch_size` records.
pub trait RecordSource<M: Model>: Send + Sync {
    fn find_in_batches(&self, batch_size: usize) -> RecordBatches<'_, M>;
}

/// Record source over records held in memory.
#[derive(Debug, Clone)]
pub struct VecRecordSource<M> {
    records: Vec<M>,
}

impl<M> Default for VecRecordSource<M> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<M> VecRecordSource<M> {
    pub fn new(records: Vec<M>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<M: Model + Clone> RecordSource<M> for VecRecordSource<M> {
    fn find_in_batches(&self, batch_size: usize) -> RecordBatches<'_, M> {
        let batch_size = batch_size.max(1);
        Box::pin(stream::iter(
            self.records
                .chunks(batch_size)
                .map(|chunk| Ok(chunk.to_vec())),
        ))
    }
}
