//! # Model Index
//!
//! Declares how a persistent model's records are projected into search
//! documents and keeps a remote search index synchronized with the record
//! store.
//!
//! ## Architecture
//!
//! 1. **Field Registry**: ordered field declarations, validated against the
//!    model's persistence columns
//! 2. **Document Mapper**: projects a record into a `Document` with a fixed
//!    `{TypeName}:{id}` identifier
//! 3. **Query Augmenter**: scopes a raw query to the model type
//! 4. **Retry Executor**: runs index operations with bounded linear backoff
//! 5. **Batch Synchronizer**: pushes every record into the index in chunks
//!
//! `ModelIndex` ties these together for one model type.

pub mod companion;
pub mod errors;
pub mod field;
pub mod mapper;
pub mod query;
pub mod record;
pub mod registry;
pub mod retry;
pub mod sync;

#[cfg(test)]
pub(crate) mod test_support;

pub use companion::ModelIndex;
pub use errors::{ErrorKind, ModelIndexError};
pub use field::{Accessor, FieldOptions, FieldSpec};
pub use mapper::DocumentMapper;
pub use query::QueryAugmenter;
pub use record::{BoxError, Model, RecordBatches, RecordSource, VecRecordSource};
pub use registry::FieldRegistry;
pub use retry::{run_with_retry, Attempts, RetryPolicy};
pub use sync::{BatchSynchronizer, DEFAULT_BATCH_SIZE};

pub use model_index_shared::{Document, FieldType, SearchOptions, SearchResponse};
