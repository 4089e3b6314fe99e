//! Batch synchronizer.
//!
//! Pushes every record of a model into the search index, one chunk at a
//! time.

use futures::TryStreamExt;
use tracing::{debug, info, instrument};

use crate::errors::ModelIndexError;
use crate::mapper::DocumentMapper;
use crate::record::{Model, RecordSource};
use crate::retry::{run_with_retry, RetryPolicy};
use model_index_repository::SearchIndexProvider;

/// Number of records per chunk when no batch size is given.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Submits all records of a model to the index in chunks.
pub struct BatchSynchronizer<'a, M> {
    mapper: &'a DocumentMapper<M>,
    policy: &'a RetryPolicy,
}

impl<'a, M: Model> BatchSynchronizer<'a, M> {
    pub fn new(mapper: &'a DocumentMapper<M>, policy: &'a RetryPolicy) -> Self {
        Self { mapper, policy }
    }

    /// Index every record the source yields and return how many were submitted.
    ///
    /// Each chunk is mapped in full and then sent as one `batch_insert`
    /// wrapped in the retry policy. Chunks are processed strictly in
    /// sequence. The first chunk that cannot be mapped or inserted aborts the
    /// run; chunks already inserted stay in the index.
    #[instrument(skip_all, fields(model = M::model_name(), batch_size = batch_size))]
    pub async fn sync_all(
        &self,
        source: &dyn RecordSource<M>,
        provider: &dyn SearchIndexProvider,
        batch_size: usize,
    ) -> Result<usize, ModelIndexError> {
        if batch_size == 0 {
            return Err(ModelIndexError::InvalidBatchSize);
        }

        info!("Starting full index synchronization");

        let mut batches = source.find_in_batches(batch_size);
        let mut count = 0;
        let mut chunks = 0;

        while let Some(records) = batches.try_next().await? {
            if records.is_empty() {
                continue;
            }

            let documents = self.mapper.documents_for(&records)?;
            let documents = documents.as_slice();
            count += documents.len();
            chunks += 1;

            run_with_retry(self.policy, move || provider.batch_insert(documents)).await?;

            debug!(chunk = chunks, size = documents.len(), total = count, "Chunk indexed");
        }

        info!(count = count, chunks = chunks, "Finished full index synchronization");
        Ok(count)
    }
}
