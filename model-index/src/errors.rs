//! Error types for the model index.

use model_index_repository::SearchIndexError;
use thiserror::Error;

/// Errors that can occur while configuring a model index or submitting its documents.
#[derive(Error, Debug)]
pub enum ModelIndexError {
    /// A named accessor is not a persistence column and declares no dependencies.
    #[error("Field `{field}` of {model} is not a column and has no `depends_on` columns")]
    MissingFieldDependency { model: String, field: String },

    /// The model tried to install its own document id derivation.
    #[error("Custom doc ids are not supported for {model}; doc ids are always `{model}:{{id}}`")]
    CustomDocIdNotSupported { model: String },

    /// A batch size of zero was requested.
    #[error("Batch size must be at least 1")]
    InvalidBatchSize,

    /// An accessor failed while projecting a record into a document.
    #[error("Failed to map field `{field}` of {doc_id}: {message}")]
    Mapping {
        doc_id: String,
        field: String,
        message: String,
    },

    /// The record source failed to enumerate records.
    #[error("Record source error: {0}")]
    RecordSource(String),

    /// The search index rejected or failed an operation.
    #[error("Search index error: {0}")]
    Index(#[from] SearchIndexError),
}

impl ModelIndexError {
    /// Create a mapping error.
    pub fn mapping(
        doc_id: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Mapping {
            doc_id: doc_id.into(),
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a record source error.
    pub fn record_source(msg: impl Into<String>) -> Self {
        Self::RecordSource(msg.into())
    }

    /// Classify the error for retry except-lists.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingFieldDependency { .. } => ErrorKind::MissingFieldDependency,
            Self::CustomDocIdNotSupported { .. } => ErrorKind::CustomDocIdNotSupported,
            Self::InvalidBatchSize => ErrorKind::InvalidBatchSize,
            Self::Mapping { .. } => ErrorKind::Mapping,
            Self::RecordSource(_) => ErrorKind::RecordSource,
            Self::Index(error) => match error {
                SearchIndexError::ValidationError(_) => ErrorKind::Validation,
                SearchIndexError::ConnectionError(_) => ErrorKind::Connection,
                SearchIndexError::IndexError(_) => ErrorKind::Index,
                SearchIndexError::DeleteError(_) => ErrorKind::Delete,
                SearchIndexError::BulkOperationError(_) => ErrorKind::BulkOperation,
                SearchIndexError::BatchSizeExceeded { .. } => ErrorKind::BatchSizeExceeded,
                SearchIndexError::QueryError(_) => ErrorKind::Query,
                SearchIndexError::IndexCreationError(_) => ErrorKind::IndexCreation,
                SearchIndexError::ParseError(_) => ErrorKind::Parse,
            },
        }
    }

    /// Whether the error is a configuration mistake rather than an operational failure.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::MissingFieldDependency
                | ErrorKind::CustomDocIdNotSupported
                | ErrorKind::InvalidBatchSize
        )
    }
}

/// Flat classification of `ModelIndexError`, used to except errors from retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingFieldDependency,
    CustomDocIdNotSupported,
    InvalidBatchSize,
    Mapping,
    RecordSource,
    Validation,
    Connection,
    Index,
    Delete,
    BulkOperation,
    BatchSizeExceeded,
    Query,
    IndexCreation,
    Parse,
}
