//! # Model Index Shared
//!
//! Types shared between the model index core and the search index
//! repository: the document submitted for each record, field type hints used
//! to build index mappings, and the search request/response types.

mod document;
mod field_type;
mod search;

pub use document::{Document, DOC_ID_FIELD, MODEL_FIELD};
pub use field_type::FieldType;
pub use search::{SearchHit, SearchOptions, SearchQuery, SearchResponse};
