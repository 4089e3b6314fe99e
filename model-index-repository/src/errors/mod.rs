//! Error types for the model index repository.

mod config_error;
mod search_index_error;

pub use config_error::ConfigError;
pub use search_index_error::SearchIndexError;
