//! Configuration types for the search index connection and client.

use std::env;

use url::Url;

use crate::errors::ConfigError;

/// Environment variable holding the search index URL.
pub const URL_ENV: &str = "SEARCH_INDEX_URL";

/// Environment variable holding the index name.
pub const INDEX_ENV: &str = "SEARCH_INDEX_NAME";

/// Where the search index lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    /// Search engine URL (e.g., "http://localhost:9200").
    pub url: String,
    /// Name of the index documents are written to.
    pub index: String,
}

impl IndexConfig {
    /// Create a configuration, rejecting a blank URL or index name.
    pub fn new(url: impl Into<String>, index: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let index = index.into();

        if url.trim().is_empty() {
            return Err(ConfigError::UrlNotProvided);
        }
        if index.trim().is_empty() {
            return Err(ConfigError::IndexNameNotProvided);
        }

        Ok(Self { url, index })
    }

    /// Read the configuration from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `SEARCH_INDEX_URL`: search engine URL (required)
    /// - `SEARCH_INDEX_NAME`: index name (required)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(URL_ENV).ok_or(ConfigError::UrlNotProvided)?;
        let index = lookup(INDEX_ENV).ok_or(ConfigError::IndexNameNotProvided)?;
        Self::new(url, index)
    }

    /// Parse the configured URL.
    pub fn parsed_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.url).map_err(|e| ConfigError::InvalidUrl(e.to_string()))
    }
}

/// Configuration for the SearchIndexClient.
#[derive(Debug, Clone)]
pub struct SearchIndexConfig {
    /// Maximum number of documents allowed in a single batch operation.
    /// Set to None to disable the limit (not recommended for production).
    pub max_batch_size: Option<usize>,
}

impl Default for SearchIndexConfig {
    fn default() -> Self {
        Self {
            max_batch_size: Some(1000),
        }
    }
}

impl SearchIndexConfig {
    /// Create a config with no batch size limit (use with caution).
    pub fn unlimited() -> Self {
        Self {
            max_batch_size: None,
        }
    }

    /// Create a config with a custom batch size limit.
    pub fn with_max_batch_size(max_batch_size: usize) -> Self {
        Self {
            max_batch_size: Some(max_batch_size),
        }
    }
}
