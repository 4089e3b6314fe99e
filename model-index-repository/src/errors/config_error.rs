use thiserror::Error;

/// Errors raised while building the index configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No search index URL was configured.
    #[error("Search index URL not provided")]
    UrlNotProvided,

    /// No index name was configured.
    #[error("Search index name not provided")]
    IndexNameNotProvided,

    /// The configured URL could not be parsed.
    #[error("Invalid search index URL: {0}")]
    InvalidUrl(String),
}
