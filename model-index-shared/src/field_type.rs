use serde::{Deserialize, Serialize};

/// Mapping hint for a declared field.
///
/// Only affects how the index mapping is created; extracted values are sent
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Analyzed full-text field.
    #[default]
    Text,
    /// Exact-match field used for filtering.
    Keyword,
    Integer,
    Float,
    Boolean,
    Date,
}

impl FieldType {
    /// Name of the mapping type in the search engine.
    pub fn mapping_type(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Keyword => "keyword",
            Self::Integer => "long",
            Self::Float => "double",
            Self::Boolean => "boolean",
            Self::Date => "date",
        }
    }
}
