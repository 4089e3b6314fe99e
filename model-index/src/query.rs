//! Query scoping.

use model_index_shared::MODEL_FIELD;

/// Scopes raw search queries to one model type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryAugmenter {
    model_name: &'static str,
}

impl QueryAugmenter {
    pub fn new(model_name: &'static str) -> Self {
        Self { model_name }
    }

    /// Append a `model:{TypeName}` clause to the query.
    ///
    /// Blank or absent queries produce just the clause, with no stray
    /// whitespace.
    pub fn augment(&self, query: Option<&str>) -> String {
        let scope = format!("{}:{}", MODEL_FIELD, self.model_name);
        match query.map(str::trim).filter(|query| !query.is_empty()) {
            Some(query) => format!("{} {}", query, scope),
            None => scope,
        }
    }
}
