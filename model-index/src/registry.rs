//! Field registry.
//!
//! Holds the ordered field declarations of one model type. Declarations are
//! validated as they are made, so an unmapped computed field is reported
//! while the model is being configured instead of during indexing.

use serde_json::{json, Map, Value};
use tracing::debug;

use crate::errors::ModelIndexError;
use crate::field::{Accessor, FieldOptions, FieldSpec};
use crate::record::Model;

/// Ordered field declarations of one model type.
///
/// Only writable while the model index is being configured; a built
/// `ModelIndex` hands out shared references only.
pub struct FieldRegistry<M> {
    fields: Vec<FieldSpec<M>>,
}

impl<M: Model> FieldRegistry<M> {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Declare a field and return the declarations so far.
    ///
    /// A named accessor must either match a persistence column (ignoring one
    /// trailing `?` or `=`) or list the columns it depends on. Function
    /// accessors are not checked. Declaring a name twice appends a second
    /// spec; the later one wins when documents are built.
    ///
    /// # Errors
    ///
    /// `ModelIndexError::MissingFieldDependency` if the dependency rule is violated.
    pub fn declare(
        &mut self,
        name: impl Into<String>,
        accessor: Accessor<M>,
        options: FieldOptions,
    ) -> Result<&[FieldSpec<M>], ModelIndexError> {
        let name = name.into();

        if let Accessor::Named(attribute) = &accessor {
            let column = column_name(attribute);
            let is_column = M::column_names().contains(&column);
            if !is_column && !options.has_dependencies() {
                return Err(ModelIndexError::MissingFieldDependency {
                    model: M::model_name().to_string(),
                    field: name,
                });
            }
        }

        debug!(model = M::model_name(), field = %name, "Declared index field");
        self.fields.push(FieldSpec::new(name, accessor, options));
        Ok(&self.fields)
    }

    /// Declare a field read from the attribute of the same name.
    pub fn field(&mut self, name: &str) -> Result<&[FieldSpec<M>], ModelIndexError> {
        self.declare(name, Accessor::named(name), FieldOptions::default())
    }

    /// Declare a field read from the attribute of the same name, with options.
    pub fn field_with_options(
        &mut self,
        name: &str,
        options: FieldOptions,
    ) -> Result<&[FieldSpec<M>], ModelIndexError> {
        self.declare(name, Accessor::named(name), options)
    }

    /// Install a custom document id derivation.
    ///
    /// Always fails: document ids of persistent models are fixed to
    /// `{TypeName}:{id}`.
    pub fn doc_id(&mut self, _derivation: Accessor<M>) -> Result<(), ModelIndexError> {
        Err(ModelIndexError::CustomDocIdNotSupported {
            model: M::model_name().to_string(),
        })
    }

    pub fn fields(&self) -> &[FieldSpec<M>] {
        &self.fields
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec<M>> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Index mapping properties derived from the field type hints.
    pub fn mapping_properties(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .map(|spec| {
                (
                    spec.name.clone(),
                    json!({ "type": spec.field_type().mapping_type() }),
                )
            })
            .collect()
    }
}

impl<M: Model> Default for FieldRegistry<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Column an attribute name refers to: predicate (`?`) and setter (`=`) suffixes are dropped.
fn column_name(attribute: &str) -> &str {
    attribute
        .strip_suffix('?')
        .or_else(|| attribute.strip_suffix('='))
        .unwrap_or(attribute)
}
