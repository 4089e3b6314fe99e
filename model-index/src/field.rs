//! Field declarations.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::record::BoxError;
use model_index_shared::FieldType;

type AccessorFn<M> = dyn Fn(&M) -> Result<Value, BoxError> + Send + Sync;

/// How a field's value is read from a record.
pub enum Accessor<M> {
    /// Read the model attribute with this name.
    Named(String),
    /// Compute the value from the whole record.
    Function(Arc<AccessorFn<M>>),
}

impl<M: 'static> Accessor<M> {
    /// Read the named model attribute.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Compute the value with an infallible function.
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&M) -> Value + Send + Sync + 'static,
    {
        Self::Function(Arc::new(move |record: &M| Ok(f(record))))
    }

    /// Compute the value with a function that may fail.
    pub fn try_function<F>(f: F) -> Self
    where
        F: Fn(&M) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        Self::Function(Arc::new(f))
    }

    /// The attribute name, for named accessors.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            Self::Function(_) => None,
        }
    }
}

impl<M> Clone for Accessor<M> {
    fn clone(&self) -> Self {
        match self {
            Self::Named(name) => Self::Named(name.clone()),
            Self::Function(f) => Self::Function(Arc::clone(f)),
        }
    }
}

impl<M> fmt::Debug for Accessor<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Self::Function(_) => f.write_str("Function(..)"),
        }
    }
}

/// Recognized per-field options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldOptions {
    /// Persistence columns a computed field depends on.
    pub depends_on: Vec<String>,
    /// Mapping hint used when the index is created.
    pub field_type: Option<FieldType>,
}

impl FieldOptions {
    /// Add a column the field depends on.
    pub fn depends_on(mut self, column: impl Into<String>) -> Self {
        self.depends_on.push(column.into());
        self
    }

    /// Set the mapping hint.
    pub fn field_type(mut self, field_type: FieldType) -> Self {
        self.field_type = Some(field_type);
        self
    }

    pub fn has_dependencies(&self) -> bool {
        !self.depends_on.is_empty()
    }
}

/// One declared indexable field.
pub struct FieldSpec<M> {
    /// Key of the field in the document.
    pub name: String,
    pub accessor: Accessor<M>,
    pub options: FieldOptions,
}

impl<M> FieldSpec<M> {
    pub fn new(name: impl Into<String>, accessor: Accessor<M>, options: FieldOptions) -> Self {
        Self {
            name: name.into(),
            accessor,
            options,
        }
    }

    /// Mapping type of the field, defaulting to text.
    pub fn field_type(&self) -> FieldType {
        self.options.field_type.unwrap_or_default()
    }
}

impl<M> Clone for FieldSpec<M> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            accessor: self.accessor.clone(),
            options: self.options.clone(),
        }
    }
}

impl<M> fmt::Debug for FieldSpec<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("accessor", &self.accessor)
            .field("options", &self.options)
            .finish()
    }
}
