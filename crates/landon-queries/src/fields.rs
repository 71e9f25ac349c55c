//! Field Registry
//!
//! Every queryable entity type declares a static table of
//! [`FieldDescriptor`]s once, typically behind a `once_cell::sync::Lazy`.
//! The table says which fields can be sorted on, which can be searched,
//! and which operator provider a searchable field uses. After construction
//! a registry is read-only and safe to share between threads.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::operators::OperatorProvider;

/// A typed field value, as read from an entity or parsed from a literal
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    DateTime(DateTime<Utc>),
}

impl FieldValue {
    /// Order two values of the same kind; values of different kinds are
    /// incomparable
    pub fn compare(&self, other: &FieldValue) -> Option<Ordering> {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => Some(a.cmp(b)),
            (FieldValue::Integer(a), FieldValue::Integer(b)) => Some(a.cmp(b)),
            (FieldValue::DateTime(a), FieldValue::DateTime(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

/// What a field may be used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldCapability {
    pub sortable: bool,
    pub searchable: bool,
}

/// One declared field of a resource type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: &'static str,
    capability: FieldCapability,
    provider: OperatorProvider,
}

impl FieldDescriptor {
    /// A field with no capabilities
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            capability: FieldCapability::default(),
            provider: OperatorProvider::Equality,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.capability.sortable = true;
        self
    }

    /// Searchable with the equality-only provider
    pub fn searchable(self) -> Self {
        self.searchable_with(OperatorProvider::Equality)
    }

    pub fn searchable_with(mut self, provider: OperatorProvider) -> Self {
        self.capability.searchable = true;
        self.provider = provider;
        self
    }

    /// Canonical (declared) spelling of the field name
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn capability(&self) -> FieldCapability {
        self.capability
    }

    pub fn is_sortable(&self) -> bool {
        self.capability.sortable
    }

    pub fn is_searchable(&self) -> bool {
        self.capability.searchable
    }

    pub fn operator_provider(&self) -> OperatorProvider {
        self.provider
    }
}

/// The declared fields of one resource type, looked up case-insensitively
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    type_name: &'static str,
    fields: Vec<FieldDescriptor>,
    by_name: HashMap<String, usize>,
}

impl FieldRegistry {
    pub fn new(type_name: &'static str, fields: Vec<FieldDescriptor>) -> Self {
        let mut by_name = HashMap::with_capacity(fields.len());
        for (index, field) in fields.iter().enumerate() {
            let previous = by_name.insert(field.name.to_ascii_lowercase(), index);
            debug_assert!(
                previous.is_none(),
                "{} declares field {} twice",
                type_name,
                field.name
            );
        }

        Self {
            type_name,
            fields,
            by_name,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Look a field up by any casing of its name
    pub fn lookup(&self, name: &str) -> Option<&FieldDescriptor> {
        self.by_name
            .get(&name.to_ascii_lowercase())
            .map(|&index| &self.fields[index])
    }

    pub fn find_sortable(&self, name: &str) -> Option<&FieldDescriptor> {
        self.lookup(name).filter(|f| f.is_sortable())
    }

    pub fn find_searchable(&self, name: &str) -> Option<&FieldDescriptor> {
        self.lookup(name).filter(|f| f.is_searchable())
    }

    pub fn sortable_fields(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|f| f.is_sortable())
            .map(|f| f.name)
            .collect()
    }

    pub fn searchable_fields(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|f| f.is_searchable())
            .map(|f| f.name)
            .collect()
    }

    /// Provider of a searchable field
    pub fn operator_provider_for(&self, name: &str) -> Option<OperatorProvider> {
        self.find_searchable(name).map(|f| f.provider)
    }
}

/// An entity type the query engine can filter and sort
pub trait Resource {
    /// The process-wide field table for this type
    fn registry() -> &'static FieldRegistry;

    /// Read a field by its canonical name
    fn field_value(&self, field: &str) -> Option<FieldValue>;
}
