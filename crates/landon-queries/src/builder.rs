//! Query Builder
//!
//! Provides a fluent API for assembling list parameters without writing the
//! raw `orderBy` / `search` strings by hand.

use crate::query::QueryParams;

/// Builder for constructing [`QueryParams`] fluently
#[derive(Debug, Default)]
pub struct QueryBuilder {
    params: QueryParams,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort ascending on a field
    pub fn order_by_asc(mut self, field: &str) -> Self {
        self.params.order_by.push(field.to_string());
        self
    }

    /// Sort descending on a field
    pub fn order_by_desc(mut self, field: &str) -> Self {
        self.params.order_by.push(format!("{field} desc"));
        self
    }

    /// Add a `field op value` search entry
    pub fn search(mut self, field: &str, operator: &str, value: impl AsRef<str>) -> Self {
        self.params
            .search
            .push(format!("{field} {operator} {}", value.as_ref()));
        self
    }

    pub fn offset(mut self, offset: i64) -> Self {
        self.params.offset = Some(offset);
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.params.limit = Some(limit);
        self
    }

    /// Build the parameters
    pub fn build(self) -> QueryParams {
        self.params
    }
}
