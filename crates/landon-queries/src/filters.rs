//! Search Filters
//!
//! The compiled form of the bound `search` terms: a conjunction of
//! [`Comparison`]s. A filter is plain data, so a storage layer can translate
//! it into its own query language; [`SearchFilter::matches`] is the
//! in-memory evaluation.

use landon_core::{LandonError, LandonResult};

use crate::fields::{FieldValue, Resource};
use crate::operators::ComparisonOp;
use crate::terms::SearchTerm;

/// A single `field <op> value` condition
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// Canonical field name
    pub field: &'static str,
    pub operator: ComparisonOp,
    pub value: FieldValue,
}

impl Comparison {
    pub fn new(field: &'static str, operator: ComparisonOp, value: FieldValue) -> Self {
        Self {
            field,
            operator,
            value,
        }
    }

    /// Evaluate against an entity. A missing field or a value of another
    /// kind never matches.
    pub fn matches<T: Resource>(&self, entity: &T) -> bool {
        entity
            .field_value(self.field)
            .and_then(|actual| actual.compare(&self.value))
            .is_some_and(|ordering| self.operator.accepts(ordering))
    }
}

/// Comparisons combined with AND; empty means "always true"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilter {
    comparisons: Vec<Comparison>,
}

impl SearchFilter {
    /// A filter that accepts everything
    pub fn always() -> Self {
        Self::default()
    }

    /// Add a comparison (builder pattern)
    pub fn with(mut self, comparison: Comparison) -> Self {
        self.comparisons.push(comparison);
        self
    }

    pub fn comparisons(&self) -> &[Comparison] {
        &self.comparisons
    }

    pub fn is_empty(&self) -> bool {
        self.comparisons.is_empty()
    }

    pub fn len(&self) -> usize {
        self.comparisons.len()
    }

    /// Check if a specific field is being filtered
    pub fn has_filter_for(&self, field: &str) -> bool {
        self.comparisons.iter().any(|c| c.field == field)
    }

    pub fn matches<T: Resource>(&self, entity: &T) -> bool {
        self.comparisons.iter().all(|c| c.matches(entity))
    }
}

/// AND together the comparisons for already-bound search terms.
///
/// Terms are expected to come out of [`crate::binder::bind_search_terms`];
/// a term naming a field that is not searchable on `T`, or carrying an
/// operator its provider rejects, is a contract violation.
pub fn compile_filter<T: Resource>(terms: &[SearchTerm]) -> LandonResult<SearchFilter> {
    let registry = T::registry();
    let mut filter = SearchFilter::always();

    for term in terms {
        let field = registry.find_searchable(&term.name).ok_or_else(|| {
            LandonError::Internal(format!(
                "{} has no searchable field {}",
                registry.type_name(),
                term.name
            ))
        })?;
        let comparison = field
            .operator_provider()
            .build_comparison(field.name(), &term.operator, &term.value)?;
        filter = filter.with(comparison);
    }

    Ok(filter)
}
