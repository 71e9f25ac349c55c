//! Term Binder
//!
//! Cross-references parsed terms against a [`FieldRegistry`]. Terms that
//! do not name a registered field, malformed search terms, operators the
//! field's provider does not support and literals that do not parse are
//! dropped. Binding never fails; a request full of bad terms binds to an
//! empty sequence, which compiles to "no filter" / "original order".
//!
//! Surviving terms are rewritten with the registry's canonical field name.

use tracing::debug;

use crate::fields::FieldRegistry;
use crate::terms::{SearchTerm, SortTerm};

/// Keep the sort terms naming a sortable field, in input order
pub fn bind_sort_terms(
    terms: impl IntoIterator<Item = SortTerm>,
    registry: &FieldRegistry,
) -> Vec<SortTerm> {
    terms
        .into_iter()
        .filter_map(|term| match registry.find_sortable(&term.name) {
            Some(field) => Some(SortTerm::new(field.name(), term.descending)),
            None => {
                debug!(
                    resource = registry.type_name(),
                    field = %term.name,
                    "dropping sort term on unknown field"
                );
                None
            }
        })
        .collect()
}

/// Keep the well-formed search terms a searchable field can evaluate, in
/// input order
pub fn bind_search_terms(
    terms: impl IntoIterator<Item = SearchTerm>,
    registry: &FieldRegistry,
) -> Vec<SearchTerm> {
    terms
        .into_iter()
        .filter(|term| {
            if !term.valid_syntax {
                debug!(
                    resource = registry.type_name(),
                    term = %term.name,
                    "dropping malformed search term"
                );
            }
            term.valid_syntax
        })
        .filter_map(|term| {
            let Some(field) = registry.find_searchable(&term.name) else {
                debug!(
                    resource = registry.type_name(),
                    field = %term.name,
                    "dropping search term on unknown field"
                );
                return None;
            };

            let provider = field.operator_provider();
            if !provider.supports(&term.operator) {
                debug!(
                    resource = registry.type_name(),
                    field = field.name(),
                    operator = %term.operator,
                    "dropping search term with unsupported operator"
                );
                return None;
            }
            if provider.parse_literal(&term.value).is_none() {
                debug!(
                    resource = registry.type_name(),
                    field = field.name(),
                    value = %term.value,
                    "dropping search term with unparseable value"
                );
                return None;
            }

            Some(SearchTerm::new(field.name(), term.operator, term.value))
        })
        .collect()
}
