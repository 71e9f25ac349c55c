//! Query Sort Orders
//!
//! Sort orders define how query results should be ordered. Criteria are
//! applied in priority order: the first criterion is the primary key, the
//! next one breaks its ties, and so on.

use std::cmp::Ordering;

use crate::fields::Resource;
use crate::terms::SortTerm;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Ascending order (A-Z, 1-9, oldest first)
    #[default]
    Asc,
    /// Descending order (Z-A, 9-1, newest first)
    Desc,
}

impl SortDirection {
    pub fn from_descending(descending: bool) -> Self {
        if descending {
            Self::Desc
        } else {
            Self::Asc
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// A single sort criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortCriterion {
    /// Canonical field name
    pub field: &'static str,
    pub direction: SortDirection,
}

impl SortCriterion {
    pub fn new(field: &'static str, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn asc(field: &'static str) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: &'static str) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    /// Compare two entities on this criterion alone. Entities whose values
    /// cannot be compared are treated as equal.
    pub fn compare<T: Resource>(&self, a: &T, b: &T) -> Ordering {
        let ordering = match (a.field_value(self.field), b.field_value(self.field)) {
            (Some(left), Some(right)) => left.compare(&right).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        };
        self.direction.apply(ordering)
    }
}

/// Collection of sort criteria
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortOrder {
    criteria: Vec<SortCriterion>,
}

impl SortOrder {
    /// Create a new empty sort order
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sort criterion (builder pattern)
    pub fn then(mut self, criterion: SortCriterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    pub fn then_asc(self, field: &'static str) -> Self {
        self.then(SortCriterion::asc(field))
    }

    pub fn then_desc(self, field: &'static str) -> Self {
        self.then(SortCriterion::desc(field))
    }

    /// Get all sort criteria
    pub fn criteria(&self) -> &[SortCriterion] {
        &self.criteria
    }

    /// Check if any sort is defined
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// Get the primary (first) sort criterion
    pub fn primary(&self) -> Option<&SortCriterion> {
        self.criteria.first()
    }

    /// Check if sorting by a specific field
    pub fn sorts_by(&self, field: &str) -> bool {
        self.criteria.iter().any(|c| c.field == field)
    }

    /// Lexicographic comparison over all criteria
    pub fn compare<T: Resource>(&self, a: &T, b: &T) -> Ordering {
        self.criteria
            .iter()
            .map(|criterion| criterion.compare(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Sort in place. The sort is stable, so entities equal on every
    /// criterion keep their original relative order.
    pub fn sort<T: Resource>(&self, items: &mut [T]) {
        if self.is_empty() {
            return;
        }
        items.sort_by(|a, b| self.compare(a, b));
    }
}

/// Build the ordering for already-bound sort terms.
///
/// Terms naming a field that is not sortable on `T` are skipped; after
/// binding that cannot happen.
pub fn compile_sort<T: Resource>(terms: &[SortTerm]) -> SortOrder {
    let registry = T::registry();

    terms
        .iter()
        .filter_map(|term| {
            registry.find_sortable(&term.name).map(|field| {
                SortCriterion::new(field.name(), SortDirection::from_descending(term.descending))
            })
        })
        .fold(SortOrder::new(), SortOrder::then)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{suites, Suite};

    fn names(items: &[Suite]) -> Vec<&str> {
        items.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_sort_direction() {
        assert_eq!(SortDirection::from_descending(true), SortDirection::Desc);
        assert_eq!(SortDirection::from_descending(false), SortDirection::Asc);
        assert_eq!(SortDirection::Desc.as_str(), "desc");
    }

    #[test]
    fn test_sort_order_builder() {
        let order = SortOrder::new().then_desc("rate").then_asc("name");

        assert_eq!(order.len(), 2);
        assert!(order.sorts_by("rate"));
        assert!(!order.sorts_by("openFrom"));
        assert_eq!(order.primary(), Some(&SortCriterion::desc("rate")));
    }

    #[test]
    fn test_compile_sort_uses_canonical_names() {
        let order = compile_sort::<Suite>(&[SortTerm::new("RATE", true), SortTerm::new("openfrom", false)]);
        assert_eq!(
            order.criteria(),
            &[SortCriterion::desc("rate"), SortCriterion::asc("openFrom")]
        );
    }

    #[test]
    fn test_ties_broken_by_next_criterion() {
        let mut items = suites();
        let order = SortOrder::new().then_desc("rate").then_asc("name");
        order.sort(&mut items);

        assert_eq!(names(&items), vec!["Driscoll", "Oxford", "Picadilly", "Windsor"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut items = suites();
        SortOrder::new().then_asc("rate").sort(&mut items);

        // Oxford and Picadilly share a rate and keep their input order
        assert_eq!(names(&items), vec!["Windsor", "Oxford", "Picadilly", "Driscoll"]);
    }

    #[test]
    fn test_empty_order_keeps_input_order() {
        let mut items = suites();
        SortOrder::new().sort(&mut items);
        assert_eq!(names(&items), vec!["Oxford", "Driscoll", "Picadilly", "Windsor"]);
    }

    #[test]
    fn test_temporal_descending() {
        let mut items = suites();
        compile_sort::<Suite>(&[SortTerm::new("openFrom", true)]).sort(&mut items);
        assert_eq!(names(&items), vec!["Windsor", "Oxford", "Picadilly", "Driscoll"]);
    }
}
