//! # landon-queries
//!
//! Generic resource query engine for the Landon hotel API.
//!
//! Any list endpoint takes the same four optional inputs, `offset`, `limit`,
//! repeatable `orderBy` entries (`"<field>[ desc]"`) and repeatable `search`
//! entries (`"<field> <op> <value...>"`), and applies them to a collection of
//! some entity type that implements [`Resource`].
//!
//! ## Structure
//!
//! - `terms` - tokenizes raw `orderBy` / `search` strings
//! - `fields` - per-type field registry (sortable / searchable capabilities)
//! - `binder` - checks parsed terms against the registry, dropping the rest
//! - `operators` - operator providers that turn a term into a comparison
//! - `filters` - the compiled search predicate
//! - `sorts` - the compiled multi-key ordering
//! - `query` - compiled query applied to a collection, plus paging
//! - `builder` - fluent construction of query parameters
//!
//! Unknown fields, malformed search terms, operators a field does not
//! support and literals that do not parse are all silently dropped. A bad
//! filter behaves like no filter.
//!
//! ## Example
//!
//! ```
//! use landon_queries::builder::QueryBuilder;
//!
//! let params = QueryBuilder::new()
//!     .order_by_desc("rate")
//!     .search("name", "eq", "Oxford Suite")
//!     .limit(10)
//!     .build();
//!
//! assert_eq!(params.order_by, vec!["rate desc".to_string()]);
//! assert_eq!(params.search, vec!["name eq Oxford Suite".to_string()]);
//! ```

pub mod terms;
pub mod fields;
pub mod operators;
pub mod binder;
pub mod filters;
pub mod sorts;
pub mod query;
pub mod builder;

// Re-exports for convenience
pub use terms::{parse_search_terms, parse_sort_terms, SearchTerm, SortTerm};
pub use fields::{FieldCapability, FieldDescriptor, FieldRegistry, FieldValue, Resource};
pub use operators::{ComparisonOp, OperatorProvider};
pub use binder::{bind_search_terms, bind_sort_terms};
pub use filters::{compile_filter, Comparison, SearchFilter};
pub use sorts::{compile_sort, SortCriterion, SortDirection, SortOrder};
pub use query::{QueryParams, ResourceQuery};
pub use builder::QueryBuilder;
