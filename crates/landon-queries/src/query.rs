//! Resource Query
//!
//! Binds the raw list parameters of one request to a resource type and
//! applies them to a collection: filter, then stable sort, then paginate.

use std::marker::PhantomData;

use landon_core::{paginate, LandonResult, PageRequest, PageResult, PagingParams};
use serde::{Deserialize, Serialize};

use crate::binder::{bind_search_terms, bind_sort_terms};
use crate::fields::Resource;
use crate::filters::{compile_filter, SearchFilter};
use crate::sorts::{compile_sort, SortOrder};
use crate::terms::{parse_search_terms, parse_sort_terms};

/// Raw list parameters, as they arrive on a query string
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryParams {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    /// Repeatable `"<field>[ desc]"` entries
    pub order_by: Vec<String>,
    /// Repeatable `"<field> <op> <value...>"` entries
    pub search: Vec<String>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// The paging half of the parameters, still unresolved
    pub fn paging(&self) -> PagingParams {
        PagingParams::new(self.offset, self.limit)
    }
}

/// A compiled filter and ordering for resource type `T`
#[derive(Debug, Clone)]
pub struct ResourceQuery<T: Resource> {
    filter: SearchFilter,
    order: SortOrder,
    _resource: PhantomData<fn() -> T>,
}

impl<T: Resource> ResourceQuery<T> {
    /// Parse, bind and compile raw `orderBy` / `search` entries.
    ///
    /// Bad terms are dropped during binding, so an error here means the
    /// registry and its providers disagree.
    pub fn compile<S: AsRef<str>>(order_by: &[S], search: &[S]) -> LandonResult<Self> {
        let registry = T::registry();
        let sort_terms = bind_sort_terms(parse_sort_terms(order_by), registry);
        let search_terms = bind_search_terms(parse_search_terms(search), registry);

        Ok(Self {
            filter: compile_filter::<T>(&search_terms)?,
            order: compile_sort::<T>(&sort_terms),
            _resource: PhantomData,
        })
    }

    pub fn from_params(params: &QueryParams) -> LandonResult<Self> {
        Self::compile(&params.order_by, &params.search)
    }

    /// No filter, original order
    pub fn unfiltered() -> Self {
        Self {
            filter: SearchFilter::always(),
            order: SortOrder::new(),
            _resource: PhantomData,
        }
    }

    pub fn filter(&self) -> &SearchFilter {
        &self.filter
    }

    pub fn order(&self) -> &SortOrder {
        &self.order
    }

    /// Filter then stable-sort
    pub fn apply(&self, items: Vec<T>) -> Vec<T> {
        let mut matched: Vec<T> = items
            .into_iter()
            .filter(|item| self.filter.matches(item))
            .collect();
        self.order.sort(&mut matched);
        matched
    }

    /// Filter, sort and cut out one page. `total_size` counts every match.
    pub fn execute(&self, items: Vec<T>, page: &PageRequest) -> PageResult<T> {
        paginate(self.apply(items), page)
    }
}
