//! Paging types and the paginator
//!
//! Raw `offset`/`limit` values arrive as optional request parameters and are
//! resolved against the configured defaults into an immutable
//! [`PageRequest`]. The caller-supplied params are never mutated.

use serde::{Deserialize, Serialize};

use crate::config::PagingConfig;

/// Paging parameters as they arrive from the query string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingParams {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl PagingParams {
    pub fn new(offset: Option<i64>, limit: Option<i64>) -> Self {
        Self { offset, limit }
    }
}

/// A resolved page window: `offset >= 0`, `1 <= limit`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    offset: usize,
    limit: usize,
}

impl PageRequest {
    /// Build a request directly; a zero limit is raised to one
    pub fn new(offset: usize, limit: usize) -> Self {
        Self {
            offset,
            limit: limit.max(1),
        }
    }

    /// Merge raw params against the configured defaults.
    ///
    /// Negative offsets clamp to zero and the limit clamps into
    /// `[1, max_limit]`; nothing here is rejected.
    pub fn resolve(params: &PagingParams, config: &PagingConfig) -> Self {
        let offset = params.offset.unwrap_or(config.default_offset).max(0);
        let max_limit = config.max_limit.max(1);
        let limit = params
            .limit
            .unwrap_or(config.default_limit)
            .clamp(1, max_limit);

        if params.limit.is_some_and(|l| l != limit) {
            tracing::debug!(
                requested = params.limit,
                applied = limit,
                "page limit clamped"
            );
        }

        Self {
            offset: offset as usize,
            limit: limit as usize,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::resolve(&PagingParams::default(), &PagingConfig::default())
    }
}

/// One page of results plus the size of the whole filtered set
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total_size: usize,
    pub offset: usize,
    pub limit: usize,
}

impl<T> PageResult<T> {
    pub fn empty(request: &PageRequest) -> Self {
        Self {
            items: Vec::new(),
            total_size: 0,
            offset: request.offset(),
            limit: request.limit(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.offset + self.limit < self.total_size
    }

    pub fn has_previous(&self) -> bool {
        self.offset > 0
    }

    pub fn next_offset(&self) -> Option<usize> {
        self.has_next().then(|| self.offset + self.limit)
    }

    pub fn previous_offset(&self) -> Option<usize> {
        self.has_previous()
            .then(|| self.offset.saturating_sub(self.limit))
    }

    /// Project the page items, keeping the paging metadata
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> PageResult<U> {
        PageResult {
            items: self.items.into_iter().map(f).collect(),
            total_size: self.total_size,
            offset: self.offset,
            limit: self.limit,
        }
    }
}

/// Count the (already filtered and sorted) sequence, then cut out one page.
pub fn paginate<T>(items: Vec<T>, request: &PageRequest) -> PageResult<T> {
    let total_size = items.len();
    let items = items
        .into_iter()
        .skip(request.offset())
        .take(request.limit())
        .collect();

    PageResult {
        items,
        total_size,
        offset: request.offset(),
        limit: request.limit(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PagingConfig {
        PagingConfig {
            default_offset: 0,
            default_limit: 25,
            max_limit: 100,
        }
    }

    #[test]
    fn test_resolve_uses_defaults() {
        let request = PageRequest::resolve(&PagingParams::default(), &config());
        assert_eq!(request.offset(), 0);
        assert_eq!(request.limit(), 25);
    }

    #[test]
    fn test_resolve_prefers_request_values() {
        let params = PagingParams::new(Some(10), Some(5));
        let request = PageRequest::resolve(&params, &config());
        assert_eq!(request.offset(), 10);
        assert_eq!(request.limit(), 5);
    }

    #[test]
    fn test_resolve_clamps() {
        let params = PagingParams::new(Some(-3), Some(5000));
        let request = PageRequest::resolve(&params, &config());
        assert_eq!(request.offset(), 0);
        assert_eq!(request.limit(), 100);

        let params = PagingParams::new(None, Some(0));
        assert_eq!(PageRequest::resolve(&params, &config()).limit(), 1);
    }

    #[test]
    fn test_resolve_leaves_params_untouched() {
        let params = PagingParams::new(None, None);
        let _ = PageRequest::resolve(&params, &config());
        assert_eq!(params, PagingParams::new(None, None));
    }

    #[test]
    fn test_paginate_total_is_pre_truncation() {
        let items: Vec<i32> = (0..10).collect();
        let page = paginate(items, &PageRequest::new(5, 3));

        assert_eq!(page.items, vec![5, 6, 7]);
        assert_eq!(page.total_size, 10);
        assert!(page.has_next());
        assert!(page.has_previous());
        assert_eq!(page.next_offset(), Some(8));
        assert_eq!(page.previous_offset(), Some(2));
    }

    #[test]
    fn test_paginate_total_independent_of_window() {
        for offset in 0..12 {
            for limit in 1..12 {
                let items: Vec<i32> = (0..10).collect();
                let page = paginate(items, &PageRequest::new(offset, limit));
                assert_eq!(page.total_size, 10);
                assert!(page.len() <= limit.min(10usize.saturating_sub(offset)));
            }
        }
    }

    #[test]
    fn test_paginate_past_end() {
        let page = paginate(vec![1, 2, 3], &PageRequest::new(7, 2));
        assert!(page.is_empty());
        assert_eq!(page.total_size, 3);
        assert!(!page.has_next());
    }

    #[test]
    fn test_map_keeps_metadata() {
        let page = paginate(vec![1, 2, 3], &PageRequest::new(1, 1)).map(|n| n * 10);
        assert_eq!(page.items, vec![20]);
        assert_eq!(page.total_size, 3);
        assert_eq!(page.offset, 1);
    }
}
