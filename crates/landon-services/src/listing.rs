//! Shared list-endpoint flow: compile the query, resolve paging, execute.

use landon_core::config::PagingConfig;
use landon_core::{LandonResult, PageRequest, PageResult};
use landon_queries::{QueryParams, Resource, ResourceQuery};
use tracing::debug;

pub fn list_page<T: Resource>(
    items: Vec<T>,
    params: &QueryParams,
    paging: &PagingConfig,
) -> LandonResult<PageResult<T>> {
    let query = ResourceQuery::<T>::from_params(params)?;
    let page = PageRequest::resolve(&params.paging(), paging);

    debug!(
        resource = T::registry().type_name(),
        candidates = items.len(),
        filters = query.filter().len(),
        sorts = query.order().len(),
        offset = page.offset(),
        limit = page.limit(),
        "listing"
    );
    Ok(query.execute(items, &page))
}
