use crate::core::errors::{Result, SearchError};
use crate::core::models::criteria::SearchCriteria;
use crate::core::models::event::Event;
use crate::core::models::query::StructuredQuery;
use crate::core::services::index_enumerator;
use crate::core::traits::search_backend::SearchBackend;

/// Run the full search: every day index in the criteria's range, in
/// order, paginating each until the backend returns an empty page.
///
/// Events accumulate across indices in one caller-owned collection.
/// Any request or decode failure aborts the remaining indices; nothing
/// accumulated so far is returned in that case.
pub fn run_search(
    backend: &dyn SearchBackend,
    criteria: &SearchCriteria,
    query: &StructuredQuery,
) -> Result<Vec<Event>> {
    let mut results = Vec::new();
    for index in index_enumerator::enumerate_indices(criteria.start, criteria.end) {
        fetch_index(
            backend,
            query,
            &index,
            criteria.mode.doctype(),
            &mut results,
        )?;
    }
    Ok(results)
}

/// Paginate one index, appending normalized events to `results`.
///
/// Only an empty page terminates the loop; a short page keeps going,
/// since the backend may still have documents at the next offset.
fn fetch_index(
    backend: &dyn SearchBackend,
    query: &StructuredQuery,
    index: &str,
    doctype: &str,
    results: &mut Vec<Event>,
) -> Result<()> {
    let mut page_query = query.clone();
    page_query.from = 0;
    loop {
        let page = backend.search(index, doctype, &page_query)?;
        if page.hits.is_empty() {
            return Ok(());
        }
        for source in page.hits {
            let mut event: Event =
                serde_json::from_value(source).map_err(|e| SearchError::DecodeFailed {
                    index: index.to_string(),
                    detail: e.to_string(),
                })?;
            event.normalize();
            results.push(event);
        }
        page_query.advance_page();
    }
}
