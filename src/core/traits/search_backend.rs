use crate::core::errors::Result;
use crate::core::models::page::SearchPage;
use crate::core::models::query::StructuredQuery;

/// Port for the event-store search transport.
///
/// Implementations live in `adapters::backend` (e.g. HttpBackend). The
/// core layer only depends on this trait, never on a concrete transport.
/// A call submits one structured query against a named index and doctype
/// and blocks until one page of raw hit documents (or an error) comes
/// back; an empty page ends pagination for that index.
pub trait SearchBackend {
    /// Submit `query` against `index`/`doctype` and return one page.
    fn search(&self, index: &str, doctype: &str, query: &StructuredQuery) -> Result<SearchPage>;
}
