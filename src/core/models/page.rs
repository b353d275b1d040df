/// One page of raw hit documents returned by the search backend.
///
/// `hits` holds each hit's source document as decoded JSON. An empty
/// page signals the end of pagination for an index.
#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    pub hits: Vec<serde_json::Value>,
}
