use serde::Deserialize;

use crate::core::errors::{Result, SearchError};
use crate::core::models::page::SearchPage;
use crate::core::models::query::StructuredQuery;
use crate::core::traits::search_backend::SearchBackend;

/// Port used when the configured host does not name one.
const DEFAULT_ES_PORT: u16 = 9200;

/// HTTP implementation of [`SearchBackend`] against an
/// Elasticsearch-compatible endpoint.
///
/// Each search POSTs the query document to
/// `<base>/<index>/<doctype>/_search` and blocks on a current-thread
/// runtime until the page arrives. No request timeout is set: the run
/// waits for the backend or fails on a connection error.
pub struct HttpBackend {
    base_url: String,
    runtime: tokio::runtime::Runtime,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(eshost: &str) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| SearchError::BackendUnavailable {
                reason: format!("failed to create async runtime: {e}"),
            })?;

        let client = reqwest::Client::builder()
            .user_agent(format!("mozdefsearch/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SearchError::BackendUnavailable {
                reason: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            base_url: base_url_for(eshost),
            runtime,
            client,
        })
    }
}

/// Envelope of an Elasticsearch search response; only the hit sources
/// are of interest.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: SearchHits,
}

#[derive(Debug, Deserialize)]
struct SearchHits {
    #[serde(default)]
    hits: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(rename = "_source")]
    source: serde_json::Value,
}

impl SearchBackend for HttpBackend {
    fn search(&self, index: &str, doctype: &str, query: &StructuredQuery) -> Result<SearchPage> {
        let url = format!("{}/{}/{}/_search", self.base_url, index, doctype);
        self.runtime.block_on(async {
            let resp = self
                .client
                .post(&url)
                .json(query)
                .send()
                .await
                .map_err(|e| SearchError::RequestFailed {
                    index: index.to_string(),
                    reason: e.to_string(),
                })?;

            if !resp.status().is_success() {
                return Err(SearchError::RequestFailed {
                    index: index.to_string(),
                    reason: format!("backend returned status {}", resp.status()),
                });
            }

            let body: SearchResponse =
                resp.json().await.map_err(|e| SearchError::RequestFailed {
                    index: index.to_string(),
                    reason: format!("malformed search response: {e}"),
                })?;

            Ok(SearchPage {
                hits: body.hits.hits.into_iter().map(|h| h.source).collect(),
            })
        })
    }
}

/// Normalize the configured host into a base URL. A bare hostname gets
/// the conventional Elasticsearch port; an explicit port or scheme is
/// respected.
fn base_url_for(eshost: &str) -> String {
    if eshost.contains("://") {
        eshost.trim_end_matches('/').to_string()
    } else if eshost.contains(':') {
        format!("http://{eshost}")
    } else {
        format!("http://{eshost}:{DEFAULT_ES_PORT}")
    }
}
