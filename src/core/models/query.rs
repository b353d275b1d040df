use std::collections::BTreeMap;

use serde::Serialize;

/// Number of documents requested per search page.
pub const DOCS_PER_SEARCH: u64 = 100;

/// One boolean-query clause. Exactly one of the variants is set; the
/// others are omitted from serialization.
#[derive(Debug, Clone, Default, Serialize)]
pub struct QueryClause {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_string: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#match: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<BTreeMap<String, BTreeMap<String, String>>>,
}

impl QueryClause {
    /// A free-text `query_string` clause.
    pub fn query_string(query: impl Into<String>) -> Self {
        Self {
            query_string: Some(BTreeMap::from([("query".to_string(), query.into())])),
            ..Default::default()
        }
    }

    /// An exact `match` clause on one field.
    pub fn match_field(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            r#match: Some(BTreeMap::from([(field.into(), value.into())])),
            ..Default::default()
        }
    }

    /// An inclusive `range` clause on one field.
    pub fn range_within(
        field: impl Into<String>,
        gte: impl Into<String>,
        lte: impl Into<String>,
    ) -> Self {
        let bounds = BTreeMap::from([
            ("gte".to_string(), gte.into()),
            ("lte".to_string(), lte.into()),
        ]);
        Self {
            range: Some(BTreeMap::from([(field.into(), bounds)])),
            ..Default::default()
        }
    }
}

/// The `bool` query: required clauses, alternative clauses, and the
/// minimum number of alternatives that must match.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BoolQuery {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub must: Vec<QueryClause>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub should: Vec<QueryClause>,

    pub minimum_should_match: u32,
}

/// Wrapper producing the `{"query": {"bool": ...}}` nesting the backend
/// expects.
#[derive(Debug, Clone, Serialize)]
pub struct QueryRoot {
    #[serde(rename = "bool")]
    pub boolean: BoolQuery,
}

/// A complete search request document: pagination window, sort directive,
/// and the boolean query. Cloned per index with the offset reset, then
/// advanced page by page.
#[derive(Debug, Clone, Serialize)]
pub struct StructuredQuery {
    pub from: u64,
    pub size: u64,
    pub sort: BTreeMap<String, String>,
    pub query: QueryRoot,
}

impl StructuredQuery {
    /// Advance the pagination offset by one page.
    pub fn advance_page(&mut self) {
        self.from += self.size;
    }
}
