use std::collections::BTreeMap;

use chrono::SecondsFormat;

use crate::core::models::criteria::{SearchCriteria, SearchMode};
use crate::core::models::query::{BoolQuery, QueryClause, QueryRoot, StructuredQuery, DOCS_PER_SEARCH};

/// Fields the hostname pattern is matched against, in clause order.
const HOSTNAME_FIELDS: [&str; 3] = ["hostname", "details.dhost", "details.hostname"];

/// Translate search criteria into the backend query document.
///
/// Pure and deterministic: no I/O, and the same criteria always produce
/// an identical document. The hostname pattern is interpolated into the
/// query-string clauses verbatim; a malformed regexp surfaces as a
/// backend query error, not a local one.
pub fn build_query(criteria: &SearchCriteria) -> StructuredQuery {
    let mut boolean = BoolQuery {
        minimum_should_match: 1,
        ..Default::default()
    };

    boolean.must.push(QueryClause::range_within(
        "utctimestamp",
        criteria.start.to_rfc3339_opts(SecondsFormat::Secs, true),
        criteria.end.to_rfc3339_opts(SecondsFormat::Secs, true),
    ));

    if let Some(pattern) = &criteria.hostname_pattern {
        for field in HOSTNAME_FIELDS {
            boolean
                .should
                .push(QueryClause::query_string(format!("{field}: /{pattern}/")));
        }
    }

    match criteria.mode {
        SearchMode::Audit => {
            boolean.must.push(QueryClause::match_field("_type", "auditd"));
        }
        SearchMode::Syslog => {
            boolean.must.push(QueryClause::match_field("_type", "event"));
            boolean
                .must
                .push(QueryClause::match_field("category", "syslog"));
        }
    }

    StructuredQuery {
        from: 0,
        size: DOCS_PER_SEARCH,
        sort: BTreeMap::from([("utctimestamp".to_string(), "asc".to_string())]),
        query: QueryRoot { boolean },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde_json::json;

    fn ts(s: &str) -> DateTime<Utc> {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
            .unwrap()
            .and_utc()
    }

    fn criteria(mode: SearchMode, pattern: Option<&str>) -> SearchCriteria {
        SearchCriteria::new(
            ts("2016-01-01 00:00:00"),
            ts("2016-01-02 12:00:00"),
            mode,
            pattern.map(String::from),
        )
        .unwrap()
    }

    #[test]
    fn audit_query_has_range_and_type_clause() {
        let query = build_query(&criteria(SearchMode::Audit, None));
        assert_eq!(query.from, 0);
        assert_eq!(query.size, DOCS_PER_SEARCH);
        assert_eq!(query.sort.get("utctimestamp").unwrap(), "asc");

        let must = &query.query.boolean.must;
        assert_eq!(must.len(), 2);
        assert_eq!(
            serde_json::to_value(&must[0]).unwrap(),
            json!({"range": {"utctimestamp": {
                "gte": "2016-01-01T00:00:00Z",
                "lte": "2016-01-02T12:00:00Z"
            }}})
        );
        assert_eq!(
            serde_json::to_value(&must[1]).unwrap(),
            json!({"match": {"_type": "auditd"}})
        );
    }

    #[test]
    fn syslog_query_requires_type_and_category() {
        let query = build_query(&criteria(SearchMode::Syslog, None));
        let must = &query.query.boolean.must;
        assert_eq!(must.len(), 3);
        assert_eq!(
            serde_json::to_value(&must[1]).unwrap(),
            json!({"match": {"_type": "event"}})
        );
        assert_eq!(
            serde_json::to_value(&must[2]).unwrap(),
            json!({"match": {"category": "syslog"}})
        );
    }

    #[test]
    fn no_pattern_means_no_should_clauses() {
        let query = build_query(&criteria(SearchMode::Audit, None));
        assert!(query.query.boolean.should.is_empty());
        assert_eq!(query.query.boolean.minimum_should_match, 1);
    }

    #[test]
    fn pattern_adds_three_should_clauses() {
        let query = build_query(&criteria(SearchMode::Audit, Some("web.*")));
        let should = &query.query.boolean.should;
        assert_eq!(should.len(), 3);
        assert_eq!(query.query.boolean.minimum_should_match, 1);
        assert_eq!(
            serde_json::to_value(&should[0]).unwrap(),
            json!({"query_string": {"query": "hostname: /web.*/"}})
        );
        assert_eq!(
            serde_json::to_value(&should[1]).unwrap(),
            json!({"query_string": {"query": "details.dhost: /web.*/"}})
        );
        assert_eq!(
            serde_json::to_value(&should[2]).unwrap(),
            json!({"query_string": {"query": "details.hostname: /web.*/"}})
        );
    }

    #[test]
    fn building_twice_is_deterministic() {
        let c = criteria(SearchMode::Syslog, Some("bastion[0-9]+"));
        let a = serde_json::to_value(build_query(&c)).unwrap();
        let b = serde_json::to_value(build_query(&c)).unwrap();
        assert_eq!(a, b);
    }
}
