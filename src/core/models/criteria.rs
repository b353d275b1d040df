use chrono::{DateTime, Utc};

use crate::core::errors::{Result, SearchError};

/// Which class of events to search for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Audit,
    Syslog,
}

impl SearchMode {
    /// The backend document type queried for this mode.
    pub fn doctype(&self) -> &'static str {
        match self {
            SearchMode::Audit => "auditd",
            SearchMode::Syslog => "event",
        }
    }
}

/// What to search for: a UTC date range, a mode, and an optional
/// hostname regexp. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct SearchCriteria {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub mode: SearchMode,
    /// Hostname regexp, passed to the backend verbatim. `None` means no
    /// hostname filtering clauses are added to the query.
    pub hostname_pattern: Option<String>,
}

impl SearchCriteria {
    /// Build criteria, rejecting a reversed date range.
    ///
    /// An empty hostname pattern is normalized to `None`.
    pub fn new(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        mode: SearchMode,
        hostname_pattern: Option<String>,
    ) -> Result<Self> {
        if start > end {
            return Err(SearchError::InvalidRange { start, end });
        }
        Ok(Self {
            start,
            end,
            mode,
            hostname_pattern: hostname_pattern.filter(|p| !p.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn ts(s: &str) -> DateTime<Utc> {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
            .unwrap()
            .and_utc()
    }

    #[test]
    fn accepts_ordered_range() {
        let c = SearchCriteria::new(
            ts("2016-01-01 00:00:00"),
            ts("2016-01-02 00:00:00"),
            SearchMode::Audit,
            None,
        )
        .unwrap();
        assert!(c.hostname_pattern.is_none());
    }

    #[test]
    fn rejects_reversed_range() {
        let result = SearchCriteria::new(
            ts("2016-01-02 00:00:00"),
            ts("2016-01-01 00:00:00"),
            SearchMode::Audit,
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn empty_pattern_normalizes_to_none() {
        let c = SearchCriteria::new(
            ts("2016-01-01 00:00:00"),
            ts("2016-01-01 00:00:00"),
            SearchMode::Syslog,
            Some(String::new()),
        )
        .unwrap();
        assert!(c.hostname_pattern.is_none());
    }

    #[test]
    fn doctype_per_mode() {
        assert_eq!(SearchMode::Audit.doctype(), "auditd");
        assert_eq!(SearchMode::Syslog.doctype(), "event");
    }
}
