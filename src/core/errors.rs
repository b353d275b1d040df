use chrono::{DateTime, Utc};

/// All domain errors for mozdefsearch.
///
/// Every error is fatal to the run: it propagates to the top level,
/// is printed once, and the process exits non-zero. No partial results
/// are rendered after a mid-run failure.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error(
        "MOZDEFESHOST environment variable not set\n\n  \
         Set it to the MozDef Elasticsearch host, e.g.:\n    \
         export MOZDEFESHOST=mozdef.example.com:9200\n  \
         (or pass --eshost on the command line)"
    )]
    EsHostNotSet,

    #[error(
        "Invalid date: '{input}'\n\n  \
         Expected UTC format: yyyy-mm-dd hh:mm:ss, e.g. 2016-01-15 08:30:00"
    )]
    InvalidDate { input: String },

    #[error("Invalid search range: start date {start} is after end date {end}")]
    InvalidRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("Search backend unavailable: {reason}")]
    BackendUnavailable { reason: String },

    #[error("Search against index '{index}' failed: {reason}")]
    RequestFailed { index: String, reason: String },

    #[error("Could not decode an event document from index '{index}': {detail}")]
    DecodeFailed { index: String, detail: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SearchError>;
