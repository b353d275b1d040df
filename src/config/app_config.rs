use crate::core::errors::{Result, SearchError};

/// Runtime configuration for a search run.
///
/// The backend host comes from the `MOZDEFESHOST` environment variable,
/// or the `--eshost` flag which overrides it. It must be known before any
/// query is built or executed, even for a dry run.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Elasticsearch host, `host` or `host:port`.
    pub eshost: String,
}

impl SearchConfig {
    /// Resolve the configuration from the CLI-provided host value.
    pub fn resolve(eshost: Option<&str>) -> Result<Self> {
        match eshost {
            Some(host) if !host.is_empty() => Ok(Self {
                eshost: host.to_string(),
            }),
            _ => Err(SearchError::EsHostNotSet),
        }
    }
}
