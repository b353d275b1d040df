use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::adapters::backend::http_backend::HttpBackend;
use crate::cli::Cli;
use crate::config::app_config::SearchConfig;
use crate::core::errors::{Result, SearchError};
use crate::core::models::criteria::SearchCriteria;
use crate::core::services::{query_builder, renderer, search_runner};

/// Date format accepted on the command line, interpreted as UTC.
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Execute the search command.
///
/// Resolves configuration and criteria, builds the query, then either
/// prints it (`--dry-run`) or runs the paginated search and renders one
/// line per event.
pub fn execute(args: &Cli) -> Result<()> {
    let config = SearchConfig::resolve(args.eshost.as_deref())?;

    let start = parse_date(&args.begin)?;
    let end = match args.end.as_deref() {
        Some(s) => parse_date(s)?,
        None => Utc::now(),
    };
    let criteria = SearchCriteria::new(start, end, args.mode(), args.hostmatch.clone())?;

    let query = query_builder::build_query(&criteria);

    if args.dry_run {
        println!("{}", serde_json::to_string_pretty(&query)?);
        return Ok(());
    }

    let backend = HttpBackend::new(&config.eshost)?;
    let events = search_runner::run_search(&backend, &criteria, &query)?;

    for line in renderer::render(&events, criteria.mode) {
        println!("{line}");
    }

    Ok(())
}

/// Parse a `yyyy-mm-dd hh:mm:ss` date string into a UTC instant.
fn parse_date(input: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(input, DATE_FORMAT)
        .map(|dt| Utc.from_utc_datetime(&dt))
        .map_err(|_| SearchError::InvalidDate {
            input: input.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_date() {
        let dt = parse_date("2016-01-15 08:30:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2016-01-15T08:30:00+00:00");
    }

    #[test]
    fn rejects_date_without_time() {
        let err = parse_date("2016-01-15").unwrap_err();
        assert!(err.to_string().contains("2016-01-15"));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_date("not a date").is_err());
    }
}
