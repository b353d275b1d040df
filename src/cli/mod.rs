pub mod commands;
pub mod output;

use clap::{ArgGroup, Parser};

use crate::core::models::criteria::SearchMode;

/// Search MozDef security events from the command line.
#[derive(Parser, Debug)]
#[command(name = "mozdefsearch", version, about, long_about = None)]
#[command(group = ArgGroup::new("mode").required(true).args(["audit", "syslog"]))]
pub struct Cli {
    /// Search for audit events
    #[arg(short = 'a', long)]
    pub audit: bool,

    /// Search for syslog events
    #[arg(short = 's', long)]
    pub syslog: bool,

    /// Start date for the search in UTC (yyyy-mm-dd hh:mm:ss)
    #[arg(short = 'b', long = "begin", value_name = "DATE")]
    pub begin: String,

    /// End date for the search in UTC (defaults to now)
    #[arg(short = 'e', long = "end", value_name = "DATE")]
    pub end: Option<String>,

    /// Print the constructed query as indented JSON and exit without searching
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,

    /// Only match events whose hostname matches this regexp
    #[arg(short = 'H', long = "hostmatch", value_name = "PATTERN")]
    pub hostmatch: Option<String>,

    /// MozDef Elasticsearch host (host[:port])
    #[arg(long, env = "MOZDEFESHOST", value_name = "HOST")]
    pub eshost: Option<String>,
}

impl Cli {
    /// The event-type mode selected by `-a`/`-s`.
    ///
    /// The clap ArgGroup guarantees exactly one of the two flags is set.
    pub fn mode(&self) -> SearchMode {
        if self.audit {
            SearchMode::Audit
        } else {
            SearchMode::Syslog
        }
    }
}
