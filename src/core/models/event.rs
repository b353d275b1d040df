use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Detail fields that participate in alias resolution.
#[derive(Debug, Clone, Copy)]
enum DetailField {
    User,
    DUser,
    Path,
    Fname,
    OriginalUser,
    SUser,
    ProcessName,
    DProc,
}

/// Alias resolution table: (canonical, alias) pairs, applied in order.
/// The alias only fills the canonical field when it is empty.
const DETAIL_FALLBACKS: &[(DetailField, DetailField)] = &[
    (DetailField::User, DetailField::DUser),
    (DetailField::Path, DetailField::Fname),
    (DetailField::OriginalUser, DetailField::SUser),
    (DetailField::ProcessName, DetailField::DProc),
];

/// The `details` sub-document of a MozDef event, with the raw
/// (potentially aliased) field names as they appear on the wire.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct EventDetails {
    pub hostname: String,
    pub command: String,
    pub dhost: String,
    pub dproc: String,
    pub duser: String,
    pub suser: String,
    pub fname: String,
    /// Rule name, e.g. "Unix Exec".
    pub name: String,
    pub processname: String,
    pub originaluser: String,
    pub user: String,
    pub path: String,
}

impl EventDetails {
    fn get(&self, field: DetailField) -> &str {
        match field {
            DetailField::User => &self.user,
            DetailField::DUser => &self.duser,
            DetailField::Path => &self.path,
            DetailField::Fname => &self.fname,
            DetailField::OriginalUser => &self.originaluser,
            DetailField::SUser => &self.suser,
            DetailField::ProcessName => &self.processname,
            DetailField::DProc => &self.dproc,
        }
    }

    fn get_mut(&mut self, field: DetailField) -> &mut String {
        match field {
            DetailField::User => &mut self.user,
            DetailField::DUser => &mut self.duser,
            DetailField::Path => &mut self.path,
            DetailField::Fname => &mut self.fname,
            DetailField::OriginalUser => &mut self.originaluser,
            DetailField::SUser => &mut self.suser,
            DetailField::ProcessName => &mut self.processname,
            DetailField::DProc => &mut self.dproc,
        }
    }

    /// Apply the fallback table to this details record.
    fn resolve_aliases(&mut self) {
        for &(canonical, alias) in DETAIL_FALLBACKS {
            if self.get(canonical).is_empty() && !self.get(alias).is_empty() {
                let value = self.get(alias).to_string();
                *self.get_mut(canonical) = value;
            }
        }
    }
}

/// One security event as returned by the backend.
///
/// Deserialization is tolerant: absent fields decode to empty strings
/// (timestamps to the Unix epoch), so a sparse document is not a decode
/// error. Call [`Event::normalize`] before using the record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Event {
    pub category: String,
    pub hostname: String,
    pub timestamp: DateTime<Utc>,
    pub utctimestamp: DateTime<Utc>,
    pub summary: String,
    pub details: EventDetails,
}

impl Default for Event {
    fn default() -> Self {
        Self {
            category: String::new(),
            hostname: String::new(),
            timestamp: DateTime::UNIX_EPOCH,
            utctimestamp: DateTime::UNIX_EPOCH,
            summary: String::new(),
            details: EventDetails::default(),
        }
    }
}

impl Event {
    /// Resolve field aliases into their canonical fields and clean up
    /// the summary. Idempotent: already-resolved fields are never
    /// overwritten.
    pub fn normalize(&mut self) {
        if self.hostname.is_empty() && !self.details.dhost.is_empty() {
            self.hostname = self.details.dhost.clone();
        }

        self.details.resolve_aliases();

        if self.details.name == "Unix Exec" {
            self.category = "execve".to_string();
        }

        self.summary = self
            .summary
            .trim_matches(|c| c == ' ' || c == '\n')
            .to_string();
    }
}
