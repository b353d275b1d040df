use crate::core::models::criteria::SearchMode;
use crate::core::models::event::Event;

/// Timestamp prefix for every rendered line.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format the result set as one human-readable line per event, in
/// result order (backend sort order: ascending utctimestamp within each
/// index, indices in chronological order).
pub fn render(events: &[Event], mode: SearchMode) -> Vec<String> {
    events
        .iter()
        .map(|event| match mode {
            SearchMode::Audit => audit_line(event),
            SearchMode::Syslog => syslog_line(event),
        })
        .collect()
}

fn audit_line(event: &Event) -> String {
    let mut descriptor = String::from("unknown audit event");
    if event.category == "execve" {
        let origuser = if event.details.originaluser.is_empty() {
            "none"
        } else {
            event.details.originaluser.as_str()
        };
        descriptor = format!("[execve] ({}/{})", origuser, event.details.user);
        if !event.details.command.is_empty() {
            descriptor.push_str(&format!(" command:{:?}", event.details.command));
        }
        if !event.details.processname.is_empty() {
            descriptor.push_str(&format!(" proc:{:?}", event.details.processname));
        }
        if !event.details.path.is_empty() {
            descriptor.push_str(&format!(" path:{:?}", event.details.path));
        }
    }
    format!(
        "{} {} {}",
        event.timestamp.format(TIMESTAMP_FORMAT),
        event.hostname,
        descriptor
    )
}

fn syslog_line(event: &Event) -> String {
    let descriptor = if event.summary.is_empty() {
        "[syslog] unknown syslog event".to_string()
    } else {
        format!("[syslog] {}", event.summary)
    };
    format!(
        "{} {} {}",
        event.timestamp.format(TIMESTAMP_FORMAT),
        event.details.hostname,
        descriptor
    )
}
