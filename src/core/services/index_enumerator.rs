use chrono::{DateTime, Duration, Utc};

/// The event store is partitioned into one index per calendar day.
fn index_name(day: DateTime<Utc>) -> String {
    format!("events-{}", day.format("%Y%m%d"))
}

/// One index name per calendar day touched by `[start, end]`, in date
/// order. Never empty: a single-day range yields exactly one entry.
pub fn enumerate_indices(start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<String> {
    let mut indices = Vec::new();
    let mut cursor = start;
    loop {
        indices.push(index_name(cursor));
        if end - cursor < Duration::hours(24) {
            let last = index_name(end);
            // The walk is date-ascending, so only the last entry can collide.
            if indices.last() != Some(&last) {
                indices.push(last);
            }
            break;
        }
        cursor += Duration::hours(24);
    }
    indices
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
    fn same_instant_yields_one_index() {
        let d = ts("2016-01-01 10:00:00");
        assert_eq!(enumerate_indices(d, d), vec!["events-20160101"]);
    }

    #[test]
    fn same_day_yields_one_index() {
        let indices = enumerate_indices(ts("2016-01-01 00:00:00"), ts("2016-01-01 23:59:59"));
        assert_eq!(indices, vec!["events-20160101"]);
    }

    #[test]
    fn short_overnight_range_yields_both_days() {
        let indices = enumerate_indices(ts("2016-01-01 23:00:00"), ts("2016-01-02 01:00:00"));
        assert_eq!(indices, vec!["events-20160101", "events-20160102"]);
    }

    #[test]
    fn exact_24h_boundary_dedups_the_end_day() {
        let indices = enumerate_indices(ts("2016-01-01 00:00:00"), ts("2016-01-02 00:00:00"));
        assert_eq!(indices, vec!["events-20160101", "events-20160102"]);
    }

    #[test]
    fn multi_day_span_covers_every_day() {
        let indices = enumerate_indices(ts("2016-01-01 12:00:00"), ts("2016-01-03 06:00:00"));
        assert_eq!(
            indices,
            vec!["events-20160101", "events-20160102", "events-20160103"]
        );
    }

    #[test]
    fn month_boundary_is_walked_correctly() {
        let indices = enumerate_indices(ts("2016-01-30 08:00:00"), ts("2016-02-02 08:00:00"));
        assert_eq!(
            indices,
            vec![
                "events-20160130",
                "events-20160131",
                "events-20160201",
                "events-20160202"
            ]
        );
    }

    #[test]
    fn output_is_ascending_and_duplicate_free() {
        let indices = enumerate_indices(ts("2016-03-01 03:00:00"), ts("2016-03-10 21:00:00"));
        assert_eq!(indices.first().unwrap(), "events-20160301");
        assert_eq!(indices.last().unwrap(), "events-20160310");
        let mut sorted = indices.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(indices, sorted);
    }
}
