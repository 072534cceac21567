//! Retention policy: the pure decision function of the sweep.
//!
//! Ages are whole calendar-date differences in the local timezone, not
//! elapsed durations: an entry modified at 23:59 is already a day old two
//! minutes later. Retention windows are expressed in operator-local days,
//! so boundary behavior near midnight follows the local zone on purpose.

use crate::client::{DirectorySummary, Entry};
use chrono::{NaiveDate, NaiveDateTime};

/// Outcome of applying the retention policy to one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Keep the entry; no further action.
    Retain,
    /// The entry is old and holds at most one object; delete it.
    Delete,
    /// The entry is an old directory still holding more than one object;
    /// descend into it and re-check once its subtree has been pruned.
    Recurse,
}

/// Whole calendar days between the entry's modification date and `today`.
pub fn age_in_days(modified: NaiveDateTime, today: NaiveDate) -> i64 {
    (today - modified.date()).num_days()
}

/// Decides what to do with one entry.
///
/// `summary` is the entry's subtree summary; callers pass
/// [`DirectorySummary::default`] for files, which yields object count 0.
/// An old directory is only deleted once its object count is down to
/// itself (1) or it has vanished entirely (0); until then it recurses.
/// Young entries are always retained, populated or not.
pub fn decide(
    entry: &Entry,
    summary: DirectorySummary,
    threshold_days: i64,
    today: NaiveDate,
) -> Verdict {
    let age = age_in_days(entry.modified, today);
    if age <= threshold_days {
        return Verdict::Retain;
    }
    if entry.is_directory && summary.object_count() > 1 {
        return Verdict::Recurse;
    }
    Verdict::Delete
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn entry(is_directory: bool, modified: &str) -> Entry {
        Entry {
            path: PathBuf::from("/data/x"),
            is_directory,
            modified: modified.parse().unwrap(),
        }
    }

    fn summary(file_count: u64, directory_count: u64) -> DirectorySummary {
        DirectorySummary {
            file_count,
            directory_count,
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn age_uses_calendar_dates_not_elapsed_time() {
        // Two minutes of wall clock, but the calendar date rolled over.
        let modified: NaiveDateTime = "2024-01-10T23:59:00".parse().unwrap();
        assert_eq!(age_in_days(modified, date("2024-01-11")), 1);
    }

    #[test]
    fn same_day_age_is_zero() {
        let modified: NaiveDateTime = "2024-01-11T00:01:00".parse().unwrap();
        assert_eq!(age_in_days(modified, date("2024-01-11")), 0);
    }

    #[test]
    fn old_file_is_deleted() {
        let e = entry(false, "2024-01-01T12:00:00");
        let verdict = decide(&e, DirectorySummary::default(), 30, date("2024-03-01"));
        assert_eq!(verdict, Verdict::Delete);
    }

    #[test]
    fn file_exactly_at_threshold_is_retained() {
        // Strictly-older semantics: age == threshold keeps the entry.
        let e = entry(false, "2024-01-01T12:00:00");
        let verdict = decide(&e, DirectorySummary::default(), 31, date("2024-02-01"));
        assert_eq!(verdict, Verdict::Retain);
    }

    #[test]
    fn young_file_is_retained() {
        let e = entry(false, "2024-02-25T12:00:00");
        let verdict = decide(&e, DirectorySummary::default(), 30, date("2024-03-01"));
        assert_eq!(verdict, Verdict::Retain);
    }

    #[test]
    fn old_populated_directory_recurses() {
        let e = entry(true, "2024-01-01T12:00:00");
        let verdict = decide(&e, summary(2, 1), 30, date("2024-03-01"));
        assert_eq!(verdict, Verdict::Recurse);
    }

    #[test]
    fn old_empty_directory_is_deleted() {
        // An empty directory counts only itself.
        let e = entry(true, "2024-01-01T12:00:00");
        let verdict = decide(&e, summary(0, 1), 30, date("2024-03-01"));
        assert_eq!(verdict, Verdict::Delete);
    }

    #[test]
    fn vanished_directory_is_deleted() {
        // NotFound on the summary call is folded into a zero count.
        let e = entry(true, "2024-01-01T12:00:00");
        let verdict = decide(&e, summary(0, 0), 30, date("2024-03-01"));
        assert_eq!(verdict, Verdict::Delete);
    }

    #[test]
    fn young_empty_directory_is_retained() {
        // Tie-break: too-young wins over empty, the entry is never deleted.
        let e = entry(true, "2024-02-25T12:00:00");
        let verdict = decide(&e, summary(0, 1), 30, date("2024-03-01"));
        assert_eq!(verdict, Verdict::Retain);
    }

    #[test]
    fn young_populated_directory_is_retained_without_descent() {
        let e = entry(true, "2024-02-25T12:00:00");
        let verdict = decide(&e, summary(5, 3), 30, date("2024-03-01"));
        assert_eq!(verdict, Verdict::Retain);
    }
}
