use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::model::Tally;

/// Urgency band for a dated item relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Overdue,
    Critical,
    Warning,
    Normal,
}

/// Whole days from `now` to midnight of `target`, floored. Negative once
/// the target date has passed.
pub fn days_remaining(now: DateTime<Utc>, target: NaiveDate) -> i64 {
    let target_midnight = target
        .and_hms_opt(0, 0, 0)
        .map(|t| t.and_utc())
        .unwrap_or(now);
    (target_midnight - now).num_seconds().div_euclid(86_400)
}

/// A date counts as past only when it is strictly before today; an item
/// dated today is still current.
pub fn is_past(now: DateTime<Utc>, target: NaiveDate) -> bool {
    target < now.date_naive()
}

/// Classifies a due date. Completed items are never overdue and carry no
/// urgency regardless of their date.
pub fn classify_due(now: DateTime<Utc>, due: NaiveDate, completed: bool) -> Urgency {
    if completed {
        return Urgency::Normal;
    }
    if is_past(now, due) {
        return Urgency::Overdue;
    }
    let days = days_remaining(now, due);
    if days <= 2 {
        Urgency::Critical
    } else if days <= 5 {
        Urgency::Warning
    } else {
        Urgency::Normal
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceBand {
    Danger,
    Moderate,
    Good,
}

/// `None` when the bucket has no recorded classes.
pub fn attendance_percent(tally: Tally) -> Option<f64> {
    if tally.total == 0 {
        return None;
    }
    Some(100.0 * f64::from(tally.present) / f64::from(tally.total))
}

pub fn attendance_band(percent: f64) -> AttendanceBand {
    if percent < 75.0 {
        AttendanceBand::Danger
    } else if percent < 85.0 {
        AttendanceBand::Moderate
    } else {
        AttendanceBand::Good
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallAttendance {
    pub present: u32,
    pub total: u32,
    pub percent: Option<f64>,
}

/// Portfolio aggregate: sum numerators and denominators across subjects,
/// then divide once. Never an average of per-subject percentages.
pub fn overall_attendance<'a, I>(tallies: I) -> OverallAttendance
where
    I: IntoIterator<Item = &'a Tally>,
{
    let mut present: u32 = 0;
    let mut total: u32 = 0;
    for tally in tallies {
        present += tally.present;
        total += tally.total;
    }
    OverallAttendance {
        present,
        total,
        percent: attendance_percent(Tally { present, total }),
    }
}

/// Case-insensitive substring match over any of the given fields. An empty
/// or whitespace-only query matches everything.
pub fn matches_query(query: &str, fields: &[&str]) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

/// Entries dated today or later, stable-sorted ascending by date and cut to
/// `limit`. Equal dates keep their original relative order.
pub fn upcoming_by_date<'a, T, F>(items: &'a [T], now: DateTime<Utc>, date_of: F, limit: usize) -> Vec<&'a T>
where
    F: Fn(&T) -> NaiveDate,
{
    let mut upcoming: Vec<&T> = items.iter().filter(|item| !is_past(now, date_of(item))).collect();
    upcoming.sort_by_key(|item| date_of(item));
    upcoming.truncate(limit);
    upcoming
}

pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Overall GPA is the arithmetic mean of per-result GPAs.
pub fn mean_gpa<I>(gpas: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0;
    let mut count: usize = 0;
    for gpa in gpas {
        sum += gpa;
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn noon(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn days_remaining_floors_partial_days() {
        let now = noon(2025, 1, 20);
        // Tomorrow midnight is half a day away: floor(0.5d) = 0.
        assert_eq!(days_remaining(now, day(2025, 1, 21)), 0);
        assert_eq!(days_remaining(now, day(2025, 1, 23)), 2);
        // Yesterday midnight is 1.5 days back: floor(-1.5d) = -2.
        assert_eq!(days_remaining(now, day(2025, 1, 19)), -2);
    }

    #[test]
    fn today_is_not_past() {
        let now = noon(2025, 1, 20);
        assert!(!is_past(now, day(2025, 1, 20)));
        assert!(is_past(now, day(2025, 1, 19)));
        assert!(!is_past(now, day(2025, 1, 21)));
    }

    #[test]
    fn overdue_applies_only_to_unfinished_work() {
        let now = noon(2025, 1, 20);
        assert_eq!(classify_due(now, day(2025, 1, 15), false), Urgency::Overdue);
        assert_eq!(classify_due(now, day(2025, 1, 15), true), Urgency::Normal);
        assert_eq!(classify_due(now, day(2025, 1, 22), false), Urgency::Critical);
        assert_eq!(classify_due(now, day(2025, 1, 25), false), Urgency::Warning);
        assert_eq!(classify_due(now, day(2025, 2, 10), false), Urgency::Normal);
    }

    #[test]
    fn attendance_percent_guards_empty_bucket() {
        assert_eq!(attendance_percent(Tally { present: 0, total: 0 }), None);
        let pct = attendance_percent(Tally { present: 3, total: 4 }).unwrap();
        assert!((pct - 75.0).abs() < 1e-9);
    }

    #[test]
    fn attendance_bands_split_at_75_and_85() {
        assert_eq!(attendance_band(74.99), AttendanceBand::Danger);
        assert_eq!(attendance_band(75.0), AttendanceBand::Moderate);
        assert_eq!(attendance_band(84.99), AttendanceBand::Moderate);
        assert_eq!(attendance_band(85.0), AttendanceBand::Good);
    }

    #[test]
    fn overall_attendance_sums_before_dividing() {
        // Mean of percentages would be 75%; the correct aggregate is not.
        let tallies = [
            Tally { present: 1, total: 2 },   // 50%
            Tally { present: 100, total: 100 }, // 100%
        ];
        let overall = overall_attendance(tallies.iter());
        assert_eq!(overall.present, 101);
        assert_eq!(overall.total, 102);
        let pct = overall.percent.unwrap();
        assert!((pct - (100.0 * 101.0 / 102.0)).abs() < 1e-9);
        assert!((pct - 75.0).abs() > 1.0);
    }

    #[test]
    fn query_match_is_case_insensitive_substring() {
        assert!(matches_query("math", &["Integral Transforms", "Mathematics"]));
        assert!(matches_query("  MATH ", &["Mathematics"]));
        assert!(!matches_query("math", &["Physics Lab Manual", "Physics"]));
        assert!(matches_query("", &["anything"]));
    }

    #[test]
    fn upcoming_excludes_past_sorts_ascending_and_truncates() {
        let now = noon(2025, 1, 20);
        let dates = [
            day(2025, 2, 10),
            day(2025, 1, 22),
            day(2025, 1, 25),
            day(2025, 1, 5),  // past, chronologically nearest of all
            day(2025, 1, 30),
        ];
        let top = upcoming_by_date(&dates, now, |d| *d, 3);
        assert_eq!(top, vec![&day(2025, 1, 22), &day(2025, 1, 25), &day(2025, 1, 30)]);
    }

    #[test]
    fn upcoming_ties_keep_insertion_order() {
        let now = noon(2025, 1, 20);
        let items = [("a", day(2025, 1, 22)), ("b", day(2025, 1, 22))];
        let top = upcoming_by_date(&items, now, |(_, d)| *d, 2);
        let names: Vec<&str> = top.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn mean_gpa_handles_empty_and_averages() {
        assert_eq!(mean_gpa(Vec::<f64>::new()), None);
        let gpa = mean_gpa([9.0, 9.5, 8.0, 8.5, 7.5]).unwrap();
        assert!((gpa - 8.5).abs() < 1e-9);
    }
}
