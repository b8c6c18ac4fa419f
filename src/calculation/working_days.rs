//! Working-day counting.
//!
//! A working day is any calendar day that is neither a Sunday nor a declared
//! exception day. This is the unit every leave balance is measured in.

use crate::models::{DateInterval, ExceptionDaySet, LocalDate};

/// Whether `date` is chargeable.
///
/// # Example
///
/// ```
/// use leave_ledger::calculation::is_working_day;
/// use leave_ledger::models::{ExceptionDaySet, LocalDate};
///
/// let none = ExceptionDaySet::new();
/// assert!(is_working_day(LocalDate::parse_iso("2025-07-26").unwrap(), &none)); // Saturday
/// assert!(!is_working_day(LocalDate::parse_iso("2025-07-27").unwrap(), &none)); // Sunday
/// ```
pub fn is_working_day(date: LocalDate, exceptions: &ExceptionDaySet) -> bool {
    !date.is_sunday() && !exceptions.contains(date)
}

/// Counts working days in a closed interval.
///
/// Both bounds are included. An empty interval (`start > end`) counts zero.
/// The result depends only on the arguments; there is no implicit "today".
///
/// # Example
///
/// ```
/// use leave_ledger::calculation::count_working_days;
/// use leave_ledger::models::{DateInterval, ExceptionDay, ExceptionDaySet, LocalDate};
///
/// let d = |s| LocalDate::parse_iso(s).unwrap();
///
/// // Monday 21 July through Wednesday 30 July 2025 crosses one Sunday.
/// let interval = DateInterval::new(d("2025-07-21"), d("2025-07-30"));
/// assert_eq!(count_working_days(&interval, &ExceptionDaySet::new()), 9);
///
/// let holidays: ExceptionDaySet = vec![ExceptionDay {
///     date: d("2025-07-25"),
///     reason: "Founders Day".to_string(),
/// }]
/// .into_iter()
/// .collect();
/// assert_eq!(count_working_days(&interval, &holidays), 8);
/// ```
pub fn count_working_days(interval: &DateInterval, exceptions: &ExceptionDaySet) -> u64 {
    interval
        .days()
        .filter(|date| is_working_day(*date, exceptions))
        .count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExceptionDay;
    use proptest::prelude::*;

    fn date(s: &str) -> LocalDate {
        LocalDate::parse_iso(s).unwrap()
    }

    fn count(start: &str, end: &str) -> u64 {
        count_working_days(
            &DateInterval::new(date(start), date(end)),
            &ExceptionDaySet::new(),
        )
    }

    fn holidays(dates: &[&str]) -> ExceptionDaySet {
        dates
            .iter()
            .map(|d| ExceptionDay {
                date: date(d),
                reason: "holiday".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_monday_to_saturday_is_six() {
        assert_eq!(count("2025-07-21", "2025-07-26"), 6);
    }

    #[test]
    fn test_full_week_excludes_sunday() {
        assert_eq!(count("2025-07-21", "2025-07-27"), 6);
    }

    #[test]
    fn test_single_sunday_is_zero() {
        assert_eq!(count("2025-07-27", "2025-07-27"), 0);
    }

    #[test]
    fn test_single_weekday_is_one() {
        assert_eq!(count("2025-07-22", "2025-07-22"), 1);
    }

    #[test]
    fn test_empty_interval_is_zero() {
        assert_eq!(count("2025-07-30", "2025-07-21"), 0);
    }

    #[test]
    fn test_exception_days_are_skipped() {
        let interval = DateInterval::new(date("2025-08-11"), date("2025-08-16"));
        let set = holidays(&["2025-08-15"]);
        assert_eq!(count_working_days(&interval, &set), 5);
    }

    #[test]
    fn test_exception_on_sunday_not_double_counted() {
        let interval = DateInterval::new(date("2025-07-21"), date("2025-07-27"));
        let set = holidays(&["2025-07-27"]);
        assert_eq!(count_working_days(&interval, &set), 6);
    }

    #[test]
    fn test_exception_outside_interval_ignored() {
        let interval = DateInterval::new(date("2025-07-21"), date("2025-07-25"));
        let set = holidays(&["2025-07-20", "2025-07-26"]);
        assert_eq!(count_working_days(&interval, &set), 5);
    }

    #[test]
    fn test_leap_february() {
        // February 2024 has 29 days and four Sundays (4, 11, 18, 25).
        assert_eq!(count("2024-02-01", "2024-02-29"), 25);
        // February 2025 has 28 days and four Sundays (2, 9, 16, 23).
        assert_eq!(count("2025-02-01", "2025-02-28"), 24);
    }

    #[test]
    fn test_spans_multiple_years() {
        // 2024 is a leap year with 52 Sundays; 2025 has 52 Sundays.
        assert_eq!(count("2024-01-01", "2025-12-31"), (366 - 52) + (365 - 52));
    }

    proptest! {
        #[test]
        fn prop_count_bounded_by_calendar_days(
            start_offset in 0i64..2000,
            length in -30i64..400,
            holiday_offsets in proptest::collection::vec(0i64..2400, 0..20),
        ) {
            let base = date("2023-01-01");
            let start = base.add_days(start_offset).unwrap();
            let end = start.add_days(length).unwrap();
            let interval = DateInterval::new(start, end);
            let set: ExceptionDaySet = holiday_offsets
                .iter()
                .map(|o| ExceptionDay {
                    date: base.add_days(*o).unwrap(),
                    reason: "generated".to_string(),
                })
                .collect();

            let working = count_working_days(&interval, &set);
            let calendar = interval.calendar_days();
            prop_assert!(working <= calendar);

            let has_non_working = interval
                .days()
                .any(|d| d.is_sunday() || set.contains(d));
            prop_assert_eq!(working == calendar, !has_non_working);
        }

        #[test]
        fn prop_empty_interval_counts_zero(start_offset in 0i64..2000, gap in 1i64..500) {
            let start = date("2023-01-01").add_days(start_offset).unwrap();
            let end = start.add_days(-gap).unwrap();
            let interval = DateInterval::new(start, end);
            prop_assert_eq!(count_working_days(&interval, &ExceptionDaySet::new()), 0);
        }
    }
}
