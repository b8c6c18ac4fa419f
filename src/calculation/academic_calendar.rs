//! Academic period start derivation.
//!
//! This module maps a (batch, semester) pair to the date working-day
//! accounting starts from. Odd semesters begin on 1 June and even semesters
//! on 1 January of the following year; an administrative override always
//! wins, and a derived start in the future is clamped to today.

use crate::clock::Clock;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{AcademicPeriod, BatchRecord, LocalDate, PeriodSource};
use crate::registry::BatchRegistry;

/// Month odd semesters start in.
pub const ODD_SEMESTER_START_MONTH: u32 = 6;

/// Month even semesters start in.
pub const EVEN_SEMESTER_START_MONTH: u32 = 1;

/// Parses a batch identifier into its start year.
///
/// Exactly four ASCII digits are accepted.
///
/// ```
/// use leave_ledger::calculation::parse_batch_year;
///
/// assert_eq!(parse_batch_year("2024").unwrap(), 2024);
/// assert!(parse_batch_year("24").is_err());
/// assert!(parse_batch_year("2024-A").is_err());
/// ```
pub fn parse_batch_year(batch: &str) -> LedgerResult<i32> {
    let invalid = || LedgerError::InvalidBatch {
        batch: batch.to_string(),
    };
    if batch.len() != 4 || !batch.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    batch.parse().map_err(|_| invalid())
}

/// Computes the start of a period, clamped to `today`.
///
/// An `override_start` is returned verbatim. Otherwise the batch year `B` and
/// semester `S` give `academic_year = B + (S - 1) / 2`; odd semesters start
/// on 1 June of that year, even semesters on 1 January of the next. If that
/// date is after `today`, `today` is returned instead.
///
/// # Example
///
/// ```
/// use leave_ledger::calculation::period_start;
/// use leave_ledger::models::LocalDate;
///
/// let today = LocalDate::parse_iso("2026-10-14").unwrap();
///
/// // Semester 3 of batch 2024 starts in June of 2025.
/// let start = period_start("2024", 3, None, today).unwrap();
/// assert_eq!(start.to_iso(), "2025-06-01");
///
/// // Semester 4 of batch 2024 starts in January 2026.
/// let start = period_start("2024", 4, None, today).unwrap();
/// assert_eq!(start.to_iso(), "2026-01-01");
///
/// // A period that has not begun yet is clamped to today.
/// let start = period_start("2030", 1, None, today).unwrap();
/// assert_eq!(start, today);
/// ```
pub fn period_start(
    batch: &str,
    semester: u32,
    override_start: Option<LocalDate>,
    today: LocalDate,
) -> LedgerResult<LocalDate> {
    resolve_period(batch, semester, None, override_start, today).map(|p| p.start_date)
}

/// Computes a full [`AcademicPeriod`], consulting an optional batch record.
///
/// When `record` is present its `start_year` is used as the batch year and
/// semesters beyond the programme's length are rejected.
pub fn resolve_period(
    batch: &str,
    semester: u32,
    record: Option<&BatchRecord>,
    override_start: Option<LocalDate>,
    today: LocalDate,
) -> LedgerResult<AcademicPeriod> {
    let period = |start_date, source| AcademicPeriod {
        batch: batch.to_string(),
        semester,
        start_date,
        source,
    };

    if let Some(start_date) = override_start {
        return Ok(period(start_date, PeriodSource::Override));
    }

    let parsed_year = parse_batch_year(batch)?;
    if semester < 1 {
        return Err(LedgerError::InvalidSemester {
            semester,
            message: "semester numbers start at 1".to_string(),
        });
    }

    let batch_year = match record {
        Some(record) => {
            let count = record.semester_count();
            if count > 0 && semester > count {
                return Err(LedgerError::InvalidSemester {
                    semester,
                    message: format!("batch {} has only {} semesters", batch, count),
                });
            }
            record.start_year
        }
        None => parsed_year,
    };

    match derived_start(batch_year, semester) {
        Some(start) if start <= today => Ok(period(start, PeriodSource::Derived)),
        // Past year 9999 the start is unrepresentably far in the future.
        _ => Ok(period(today, PeriodSource::ClampedToToday)),
    }
}

/// The conventional start date, or `None` if it lies beyond year 9999.
fn derived_start(batch_year: i32, semester: u32) -> Option<LocalDate> {
    let semester_index = i64::from((semester - 1) / 2);
    let academic_year = i64::from(batch_year) + semester_index;

    let (year, month) = if semester % 2 == 1 {
        (academic_year, ODD_SEMESTER_START_MONTH)
    } else {
        (academic_year + 1, EVEN_SEMESTER_START_MONTH)
    };

    let year = i32::try_from(year).ok()?;
    LocalDate::from_parts(year, month, 1).ok()
}

/// Resolves periods against a [`BatchRegistry`] and a [`Clock`].
///
/// # Example
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use leave_ledger::calculation::AcademicCalendar;
/// use leave_ledger::clock::FixedClock;
/// use leave_ledger::models::{LocalDate, PeriodSource};
/// use leave_ledger::registry::InMemoryBatchRegistry;
///
/// let offset = FixedOffset::east_opt(19800).unwrap();
/// let clock = FixedClock::new(offset.with_ymd_and_hms(2025, 7, 30, 10, 0, 0).unwrap());
///
/// let mut registry = InMemoryBatchRegistry::new();
/// registry.insert_override("2024", 3, LocalDate::parse_iso("2025-07-14").unwrap());
///
/// let calendar = AcademicCalendar::new(&registry, &clock);
/// let period = calendar.period("2024", 3).unwrap();
/// assert_eq!(period.start_date.to_iso(), "2025-07-14");
/// assert_eq!(period.source, PeriodSource::Override);
/// ```
pub struct AcademicCalendar<'a> {
    registry: &'a dyn BatchRegistry,
    clock: &'a dyn Clock,
}

impl<'a> AcademicCalendar<'a> {
    /// Creates a calendar reading from `registry` and `clock`.
    pub fn new(registry: &'a dyn BatchRegistry, clock: &'a dyn Clock) -> Self {
        Self { registry, clock }
    }

    /// The period for (`batch`, `semester`) as of the clock's today.
    pub fn period(&self, batch: &str, semester: u32) -> LedgerResult<AcademicPeriod> {
        self.period_as_of(batch, semester, LocalDate::today(self.clock))
    }

    /// The period for (`batch`, `semester`), clamping against `today`.
    ///
    /// Callers that also compute a ledger should pass the same date they give
    /// the ledger as `as_of`.
    pub fn period_as_of(
        &self,
        batch: &str,
        semester: u32,
        today: LocalDate,
    ) -> LedgerResult<AcademicPeriod> {
        let record = self.registry.batch(batch);
        let override_start = self.registry.semester_override(batch, semester);
        resolve_period(batch, semester, record.as_ref(), override_start, today)
    }

    /// Shorthand for the start date of [`AcademicCalendar::period`].
    pub fn period_start(&self, batch: &str, semester: u32) -> LedgerResult<LocalDate> {
        self.period(batch, semester).map(|p| p.start_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::registry::InMemoryBatchRegistry;
    use chrono::{FixedOffset, TimeZone};

    fn date(s: &str) -> LocalDate {
        LocalDate::parse_iso(s).unwrap()
    }

    fn clock_at(y: i32, m: u32, d: u32) -> FixedClock {
        let offset = FixedOffset::east_opt(19800).unwrap();
        FixedClock::new(offset.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_odd_semester_starts_in_june() {
        let today = date("2026-10-14");
        assert_eq!(period_start("2024", 1, None, today), Ok(date("2024-06-01")));
        assert_eq!(period_start("2024", 3, None, today), Ok(date("2025-06-01")));
        assert_eq!(period_start("2023", 5, None, today), Ok(date("2025-06-01")));
    }

    #[test]
    fn test_even_semester_starts_in_january_next_year() {
        let today = date("2026-10-14");
        assert_eq!(period_start("2024", 2, None, today), Ok(date("2025-01-01")));
        assert_eq!(period_start("2023", 6, None, today), Ok(date("2026-01-01")));
    }

    #[test]
    fn test_derived_start_on_today_is_not_clamped() {
        let today = date("2025-06-01");
        let period = resolve_period("2024", 3, None, None, today).unwrap();
        assert_eq!(period.start_date, today);
        assert_eq!(period.source, PeriodSource::Derived);
    }

    #[test]
    fn test_future_start_clamped_to_today() {
        let today = date("2025-05-31");
        let period = resolve_period("2024", 3, None, None, today).unwrap();
        assert_eq!(period.start_date, today);
        assert_eq!(period.source, PeriodSource::ClampedToToday);
    }

    #[test]
    fn test_far_future_batch_clamped() {
        let today = date("2026-10-14");
        assert_eq!(period_start("9999", 2, None, today), Ok(today));
        assert_eq!(period_start("9999", u32::MAX, None, today), Ok(today));
    }

    #[test]
    fn test_override_returned_verbatim() {
        let today = date("2025-07-30");
        let overridden = date("2025-09-01");
        let period = resolve_period("2024", 3, None, Some(overridden), today).unwrap();
        assert_eq!(period.start_date, overridden);
        assert_eq!(period.source, PeriodSource::Override);
    }

    #[test]
    fn test_invalid_batch_rejected() {
        let today = date("2025-07-30");
        for batch in ["", "24", "20245", "20a4", " 2024", "２０２４"] {
            assert_eq!(
                period_start(batch, 1, None, today),
                Err(LedgerError::InvalidBatch {
                    batch: batch.to_string()
                }),
                "batch {:?}",
                batch
            );
        }
    }

    #[test]
    fn test_semester_zero_rejected() {
        let result = period_start("2024", 0, None, date("2025-07-30"));
        assert!(matches!(
            result,
            Err(LedgerError::InvalidSemester { semester: 0, .. })
        ));
    }

    #[test]
    fn test_record_limits_semester_count() {
        let record = BatchRecord {
            batch: "2022".to_string(),
            start_year: 2022,
            end_year: 2026,
            active: true,
        };
        let today = date("2026-10-14");

        assert!(resolve_period("2022", 8, Some(&record), None, today).is_ok());
        assert!(matches!(
            resolve_period("2022", 9, Some(&record), None, today),
            Err(LedgerError::InvalidSemester { semester: 9, .. })
        ));
    }

    #[test]
    fn test_record_start_year_used_for_derivation() {
        // A lateral-entry cohort labelled 2022 that actually started in 2023.
        let record = BatchRecord {
            batch: "2022".to_string(),
            start_year: 2023,
            end_year: 2026,
            active: true,
        };
        let period = resolve_period("2022", 1, Some(&record), None, date("2026-10-14")).unwrap();
        assert_eq!(period.start_date, date("2023-06-01"));
    }

    #[test]
    fn test_calendar_uses_registry_override() {
        let mut registry = InMemoryBatchRegistry::new();
        registry.insert_override("2024", 3, date("2025-07-14"));
        let clock = clock_at(2025, 7, 30);
        let calendar = AcademicCalendar::new(&registry, &clock);

        assert_eq!(calendar.period_start("2024", 3), Ok(date("2025-07-14")));
        // No override for semester 4: derived January 2026 start is in the future.
        assert_eq!(calendar.period_start("2024", 4), Ok(date("2025-07-30")));
    }

    #[test]
    fn test_calendar_period_as_of_ignores_clock() {
        let registry = InMemoryBatchRegistry::new();
        let clock = clock_at(2020, 1, 1);
        let calendar = AcademicCalendar::new(&registry, &clock);

        let period = calendar
            .period_as_of("2024", 3, date("2026-10-14"))
            .unwrap();
        assert_eq!(period.start_date, date("2025-06-01"));
        assert_eq!(period.source, PeriodSource::Derived);
    }
}
