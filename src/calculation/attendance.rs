//! Period-level leave summary.
//!
//! Combines an [`AcademicPeriod`] with the ledger to report how many working
//! days have elapsed in the period and what share of them the student was
//! present for.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{
    AcademicPeriod, DateInterval, ExceptionDaySet, LeaveSpan, LeaveSummary, LocalDate,
};

use super::{LeaveLedger, count_working_days};

/// Summarises a student's leave within `period` as of `as_of`.
///
/// Only days on or after the period start are charged. OD days are reported
/// in the ledger but do not reduce attendance. `attendance_percentage` is
/// `None` while no working day of the period has elapsed.
///
/// # Example
///
/// ```
/// use leave_ledger::calculation::summarize_leave;
/// use leave_ledger::models::{AcademicPeriod, ExceptionDaySet, LocalDate, PeriodSource};
/// use rust_decimal::Decimal;
///
/// let period = AcademicPeriod {
///     batch: "2024".to_string(),
///     semester: 3,
///     start_date: LocalDate::parse_iso("2025-07-21").unwrap(),
///     source: PeriodSource::Override,
/// };
/// let as_of = LocalDate::parse_iso("2025-07-26").unwrap();
///
/// let summary = summarize_leave(&period, "stu_042", &[], as_of, &ExceptionDaySet::new());
/// assert_eq!(summary.working_days_elapsed, 6);
/// assert_eq!(summary.attendance_percentage, Some(Decimal::from(100)));
/// ```
pub fn summarize_leave(
    period: &AcademicPeriod,
    student_id: &str,
    spans: &[LeaveSpan],
    as_of: LocalDate,
    exceptions: &ExceptionDaySet,
) -> LeaveSummary {
    let elapsed = DateInterval::new(period.start_date, as_of);
    let working_days_elapsed = count_working_days(&elapsed, exceptions);

    let ledger = LeaveLedger::new(exceptions)
        .since(period.start_date)
        .build(student_id, spans, as_of);

    LeaveSummary {
        period: period.clone(),
        as_of,
        working_days_elapsed,
        attendance_percentage: attendance_percentage(working_days_elapsed, ledger.leave_days),
        ledger,
    }
}

/// Percentage of `elapsed` working days not taken as leave, to 2 dp.
fn attendance_percentage(elapsed: u64, leave_days: Decimal) -> Option<Decimal> {
    if elapsed == 0 {
        return None;
    }
    let elapsed = Decimal::from(elapsed);
    let present = (elapsed - leave_days).max(Decimal::ZERO);
    let percentage = present * Decimal::ONE_HUNDRED / elapsed;
    Some(percentage.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}
