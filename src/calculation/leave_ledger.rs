//! Leave-days-consumed accounting.
//!
//! This module turns a student's leave and OD spans into a single figure of
//! chargeable days as of a given date. An approved span is charged
//! incrementally as it elapses: working days from its start through
//! `min(end, as_of)`. Spans that have not started yet and spans that are not
//! approved are charged nothing. A half-day span is charged at most 0.5.

use rust_decimal::Decimal;

use crate::models::{
    DateInterval, ExceptionDaySet, LeaveLedgerResult, LeaveSpan, LocalDate, RequestKind,
    SpanContribution,
};

use super::count_working_days;

/// The most a half-day span can contribute.
pub const HALF_DAY: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Total days consumed by `spans` as of `as_of`.
///
/// # Example
///
/// ```
/// use leave_ledger::calculation::consumed_days;
/// use leave_ledger::models::{
///     DurationType, ExceptionDaySet, LeaveSpan, LocalDate, RequestKind, SpanStatus,
/// };
/// use rust_decimal::Decimal;
///
/// let d = |s| LocalDate::parse_iso(s).unwrap();
/// let span = LeaveSpan {
///     id: "leave_001".to_string(),
///     student_id: "stu_042".to_string(),
///     start: d("2025-07-21"),
///     end: d("2025-08-05"),
///     status: SpanStatus::Approved,
///     duration_type: DurationType::FullDay,
///     kind: RequestKind::Leave,
/// };
///
/// // In progress: charged Monday 21st through Wednesday 30th, minus Sunday 27th.
/// let days = consumed_days(&[span], d("2025-07-30"), &ExceptionDaySet::new());
/// assert_eq!(days, Decimal::from(9));
/// ```
pub fn consumed_days(
    spans: &[LeaveSpan],
    as_of: LocalDate,
    exceptions: &ExceptionDaySet,
) -> Decimal {
    LeaveLedger::new(exceptions).consumed_days(spans, as_of)
}

/// Like [`consumed_days`], but only charges days on or after `period_start`.
pub fn consumed_days_since(
    spans: &[LeaveSpan],
    period_start: LocalDate,
    as_of: LocalDate,
    exceptions: &ExceptionDaySet,
) -> Decimal {
    LeaveLedger::new(exceptions)
        .since(period_start)
        .consumed_days(spans, as_of)
}

/// Builds the full ledger result for one student.
///
/// Spans belonging to other students are ignored.
pub fn build_ledger(
    student_id: &str,
    spans: &[LeaveSpan],
    as_of: LocalDate,
    exceptions: &ExceptionDaySet,
) -> LeaveLedgerResult {
    LeaveLedger::new(exceptions).build(student_id, spans, as_of)
}

/// A configured ledger computation.
///
/// Holds the exception days and an optional lower bound so the same rules can
/// be applied to any number of spans.
#[derive(Debug, Clone, Copy)]
pub struct LeaveLedger<'a> {
    exceptions: &'a ExceptionDaySet,
    since: Option<LocalDate>,
}

impl<'a> LeaveLedger<'a> {
    /// Creates a ledger that charges against `exceptions`.
    pub fn new(exceptions: &'a ExceptionDaySet) -> Self {
        Self {
            exceptions,
            since: None,
        }
    }

    /// Restricts charging to days on or after `period_start`.
    pub fn since(mut self, period_start: LocalDate) -> Self {
        self.since = Some(period_start);
        self
    }

    /// Works out what one span contributes as of `as_of`.
    pub fn contribution(&self, span: &LeaveSpan, as_of: LocalDate) -> SpanContribution {
        let uncharged = |reasoning: String| SpanContribution {
            span_id: span.id.clone(),
            kind: span.kind,
            status: span.status,
            counted: None,
            working_days: 0,
            charged: Decimal::ZERO,
            reasoning,
        };

        if !span.is_chargeable() {
            return uncharged(format!("{} request is not charged", span.status));
        }
        if span.start > as_of {
            return uncharged(format!(
                "starts {}, after as-of {}; not yet chargeable",
                span.start, as_of
            ));
        }

        let start = match self.since {
            Some(floor) if floor > span.start => floor,
            _ => span.start,
        };
        let end = span.end.min(as_of);
        let counted = DateInterval::new(start, end);
        if counted.is_empty() {
            return uncharged(format!(
                "no days between {} and {} fall in the counted range",
                span.start, span.end
            ));
        }

        let working_days = count_working_days(&counted, self.exceptions);
        let full = Decimal::from(working_days);
        let (charged, reasoning) = if span.duration_type.is_half_day() {
            let charged = full.min(HALF_DAY);
            (
                charged,
                format!(
                    "half-day request: {} working day(s) {}..={}, capped at {}",
                    working_days, start, end, charged
                ),
            )
        } else if span.end > as_of {
            (
                full,
                format!(
                    "in progress: {} working day(s) {}..={} of {}..={}",
                    working_days, start, end, span.start, span.end
                ),
            )
        } else {
            (
                full,
                format!("completed: {} working day(s) {}..={}", working_days, start, end),
            )
        };

        SpanContribution {
            span_id: span.id.clone(),
            kind: span.kind,
            status: span.status,
            counted: Some(counted),
            working_days,
            charged,
            reasoning,
        }
    }

    /// Sum of contributions of `spans` as of `as_of`.
    pub fn consumed_days(&self, spans: &[LeaveSpan], as_of: LocalDate) -> Decimal {
        spans
            .iter()
            .map(|span| self.contribution(span, as_of).charged)
            .sum()
    }

    /// The ledger for `student_id`, with a per-span breakdown.
    pub fn build(
        &self,
        student_id: &str,
        spans: &[LeaveSpan],
        as_of: LocalDate,
    ) -> LeaveLedgerResult {
        let contributions: Vec<SpanContribution> = spans
            .iter()
            .filter(|span| span.student_id == student_id)
            .map(|span| self.contribution(span, as_of))
            .collect();

        let sum_kind = |kind: RequestKind| -> Decimal {
            contributions
                .iter()
                .filter(|c| c.kind == kind)
                .map(|c| c.charged)
                .sum()
        };
        let leave_days = sum_kind(RequestKind::Leave);
        let od_days = sum_kind(RequestKind::OnDuty);

        LeaveLedgerResult {
            student_id: student_id.to_string(),
            as_of,
            days_consumed: leave_days + od_days,
            leave_days,
            od_days,
            contributions,
        }
    }
}
