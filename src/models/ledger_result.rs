//! Ledger result models.
//!
//! This module contains [`LeaveLedgerResult`], the per-student figure the
//! ledger computes, along with the per-span [`SpanContribution`] breakdown
//! and the attendance-oriented [`LeaveSummary`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AcademicPeriod, DateInterval, LocalDate, RequestKind, SpanStatus};

/// What one span added to a student's total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanContribution {
    /// Identifier of the request.
    pub span_id: String,
    /// Leave or OD.
    pub kind: RequestKind,
    /// Status at the time of computation.
    pub status: SpanStatus,
    /// Days that were counted, or `None` when nothing was counted.
    pub counted: Option<DateInterval>,
    /// Working days inside `counted`.
    pub working_days: u64,
    /// Amount charged, after the half-day cap.
    pub charged: Decimal,
    /// Human-readable account of how `charged` was reached.
    pub reasoning: String,
}

/// Days consumed by one student as of a given date.
///
/// # Example
///
/// ```
/// use leave_ledger::models::{LeaveLedgerResult, LocalDate};
/// use rust_decimal::Decimal;
///
/// let result = LeaveLedgerResult {
///     student_id: "stu_042".to_string(),
///     as_of: LocalDate::parse_iso("2025-07-30").unwrap(),
///     days_consumed: Decimal::new(95, 1),
///     leave_days: Decimal::new(9, 0),
///     od_days: Decimal::new(5, 1),
///     contributions: vec![],
/// };
/// assert_eq!(result.days_consumed, result.leave_days + result.od_days);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveLedgerResult {
    /// The student the figure belongs to.
    pub student_id: String,
    /// The date the figure was computed for.
    pub as_of: LocalDate,
    /// Total chargeable days, leave and OD together.
    pub days_consumed: Decimal,
    /// The leave part of `days_consumed`.
    pub leave_days: Decimal,
    /// The OD part of `days_consumed`.
    pub od_days: Decimal,
    /// One entry per span considered, in input order.
    pub contributions: Vec<SpanContribution>,
}

/// A student's standing in the current academic period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveSummary {
    /// The period accounting starts from.
    pub period: AcademicPeriod,
    /// The date everything was computed for.
    pub as_of: LocalDate,
    /// Working days from the period start through `as_of`.
    pub working_days_elapsed: u64,
    /// The ledger restricted to the period.
    pub ledger: LeaveLedgerResult,
    /// Share of elapsed working days not lost to leave, in percent.
    pub attendance_percentage: Option<Decimal>,
}
