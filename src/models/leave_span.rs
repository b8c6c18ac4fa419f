//! Leave and OD request spans.
//!
//! A [`LeaveSpan`] is the ledger's view of one persisted leave or on-duty
//! request: its dates, approval status and duration variant.

use serde::{Deserialize, Serialize};

use super::{DateInterval, LocalDate};

/// Approval state of a request.
///
/// Only [`SpanStatus::Approved`] spans are charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanStatus {
    /// Submitted, awaiting review.
    Pending,
    /// Approved; charged against the student's balance.
    Approved,
    /// Passed on to the next approver.
    Forwarded,
    /// Declined.
    Rejected,
}

impl std::fmt::Display for SpanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpanStatus::Pending => write!(f, "Pending"),
            SpanStatus::Approved => write!(f, "Approved"),
            SpanStatus::Forwarded => write!(f, "Forwarded"),
            SpanStatus::Rejected => write!(f, "Rejected"),
        }
    }
}

/// How much of each day a request covers.
///
/// # Example
///
/// ```
/// use leave_ledger::models::DurationType;
///
/// assert!(DurationType::HalfDayForenoon.is_half_day());
/// assert!(!DurationType::default().is_half_day());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationType {
    /// The whole day, every day of the span.
    #[default]
    FullDay,
    /// Morning session of a single day.
    HalfDayForenoon,
    /// Afternoon session of a single day.
    HalfDayAfternoon,
}

impl DurationType {
    /// Whether this is one of the half-day variants.
    pub fn is_half_day(&self) -> bool {
        matches!(
            self,
            DurationType::HalfDayForenoon | DurationType::HalfDayAfternoon
        )
    }
}

/// Whether a request is ordinary leave or official duty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    /// Ordinary leave.
    Leave,
    /// On-duty absence.
    #[serde(rename = "od")]
    OnDuty,
}

/// A single leave or OD request as consumed by the ledger.
///
/// # Example
///
/// ```
/// use leave_ledger::models::{DurationType, LeaveSpan, LocalDate, RequestKind, SpanStatus};
///
/// let span = LeaveSpan {
///     id: "leave_001".to_string(),
///     student_id: "stu_042".to_string(),
///     start: LocalDate::parse_iso("2025-07-21").unwrap(),
///     end: LocalDate::parse_iso("2025-07-25").unwrap(),
///     status: SpanStatus::Approved,
///     duration_type: DurationType::FullDay,
///     kind: RequestKind::Leave,
/// };
/// assert_eq!(span.interval().calendar_days(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveSpan {
    /// Identifier of the originating request.
    pub id: String,
    /// The student who filed the request.
    pub student_id: String,
    /// First day of absence (inclusive).
    pub start: LocalDate,
    /// Last day of absence (inclusive).
    pub end: LocalDate,
    /// Current approval status.
    pub status: SpanStatus,
    /// Full or half day.
    pub duration_type: DurationType,
    /// Leave or OD.
    pub kind: RequestKind,
}

impl LeaveSpan {
    /// The span's full requested interval.
    pub fn interval(&self) -> DateInterval {
        DateInterval::new(self.start, self.end)
    }

    /// Whether the span is charged at all.
    pub fn is_chargeable(&self) -> bool {
        self.status == SpanStatus::Approved
    }
}
