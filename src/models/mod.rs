//! Core data models for the leave ledger.
//!
//! This module contains all the value types used throughout the crate.

mod batch;
mod exception_day;
mod interval;
mod leave_span;
mod ledger_result;
mod local_date;

pub use batch::{AcademicPeriod, BatchRecord, PeriodSource, SemesterOverride};
pub use exception_day::{ExceptionDay, ExceptionDaySet};
pub use interval::{DateInterval, Days};
pub use leave_span::{DurationType, LeaveSpan, RequestKind, SpanStatus};
pub use ledger_result::{LeaveLedgerResult, LeaveSummary, SpanContribution};
pub use local_date::LocalDate;
