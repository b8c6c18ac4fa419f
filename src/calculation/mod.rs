//! Calculation logic for the leave ledger.
//!
//! This module contains the working-day counter, the academic calendar that
//! derives period start dates, the leave ledger that turns spans into days
//! consumed, and the period summary built on top of them. Every function here
//! is pure: dates, exception days and spans are passed in by the caller.

mod academic_calendar;
mod attendance;
mod leave_ledger;
mod working_days;

pub use academic_calendar::{
    AcademicCalendar, EVEN_SEMESTER_START_MONTH, ODD_SEMESTER_START_MONTH, parse_batch_year,
    period_start, resolve_period,
};
pub use attendance::summarize_leave;
pub use leave_ledger::{HALF_DAY, LeaveLedger, build_ledger, consumed_days, consumed_days_since};
pub use working_days::{count_working_days, is_working_day};
