//! Closed date intervals.

use serde::{Deserialize, Serialize};

use super::LocalDate;

/// A closed interval `[start, end]` of calendar days.
///
/// An interval whose `start` is after its `end` is empty. Empty intervals are
/// valid values that contain no days; constructing one is not an error.
///
/// # Example
///
/// ```
/// use leave_ledger::models::{DateInterval, LocalDate};
///
/// let start = LocalDate::parse_iso("2025-07-21").unwrap();
/// let end = LocalDate::parse_iso("2025-07-25").unwrap();
///
/// let week = DateInterval::new(start, end);
/// assert_eq!(week.calendar_days(), 5);
///
/// let backwards = DateInterval::new(end, start);
/// assert!(backwards.is_empty());
/// assert_eq!(backwards.calendar_days(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateInterval {
    /// First day of the interval (inclusive).
    pub start: LocalDate,
    /// Last day of the interval (inclusive).
    pub end: LocalDate,
}

impl DateInterval {
    /// Creates the interval `[start, end]`.
    pub fn new(start: LocalDate, end: LocalDate) -> Self {
        Self { start, end }
    }

    /// A one-day interval.
    pub fn single(date: LocalDate) -> Self {
        Self::new(date, date)
    }

    /// Whether the interval contains no days (`start > end`).
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Whether `date` lies within the interval, bounds included.
    pub fn contains(&self, date: LocalDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days in the interval, bounds included.
    pub fn calendar_days(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            self.start.days_until(self.end).unsigned_abs() + 1
        }
    }

    /// Iterates every day of the interval in order.
    pub fn days(&self) -> Days {
        Days {
            next: (!self.is_empty()).then_some(self.start),
            end: self.end,
        }
    }
}

/// Iterator over the days of a [`DateInterval`].
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<LocalDate>,
    end: LocalDate,
}

impl Iterator for Days {
    type Item = LocalDate;

    fn next(&mut self) -> Option<LocalDate> {
        let current = self.next?;
        self.next = if current < self.end {
            current.next_day()
        } else {
            None
        };
        Some(current)
    }
}
