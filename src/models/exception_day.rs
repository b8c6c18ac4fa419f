//! Institution-declared non-working days.
//!
//! This module contains [`ExceptionDay`] and the date-keyed
//! [`ExceptionDaySet`] consulted by the working-day counter.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{DateInterval, LocalDate};

/// A declared non-working date, on top of the weekly Sunday rule.
///
/// # Example
///
/// ```
/// use leave_ledger::models::{ExceptionDay, LocalDate};
///
/// let holiday = ExceptionDay {
///     date: LocalDate::parse_iso("2025-08-15").unwrap(),
///     reason: "Independence Day".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionDay {
    /// The non-working date.
    pub date: LocalDate,
    /// Why the institution is closed (e.g. "Independence Day").
    pub reason: String,
}

/// A set of exception days with at most one entry per date.
///
/// # Example
///
/// ```
/// use leave_ledger::models::{ExceptionDay, ExceptionDaySet, LocalDate};
///
/// let date = LocalDate::parse_iso("2025-08-15").unwrap();
/// let mut set = ExceptionDaySet::new();
/// set.insert(ExceptionDay { date, reason: "Independence Day".to_string() });
///
/// assert!(set.contains(date));
/// assert_eq!(set.reason(date), Some("Independence Day"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExceptionDaySet {
    days: BTreeMap<LocalDate, String>,
}

impl ExceptionDaySet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an exception day, replacing any entry for the same date.
    ///
    /// Returns the replaced entry, if there was one.
    pub fn insert(&mut self, day: ExceptionDay) -> Option<ExceptionDay> {
        self.days
            .insert(day.date, day.reason)
            .map(|reason| ExceptionDay {
                date: day.date,
                reason,
            })
    }

    /// Adds every day of `other` whose date is not already present.
    pub fn layer(&mut self, other: &ExceptionDaySet) {
        for (date, reason) in &other.days {
            self.days.entry(*date).or_insert_with(|| reason.clone());
        }
    }

    /// Whether `date` is a declared exception day.
    pub fn contains(&self, date: LocalDate) -> bool {
        self.days.contains_key(&date)
    }

    /// The declared reason for `date`, if it is an exception day.
    pub fn reason(&self, date: LocalDate) -> Option<&str> {
        self.days.get(&date).map(String::as_str)
    }

    /// Number of exception days in the set.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Exception dates falling within `interval`, in order.
    pub fn dates_within(&self, interval: &DateInterval) -> impl Iterator<Item = LocalDate> + '_ {
        let range = (!interval.is_empty()).then(|| self.days.range(interval.start..=interval.end));
        range.into_iter().flatten().map(|(date, _)| *date)
    }

    /// Iterates the set in date order.
    pub fn iter(&self) -> impl Iterator<Item = ExceptionDay> + '_ {
        self.days.iter().map(|(date, reason)| ExceptionDay {
            date: *date,
            reason: reason.clone(),
        })
    }
}

impl FromIterator<ExceptionDay> for ExceptionDaySet {
    fn from_iter<I: IntoIterator<Item = ExceptionDay>>(iter: I) -> Self {
        let mut set = Self::new();
        for day in iter {
            set.insert(day);
        }
        set
    }
}

impl Serialize for ExceptionDaySet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for ExceptionDaySet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<ExceptionDay>::deserialize(deserializer).map(|days| days.into_iter().collect())
    }
}
