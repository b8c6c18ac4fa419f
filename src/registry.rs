//! Boundary traits for the data the ledger reads but does not own.
//!
//! Exception days, batch records and semester overrides live in external
//! stores. The core only sees them through [`ExceptionDayRegistry`] and
//! [`BatchRegistry`]; [`InMemoryBatchRegistry`] and [`ExceptionDaySet`] are
//! the in-process implementations used by the configuration loader and tests.

use std::collections::HashMap;

use crate::models::{BatchRecord, ExceptionDaySet, LocalDate, SemesterOverride};

/// Source of declared non-working days.
pub trait ExceptionDayRegistry: Send + Sync {
    /// A snapshot of every declared exception day.
    fn exception_days(&self) -> ExceptionDaySet;
}

impl ExceptionDayRegistry for ExceptionDaySet {
    fn exception_days(&self) -> ExceptionDaySet {
        self.clone()
    }
}

/// Source of batch records and semester start overrides.
///
/// Absence of either is a normal answer, not an error.
pub trait BatchRegistry: Send + Sync {
    /// The canonical record for `batch`, if one exists.
    fn batch(&self, batch: &str) -> Option<BatchRecord>;

    /// The administratively declared start of (`batch`, `semester`), if any.
    fn semester_override(&self, batch: &str, semester: u32) -> Option<LocalDate>;
}

/// A [`BatchRegistry`] backed by in-memory maps.
///
/// # Example
///
/// ```
/// use leave_ledger::models::LocalDate;
/// use leave_ledger::registry::{BatchRegistry, InMemoryBatchRegistry};
///
/// let mut registry = InMemoryBatchRegistry::new();
/// registry.insert_override("2024", 1, LocalDate::parse_iso("2024-07-15").unwrap());
///
/// assert_eq!(
///     registry.semester_override("2024", 1),
///     Some(LocalDate::parse_iso("2024-07-15").unwrap())
/// );
/// assert_eq!(registry.semester_override("2024", 2), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryBatchRegistry {
    batches: HashMap<String, BatchRecord>,
    overrides: HashMap<(String, u32), LocalDate>,
}

impl InMemoryBatchRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a batch record.
    pub fn insert_batch(&mut self, record: BatchRecord) -> Option<BatchRecord> {
        self.batches.insert(record.batch.clone(), record)
    }

    /// Adds or replaces a semester override.
    pub fn insert_override(
        &mut self,
        batch: impl Into<String>,
        semester: u32,
        start_date: LocalDate,
    ) -> Option<LocalDate> {
        self.overrides.insert((batch.into(), semester), start_date)
    }

    /// Number of batch records.
    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }

    /// Number of semester overrides.
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }
}

impl FromIterator<SemesterOverride> for InMemoryBatchRegistry {
    fn from_iter<I: IntoIterator<Item = SemesterOverride>>(iter: I) -> Self {
        let mut registry = Self::new();
        for o in iter {
            registry.insert_override(o.batch, o.semester, o.start_date);
        }
        registry
    }
}

impl BatchRegistry for InMemoryBatchRegistry {
    fn batch(&self, batch: &str) -> Option<BatchRecord> {
        self.batches.get(batch).cloned()
    }

    fn semester_override(&self, batch: &str, semester: u32) -> Option<LocalDate> {
        self.overrides.get(&(batch.to_string(), semester)).copied()
    }
}
