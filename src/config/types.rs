//! Configuration types for the leave ledger.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::FixedOffset;
use serde::Deserialize;

use crate::models::{BatchRecord, ExceptionDay, ExceptionDaySet, SemesterOverride};
use crate::registry::InMemoryBatchRegistry;

/// Contents of `institution.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct InstitutionMetadata {
    /// The institution's display name.
    pub name: String,
    /// Offset of institutional local time from UTC, in minutes.
    pub utc_offset_minutes: i32,
}

/// Contents of `batches.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchesConfig {
    /// Canonical batch records.
    #[serde(default)]
    pub batches: Vec<BatchRecord>,
    /// Declared semester start dates.
    #[serde(default)]
    pub semester_overrides: Vec<SemesterOverride>,
}

/// Contents of `exception_days.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExceptionDaysConfig {
    /// Declared non-working days.
    #[serde(default)]
    pub exception_days: Vec<ExceptionDay>,
}

/// The complete institution configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct InstitutionConfig {
    metadata: InstitutionMetadata,
    offset: FixedOffset,
    batches: InMemoryBatchRegistry,
    exception_days: ExceptionDaySet,
}

impl InstitutionConfig {
    /// Creates an InstitutionConfig from its component parts.
    pub fn new(
        metadata: InstitutionMetadata,
        offset: FixedOffset,
        batches: InMemoryBatchRegistry,
        exception_days: ExceptionDaySet,
    ) -> Self {
        Self {
            metadata,
            offset,
            batches,
            exception_days,
        }
    }

    /// Returns the institution metadata.
    pub fn institution(&self) -> &InstitutionMetadata {
        &self.metadata
    }

    /// Returns the institutional UTC offset.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Returns the batch registry.
    pub fn batches(&self) -> &InMemoryBatchRegistry {
        &self.batches
    }

    /// Returns the declared exception days.
    pub fn exception_days(&self) -> &ExceptionDaySet {
        &self.exception_days
    }
}
