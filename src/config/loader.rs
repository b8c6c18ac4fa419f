//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading institution
//! configuration from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::FixedOffset;

use crate::clock::SystemClock;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{BatchRecord, ExceptionDaySet, LocalDate};
use crate::registry::{BatchRegistry, ExceptionDayRegistry, InMemoryBatchRegistry};

use super::types::{BatchesConfig, ExceptionDaysConfig, InstitutionConfig, InstitutionMetadata};

/// Loads and provides access to institution configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// serves as the [`BatchRegistry`] and [`ExceptionDayRegistry`] for the
/// rest of the crate.
///
/// # Directory Structure
///
/// ```text
/// config/institution/
/// ├── institution.yaml     # Name and UTC offset
/// ├── batches.yaml         # Batch records and semester overrides
/// └── exception_days.yaml  # Declared non-working days
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_ledger::config::ConfigLoader;
/// use leave_ledger::registry::BatchRegistry;
///
/// let loader = ConfigLoader::load("./config/institution").unwrap();
/// println!("Institution: {}", loader.institution().name);
///
/// if let Some(start) = loader.semester_override("2024", 3) {
///     println!("Semester 3 of 2024 starts {}", start);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: InstitutionConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML or malformed dates
    /// - The UTC offset is out of range
    /// - A batch, semester override or exception date appears twice
    pub fn load<P: AsRef<Path>>(path: P) -> LedgerResult<Self> {
        let path = path.as_ref();

        let institution_path = path.join("institution.yaml");
        let metadata = Self::load_yaml::<InstitutionMetadata>(&institution_path)?;
        let offset = Self::parse_offset(&metadata, &institution_path)?;

        let batches_path = path.join("batches.yaml");
        let batches_config = Self::load_yaml::<BatchesConfig>(&batches_path)?;
        let batches = Self::build_registry(batches_config, &batches_path)?;

        let exception_days_path = path.join("exception_days.yaml");
        let exception_config = Self::load_yaml::<ExceptionDaysConfig>(&exception_days_path)?;
        let exception_days = Self::build_exception_days(exception_config, &exception_days_path)?;

        let config = InstitutionConfig::new(metadata, offset, batches, exception_days);

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> LedgerResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| LedgerError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| LedgerError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn parse_offset(metadata: &InstitutionMetadata, path: &Path) -> LedgerResult<FixedOffset> {
        metadata
            .utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| LedgerError::ConfigParseError {
                path: path.display().to_string(),
                message: format!(
                    "utc_offset_minutes {} is out of range",
                    metadata.utc_offset_minutes
                ),
            })
    }

    fn build_registry(config: BatchesConfig, path: &Path) -> LedgerResult<InMemoryBatchRegistry> {
        let duplicate = |message: String| LedgerError::ConfigParseError {
            path: path.display().to_string(),
            message,
        };

        let mut registry = InMemoryBatchRegistry::new();
        for record in config.batches {
            let batch = record.batch.clone();
            if registry.insert_batch(record).is_some() {
                return Err(duplicate(format!("batch {} is listed twice", batch)));
            }
        }

        let mut seen = HashSet::new();
        for o in config.semester_overrides {
            if !seen.insert((o.batch.clone(), o.semester)) {
                return Err(duplicate(format!(
                    "semester {} of batch {} is overridden twice",
                    o.semester, o.batch
                )));
            }
            registry.insert_override(o.batch, o.semester, o.start_date);
        }

        Ok(registry)
    }

    fn build_exception_days(
        config: ExceptionDaysConfig,
        path: &Path,
    ) -> LedgerResult<ExceptionDaySet> {
        let mut set = ExceptionDaySet::new();
        for day in config.exception_days {
            let date = day.date;
            if set.insert(day).is_some() {
                return Err(LedgerError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!("exception day {} is declared twice", date),
                });
            }
        }
        Ok(set)
    }

    /// Returns the underlying institution configuration.
    pub fn config(&self) -> &InstitutionConfig {
        &self.config
    }

    /// Returns the institution metadata.
    pub fn institution(&self) -> &InstitutionMetadata {
        self.config.institution()
    }

    /// Returns the institutional UTC offset.
    pub fn offset(&self) -> FixedOffset {
        self.config.offset()
    }

    /// A wall clock in the institutional offset.
    pub fn system_clock(&self) -> SystemClock {
        SystemClock::new(self.config.offset())
    }
}

impl BatchRegistry for ConfigLoader {
    fn batch(&self, batch: &str) -> Option<BatchRecord> {
        self.config.batches().batch(batch)
    }

    fn semester_override(&self, batch: &str, semester: u32) -> Option<LocalDate> {
        self.config.batches().semester_override(batch, semester)
    }
}

impl ExceptionDayRegistry for ConfigLoader {
    fn exception_days(&self) -> ExceptionDaySet {
        self.config.exception_days().clone()
    }
}
