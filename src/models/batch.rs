//! Batch records and academic periods.

use serde::{Deserialize, Serialize};

use super::LocalDate;

/// Canonical record for a cohort.
///
/// # Example
///
/// ```
/// use leave_ledger::models::BatchRecord;
///
/// let record = BatchRecord {
///     batch: "2022".to_string(),
///     start_year: 2022,
///     end_year: 2026,
///     active: true,
/// };
/// assert_eq!(record.semester_count(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRecord {
    /// The batch identifier (normally the start year, e.g. "2022").
    pub batch: String,
    /// Calendar year the programme starts.
    pub start_year: i32,
    /// Calendar year the programme ends.
    pub end_year: i32,
    /// Whether the batch is still enrolled.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl BatchRecord {
    /// Number of semesters in the programme (two per academic year).
    pub fn semester_count(&self) -> u32 {
        let years = self.end_year.saturating_sub(self.start_year).max(0);
        (years as u32).saturating_mul(2)
    }
}

/// An administratively fixed start date for one (batch, semester).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemesterOverride {
    /// The batch the override applies to.
    pub batch: String,
    /// The semester number the override applies to.
    pub semester: u32,
    /// The declared start date.
    pub start_date: LocalDate,
}

/// How an [`AcademicPeriod`]'s start date was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodSource {
    /// Taken verbatim from a semester override.
    Override,
    /// Derived from the June/January calendar rule.
    Derived,
    /// Derived date lay in the future and was replaced by today.
    ClampedToToday,
}

/// The start of one semester of one batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicPeriod {
    /// The batch identifier.
    pub batch: String,
    /// The semester number (1-based).
    pub semester: u32,
    /// First day chargeable to this period.
    pub start_date: LocalDate,
    /// Where `start_date` came from.
    pub source: PeriodSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semester_count_for_four_year_programme() {
        let record = BatchRecord {
            batch: "2023".to_string(),
            start_year: 2023,
            end_year: 2027,
            active: true,
        };
        assert_eq!(record.semester_count(), 8);
    }

    #[test]
    fn test_semester_count_never_negative() {
        let record = BatchRecord {
            batch: "2023".to_string(),
            start_year: 2023,
            end_year: 2021,
            active: false,
        };
        assert_eq!(record.semester_count(), 0);
    }

    #[test]
    fn test_deserialize_batch_defaults_active() {
        let record: BatchRecord =
            serde_json::from_str(r#"{"batch":"2024","start_year":2024,"end_year":2028}"#).unwrap();
        assert!(record.active);
    }

    #[test]
    fn test_serialize_period_source() {
        assert_eq!(
            serde_json::to_string(&PeriodSource::ClampedToToday).unwrap(),
            "\"clamped_to_today\""
        );
    }
}
