//! Request types for the leave ledger API.
//!
//! This module defines the JSON request structures for the API endpoints.
//! Spans may omit `duration_type` and `student_id`; conversion into
//! [`LeaveSpan`] fills both in.

use serde::{Deserialize, Serialize};

use crate::models::{DurationType, ExceptionDay, LeaveSpan, LocalDate, RequestKind, SpanStatus};

/// Request body for the `/working-days` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingDaysRequest {
    /// First day of the interval (inclusive).
    pub start: LocalDate,
    /// Last day of the interval (inclusive).
    pub end: LocalDate,
    /// Extra exception days, layered over the configured ones.
    #[serde(default)]
    pub exception_days: Vec<ExceptionDay>,
}

/// Request body for the `/period-start` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodStartRequest {
    /// The batch identifier (4-digit start year).
    pub batch: String,
    /// The semester number (1-based).
    pub semester: u32,
}

/// Request body for the `/leave-summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveSummaryRequest {
    /// The student to summarise.
    pub student_id: String,
    /// The student's batch.
    pub batch: String,
    /// The student's current semester.
    pub semester: u32,
    /// The date to compute for; defaults to today in institutional time.
    #[serde(default)]
    pub as_of: Option<LocalDate>,
    /// The student's leave and OD requests.
    #[serde(default)]
    pub spans: Vec<SpanRequest>,
}

/// One leave or OD request as submitted to the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpanRequest {
    /// Identifier of the request.
    pub id: String,
    /// Owner of the request; defaults to the summary's student.
    #[serde(default)]
    pub student_id: Option<String>,
    /// First day of absence.
    pub start: LocalDate,
    /// Last day of absence.
    pub end: LocalDate,
    /// Approval status.
    pub status: SpanStatus,
    /// Full or half day; absent means a full day.
    #[serde(default)]
    pub duration_type: Option<DurationType>,
    /// Leave or OD.
    pub kind: RequestKind,
}

impl SpanRequest {
    /// Converts into a [`LeaveSpan`], filling in defaults.
    pub fn into_span(self, default_student_id: &str) -> LeaveSpan {
        LeaveSpan {
            id: self.id,
            student_id: self
                .student_id
                .unwrap_or_else(|| default_student_id.to_string()),
            start: self.start,
            end: self.end,
            status: self.status,
            duration_type: self.duration_type.unwrap_or_default(),
            kind: self.kind,
        }
    }
}
