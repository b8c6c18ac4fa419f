//! HTTP request handlers for the leave ledger API.
//!
//! This module contains the handler functions for all API endpoints. Each
//! handler converts the request into domain types, calls into the core, and
//! translates [`LedgerError`]s into JSON error responses.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{AcademicCalendar, count_working_days, summarize_leave};
use crate::error::LedgerError;
use crate::models::{DateInterval, ExceptionDaySet, LeaveSpan, LocalDate};
use crate::registry::ExceptionDayRegistry;

use super::request::{LeaveSummaryRequest, PeriodStartRequest, WorkingDaysRequest};
use super::response::{ApiError, ApiErrorResponse, WorkingDaysResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/working-days", post(working_days_handler))
        .route("/period-start", post(period_start_handler))
        .route("/leave-summary", post(leave_summary_handler))
        .with_state(state)
}

/// Handler for POST /working-days.
///
/// Counts working days in the requested interval against the configured
/// exception days plus any supplied with the request.
async fn working_days_handler(
    State(state): State<AppState>,
    payload: Result<Json<WorkingDaysRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing working-days request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, &correlation_id),
    };

    let mut exceptions = state.config().exception_days();
    let extra: ExceptionDaySet = request.exception_days.into_iter().collect();
    exceptions.layer(&extra);

    let interval = DateInterval::new(request.start, request.end);
    let working_days = count_working_days(&interval, &exceptions);

    info!(
        correlation_id = %correlation_id,
        start = %interval.start,
        end = %interval.end,
        working_days,
        "Working days counted"
    );

    json_response(WorkingDaysResponse {
        start: interval.start,
        end: interval.end,
        working_days,
        calendar_days: interval.calendar_days(),
    })
}

/// Handler for POST /period-start.
async fn period_start_handler(
    State(state): State<AppState>,
    payload: Result<Json<PeriodStartRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing period-start request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, &correlation_id),
    };

    let calendar = AcademicCalendar::new(state.config(), state.clock());
    match calendar.period(&request.batch, request.semester) {
        Ok(period) => {
            info!(
                correlation_id = %correlation_id,
                batch = %period.batch,
                semester = period.semester,
                start_date = %period.start_date,
                source = ?period.source,
                "Period start resolved"
            );
            json_response(period)
        }
        Err(err) => error_response(err, &correlation_id),
    }
}

/// Handler for POST /leave-summary.
///
/// Resolves the student's academic period and the ledger for the same
/// `as_of` date, so both halves of the summary agree on "today".
async fn leave_summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<LeaveSummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing leave-summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, &correlation_id),
    };

    let as_of = request
        .as_of
        .unwrap_or_else(|| LocalDate::today(state.clock()));

    let calendar = AcademicCalendar::new(state.config(), state.clock());
    let period = match calendar.period_as_of(&request.batch, request.semester, as_of) {
        Ok(period) => period,
        Err(err) => return error_response(err, &correlation_id),
    };

    let student_id = request.student_id;
    let spans: Vec<LeaveSpan> = request
        .spans
        .into_iter()
        .map(|span| span.into_span(&student_id))
        .collect();
    let exceptions = state.config().exception_days();

    let start_time = Instant::now();
    let summary = summarize_leave(&period, &student_id, &spans, as_of, &exceptions);

    info!(
        correlation_id = %correlation_id,
        student_id = %student_id,
        as_of = %as_of,
        spans_count = spans.len(),
        days_consumed = %summary.ledger.days_consumed,
        duration_us = start_time.elapsed().as_micros(),
        "Leave summary completed"
    );

    json_response(summary)
}

fn json_response<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(err: LedgerError, correlation_id: &Uuid) -> Response {
    warn!(correlation_id = %correlation_id, error = %err, "Request rejected");
    let api_error: ApiErrorResponse = err.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

fn rejection_response(rejection: JsonRejection, correlation_id: &Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
