//! HTTP API module for the leave ledger.
//!
//! This module exposes the working-day counter, the academic calendar and
//! the leave summary as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{LeaveSummaryRequest, PeriodStartRequest, SpanRequest, WorkingDaysRequest};
pub use response::{ApiError, ApiErrorResponse, WorkingDaysResponse};
pub use state::AppState;
