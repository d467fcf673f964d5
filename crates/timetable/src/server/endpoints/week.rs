//! API endpoints for weekly schedule views.
//!
//! The `:date` parameter is any calendar date, not necessarily a Monday:
//! the date picker, "previous/next week" and "jump to today" all reduce to
//! a date plus an optional whole-week shift.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::schedule::{bucket, monday_of, shift_week, ScheduleError, ScheduleSource, WeekWindow};
use crate::server::types::ApiErrorType;
use crate::types::AppState;

/// Query parameters for weekly schedule endpoints.
#[derive(Debug, Deserialize)]
pub struct WeekQueryParams {
    /// Whole weeks to shift the resolved window by (-1 previous, +1 next)
    #[serde(default)]
    pub shift: i64,
}

/// Converts ScheduleError to API response.
fn schedule_error_to_response(error: ScheduleError) -> Response {
    let (status, code) = match &error {
        ScheduleError::MalformedDate { .. } => (StatusCode::BAD_REQUEST, "malformed_date"),
        ScheduleError::SessionExpired { .. } => (StatusCode::UNAUTHORIZED, "session_expired"),
        ScheduleError::Network { .. } => (StatusCode::BAD_GATEWAY, "upstream_unreachable"),
        ScheduleError::UnexpectedStatus { .. } => (StatusCode::BAD_GATEWAY, "upstream_error"),
        ScheduleError::Decode { .. } => (StatusCode::BAD_GATEWAY, "upstream_invalid"),
        ScheduleError::RetriesExhausted { .. } => (StatusCode::GATEWAY_TIMEOUT, "upstream_timeout"),
    };

    ApiErrorType::from((status, code, Some(error.to_string()))).into_response()
}

/// Resolves the requested window from the raw date parameter and shift.
fn resolve_window(date: &str, shift: i64) -> Result<WeekWindow, ScheduleError> {
    let picked = crate::schedule::parse_date(date)?;
    let monday = shift_week(monday_of(picked), shift);
    Ok(WeekWindow::from_monday(monday))
}

/// GET /schedule/week/:date
/// Fetches the week containing :date (shifted by ?shift whole weeks) and
/// returns the window dates plus the bucketed matrix.
pub async fn get_week(
    Path(date): Path<String>,
    Query(params): Query<WeekQueryParams>,
    State(s): State<Arc<AppState>>,
) -> Response {
    info!("GET /schedule/week/{} shift={}", date, params.shift);

    let window = match resolve_window(&date, params.shift) {
        Ok(window) => window,
        Err(e) => return schedule_error_to_response(e),
    };

    match s.source.fetch_week(window.monday()).await {
        Ok(entries) => {
            // An empty week is a valid, displayable state.
            let matrix = bucket(entries, &window);
            let body = json!({
                "weekStart": crate::schedule::format_date(window.monday()),
                "dates": window.date_strings(),
                "matrix": matrix,
            });
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => schedule_error_to_response(e),
    }
}

/// GET /schedule/week/:date/window
/// Window computation only, no fetch: the Monday and the seven dates the
/// week containing :date spans.
pub async fn get_week_window(
    Path(date): Path<String>,
    Query(params): Query<WeekQueryParams>,
) -> Response {
    info!("GET /schedule/week/{}/window shift={}", date, params.shift);

    match resolve_window(&date, params.shift) {
        Ok(window) => {
            let body = json!({
                "weekStart": crate::schedule::format_date(window.monday()),
                "dates": window.date_strings(),
            });
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => schedule_error_to_response(e),
    }
}
