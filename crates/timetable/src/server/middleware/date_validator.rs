//! Rejects malformed `:date` path parameters before any handler runs.
//!
//! Malformed dates from the picker must never reach `monday_of`; the
//! caller gets a 400 with a structured body and keeps its previously valid
//! week displayed.

use axum::extract::{Path, Request};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::debug;

use crate::schedule::week::parse_date;
use crate::server::types::ApiErrorType;

#[derive(Debug, Deserialize)]
pub struct DatePath {
    date: String,
}

pub async fn check_date(
    Path(params): Path<DatePath>,
    request: Request,
    next: Next,
) -> Response {
    if let Err(e) = parse_date(&params.date) {
        debug!(date = %params.date, "rejecting malformed date parameter");
        return ApiErrorType::from((
            StatusCode::BAD_REQUEST,
            "malformed_date",
            Some(e.to_string()),
        ))
        .into_response();
    }

    next.run(request).await
}
