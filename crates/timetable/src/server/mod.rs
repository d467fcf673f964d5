use std::sync::Arc;

use axum::routing::get;
use axum::{middleware as mw, Router};

use crate::server::endpoints::{status, week};
use crate::server::middleware::date_validator;
use crate::types::AppState;

mod endpoints;
mod middleware;
mod types;

/// Creates a router that can be used by `axum`.
///
/// # Parameters
/// - `app_state`: The app server state.
///
/// # Returns
/// The router.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    // Routes carrying a :date path parameter get the shape check up front;
    // malformed dates never reach the handlers.
    let week_router = Router::new()
        .route("/schedule/week/:date", get(week::get_week))
        .route("/schedule/week/:date/window", get(week::get_week_window))
        .layer(mw::from_fn(date_validator::check_date));

    Router::new()
        .route("/health", get(status::get_health))
        .merge(week_router)
        .with_state(app_state)
}
