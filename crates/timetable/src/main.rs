use std::env;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use timetable::schedule::{WeekScheduleClient, WeekScheduleConfig};
use timetable::server;
use timetable::types::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = WeekScheduleConfig::default();
    if let Ok(url) = env::var("TIMETABLE_API_URL") {
        config.base_url = url;
    }
    config.bearer_token = env::var("TIMETABLE_API_TOKEN").ok();

    let bind_addr = env::var("TIMETABLE_BIND").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    let client = WeekScheduleClient::with_config(config).context("building schedule client")?;
    let state = Arc::new(AppState::new(Box::new(client)));
    let router = server::create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    info!("timetable service listening on {bind_addr}");

    axum::serve(listener, router)
        .await
        .context("serving timetable API")?;

    Ok(())
}
