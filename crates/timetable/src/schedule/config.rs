/// Configuration for the schedule API client
use std::time::Duration;

/// Default base URL for the institution's schedule API.
const SCHEDULE_API_BASE_URL: &str = "https://portal.example.edu/api";

/// Configuration for [`WeekScheduleClient`](super::client::WeekScheduleClient).
#[derive(Debug, Clone)]
pub struct WeekScheduleConfig {
    /// Base URL of the schedule API
    pub base_url: String,
    /// Bearer token injected by the host application; the client never
    /// reads credentials from ambient storage
    pub bearer_token: Option<String>,
    /// User agent string
    pub user_agent: String,
    /// TCP connect timeout
    pub connect_timeout: Duration,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Maximum fetch attempts per week (first try included)
    pub max_attempts: u32,
    /// Base delay between retries (grows with exponential backoff)
    pub retry_base_delay: Duration,
}

impl Default for WeekScheduleConfig {
    fn default() -> Self {
        Self {
            base_url: SCHEDULE_API_BASE_URL.to_string(),
            bearer_token: None,
            user_agent: format!("timetable/{}", env!("CARGO_PKG_VERSION")),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_attempts: 3,
            retry_base_delay: Duration::from_millis(500),
        }
    }
}
