//! HTTP client for the schedule source collaborator.
//!
//! One logical operation: fetch the entries for a week, keyed by the
//! Monday date string. Each week is fetched fresh; nothing is cached here,
//! and stale-response discarding belongs to callers (spec lifecycle:
//! navigating weeks always triggers a new fetch).

use chrono::NaiveDate;
use futures::future::BoxFuture;
use rand::Rng;
use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};
use tracing::{error, info, warn};
use url::Url;

use super::config::WeekScheduleConfig;
use super::error::ScheduleError;
use super::types::ScheduleEntry;
use super::week::format_date;

/// The seam between the server and the remote schedule API.
///
/// Object-safe so handlers can be exercised against a stub source in
/// tests.
pub trait ScheduleSource: Send + Sync {
    /// Fetches every schedule entry for the week starting at `monday`.
    fn fetch_week(
        &self,
        monday: NaiveDate,
    ) -> BoxFuture<'_, Result<Vec<ScheduleEntry>, ScheduleError>>;
}

/// Client for fetching weekly schedule data from the institution's API.
pub struct WeekScheduleClient {
    client: Client,
    config: WeekScheduleConfig,
}

impl WeekScheduleClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, ScheduleError> {
        Self::with_config(WeekScheduleConfig::default())
    }

    /// Creates a new client with custom configuration.
    pub fn with_config(config: WeekScheduleConfig) -> Result<Self, ScheduleError> {
        // Fail at construction rather than on the first fetch.
        Url::parse(&config.base_url)?;

        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ScheduleError::Network {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self { client, config })
    }

    /// Fetches the week's entries, retrying transient failures.
    ///
    /// # Arguments
    /// * `monday` - the Monday keying the week (from `week::monday_of`)
    ///
    /// # Returns
    /// * `Ok(Vec<ScheduleEntry>)` - the week's entries; an empty list is a
    ///   valid result, not an error
    /// * `Err(ScheduleError)` - credential rejection, decode failure, or
    ///   exhausted retries
    pub async fn fetch_week(
        &self,
        monday: NaiveDate,
    ) -> Result<Vec<ScheduleEntry>, ScheduleError> {
        let correlation_id = generate_correlation_id();
        let week_start = format_date(monday);
        let start = Instant::now();

        info!(
            correlation_id = %correlation_id,
            week_start = %week_start,
            "Fetching weekly schedule"
        );

        let mut last_error = ScheduleError::Network {
            message: "no fetch attempted".to_string(),
        };

        for attempt in 1..=self.config.max_attempts {
            match self.fetch_week_once(&week_start).await {
                Ok(entries) => {
                    info!(
                        correlation_id = %correlation_id,
                        week_start = %week_start,
                        entries = entries.len(),
                        attempts = attempt,
                        duration_ms = start.elapsed().as_millis() as u64,
                        "Weekly schedule fetched"
                    );
                    return Ok(entries);
                }
                Err(e) if e.is_retryable() && attempt < self.config.max_attempts => {
                    let delay = self.retry_delay(attempt);
                    warn!(
                        correlation_id = %correlation_id,
                        attempt = attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Fetch failed, retrying"
                    );
                    last_error = e;
                    tokio::time::sleep(delay).await;
                }
                Err(e) => {
                    error!(
                        correlation_id = %correlation_id,
                        week_start = %week_start,
                        attempts = attempt,
                        duration_ms = start.elapsed().as_millis() as u64,
                        error = %e,
                        "Weekly schedule fetch failed"
                    );
                    return Err(e);
                }
            }
        }

        Err(ScheduleError::RetriesExhausted {
            attempts: self.config.max_attempts,
            last_error: last_error.to_string(),
        })
    }

    /// One fetch attempt, no retries.
    async fn fetch_week_once(
        &self,
        week_start: &str,
    ) -> Result<Vec<ScheduleEntry>, ScheduleError> {
        let mut request = self.client.get(self.week_url(week_start));
        if let Some(token) = &self.config.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(ScheduleError::SessionExpired {
                    status: status.as_u16(),
                })
            }
            s if s.is_success() => {
                response
                    .json::<Vec<ScheduleEntry>>()
                    .await
                    .map_err(|e| ScheduleError::Decode {
                        message: e.to_string(),
                    })
            }
            s => Err(ScheduleError::UnexpectedStatus {
                status: s.as_u16(),
            }),
        }
    }

    /// URL of the weekly schedule endpoint, keyed by the Monday string.
    fn week_url(&self, week_start: &str) -> String {
        format!(
            "{}/schedule/weekly?week_start={}",
            self.config.base_url.trim_end_matches('/'),
            week_start
        )
    }

    /// Retry delay with exponential backoff and jitter.
    fn retry_delay(&self, attempt: u32) -> Duration {
        let base = self.config.retry_base_delay.as_millis() as u64;
        let exponential = base * 2u64.pow(attempt.saturating_sub(1).min(5));
        // Cap at 10 seconds
        let capped = exponential.min(10_000);
        // Add jitter: 0-20% of the delay
        let jitter = rand::thread_rng().gen_range(0..=(capped / 5));
        Duration::from_millis(capped + jitter)
    }
}

impl ScheduleSource for WeekScheduleClient {
    fn fetch_week(
        &self,
        monday: NaiveDate,
    ) -> BoxFuture<'_, Result<Vec<ScheduleEntry>, ScheduleError>> {
        Box::pin(WeekScheduleClient::fetch_week(self, monday))
    }
}

/// Generates a unique correlation ID for request tracing.
fn generate_correlation_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_micros();
    let random: u32 = rand::thread_rng().gen();
    format!("{:x}-{:08x}", timestamp & 0xFFFFFFFF, random)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_url_keyed_by_monday_string() {
        let config = WeekScheduleConfig {
            base_url: "https://portal.example.edu/api/".to_string(),
            ..WeekScheduleConfig::default()
        };
        let client = WeekScheduleClient::with_config(config).unwrap();
        assert_eq!(
            client.week_url("2024-06-03"),
            "https://portal.example.edu/api/schedule/weekly?week_start=2024-06-03"
        );
    }

    #[test]
    fn test_invalid_base_url_rejected_at_construction() {
        let config = WeekScheduleConfig {
            base_url: "not a url".to_string(),
            ..WeekScheduleConfig::default()
        };
        assert!(WeekScheduleClient::with_config(config).is_err());
    }

    #[test]
    fn test_retry_delay_backoff() {
        let client = WeekScheduleClient::new().unwrap();

        let d1 = client.retry_delay(1);
        let d2 = client.retry_delay(2);
        let d3 = client.retry_delay(3);

        // Each should be roughly double (with jitter)
        assert!(d2 > d1);
        assert!(d3 > d2);
    }
}
