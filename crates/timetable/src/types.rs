/// Shared application state
use crate::schedule::ScheduleSource;

/// State shared by every endpoint handler.
pub struct AppState {
    /// The schedule source collaborator. Boxed so tests can substitute a
    /// stub for the real HTTP client.
    pub source: Box<dyn ScheduleSource>,
}

impl AppState {
    pub fn new(source: Box<dyn ScheduleSource>) -> Self {
        Self { source }
    }
}
