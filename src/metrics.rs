use std::time::{Duration, Instant};
use tracing::debug;

/// A timer that logs the duration of a store operation when dropped.
///
/// # Example
///
/// ```ignore
/// pub async fn query_page(&self, page: &PageRequest) -> Vec<ItemRow> {
///     let _timer = OperationTimer::new("query_page");
///     // ... implementation ...
/// }
/// ```
pub struct OperationTimer {
    name: &'static str,
    start: Instant,
}

impl OperationTimer {
    /// Create a new timer for the given operation name.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }

    /// Time elapsed since the timer was created.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for OperationTimer {
    fn drop(&mut self) {
        debug!(
            operation = %self.name,
            duration_ms = %self.start.elapsed().as_millis(),
            "Operation completed"
        );
    }
}

/// Generate a short request ID for correlating reorder logs.
#[must_use]
pub fn generate_request_id() -> String {
    let uuid_str = uuid::Uuid::new_v4().simple().to_string();
    uuid_str.get(..8).unwrap_or(&uuid_str).to_string()
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod metrics_tests;
