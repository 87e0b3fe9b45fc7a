//! Statement time window.

use chrono::{DateTime, Duration, Utc};

/// Length of the trailing window: one average Gregorian month.
pub const STATEMENT_WINDOW_MS: i64 = 2_629_800_000;

/// Half-open time range `[from, to]` requested from the statement
/// endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementWindow {
    /// Start of the range.
    pub from: DateTime<Utc>,
    /// End of the range.
    pub to: DateTime<Utc>,
}

impl StatementWindow {
    /// Returns the window covering the month that ends at `now`.
    #[inline]
    #[must_use]
    pub fn trailing_month(now: DateTime<Utc>) -> Self {
        Self {
            from: now - Duration::milliseconds(STATEMENT_WINDOW_MS),
            to: now,
        }
    }

    /// Renders the window as the `{from}/{to}` path suffix in epoch
    /// milliseconds.
    #[inline]
    #[must_use]
    pub fn path_segment(&self) -> String {
        format!(
            "{}/{}",
            self.from.timestamp_millis(),
            self.to.timestamp_millis()
        )
    }
}
