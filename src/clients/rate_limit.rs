//! Rate limit information from AfterShip response headers.
//!
//! Every response carries three headers describing the current window:
//!
//! - `X-RateLimit-Reset`: unix timestamp when the window resets
//! - `X-RateLimit-Limit`: request ceiling for the window
//! - `X-RateLimit-Remaining`: requests left in the window

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rate limit window parsed from the `X-RateLimit-*` headers.
///
/// # Example
///
/// ```rust
/// use aftership::clients::RateLimit;
///
/// let limit = RateLimit { reset: 1_700_000_010, limit: 10, remaining: 0 };
/// assert!(limit.is_reached_at(1_700_000_000));
/// assert!(!limit.is_reached_at(1_700_000_011));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimit {
    /// Unix timestamp at which the window resets.
    pub reset: i64,
    /// Request ceiling of the window.
    pub limit: u32,
    /// Requests left in the window.
    pub remaining: u32,
}

impl RateLimit {
    pub(crate) const RESET_HEADER: &'static str = "x-ratelimit-reset";
    pub(crate) const LIMIT_HEADER: &'static str = "x-ratelimit-limit";
    pub(crate) const REMAINING_HEADER: &'static str = "x-ratelimit-remaining";

    /// Parses the rate limit from lowercase response headers.
    ///
    /// Returns `None` unless all three headers are present and numeric.
    #[must_use]
    pub fn from_headers(headers: &HashMap<String, Vec<String>>) -> Option<Self> {
        fn first<T: std::str::FromStr>(
            headers: &HashMap<String, Vec<String>>,
            name: &str,
        ) -> Option<T> {
            headers
                .get(name)
                .and_then(|values| values.first())
                .and_then(|value| value.trim().parse().ok())
        }

        Some(Self {
            reset: first(headers, Self::RESET_HEADER)?,
            limit: first(headers, Self::LIMIT_HEADER)?,
            remaining: first(headers, Self::REMAINING_HEADER)?,
        })
    }

    /// Returns `true` if no requests remain and the window has not reset
    /// as of `now` (unix seconds).
    #[must_use]
    pub const fn is_reached_at(&self, now: i64) -> bool {
        self.remaining == 0 && self.reset >= now
    }

    /// Returns `true` if no requests remain in the current window.
    #[must_use]
    pub fn is_reached(&self) -> bool {
        self.is_reached_at(Utc::now().timestamp())
    }

    /// Time to wait from `now` until the window resets, at least one second.
    #[must_use]
    pub fn retry_after_at(&self, now: i64) -> Duration {
        let secs = self.reset.saturating_sub(now).max(1);
        Duration::from_secs(secs.unsigned_abs())
    }

    /// Time to wait until the window resets, at least one second.
    #[must_use]
    pub fn retry_after(&self) -> Duration {
        self.retry_after_at(Utc::now().timestamp())
    }

    /// The reset time as a UTC timestamp.
    #[must_use]
    pub fn reset_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.reset, 0)
    }
}
