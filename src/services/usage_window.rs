//! Sliding-window accounting for AI assistant usage.
//!
//! Usage history is a JSON event list on the viewer's profile; the data
//! layer hands it over as-is. Counting is over a rolling window ending now,
//! so no reset job or persisted counter is involved.

use crate::config::UsageConfig;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single recorded assistant invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageEvent {
    pub at: DateTime<Utc>,
}

/// Tolerant decode of the stored event list. Anything that is not an array
/// is an empty history; entries without a valid `at` timestamp are skipped.
pub fn parse_events(raw: &Value) -> Vec<UsageEvent> {
    match raw.as_array() {
        Some(entries) => entries
            .iter()
            .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
            .collect(),
        None => Vec::new(),
    }
}

/// Events strictly after the cutoff.
pub fn count_in_window(events: &[UsageEvent], cutoff: DateTime<Utc>) -> usize {
    events.iter().filter(|e| e.at > cutoff).count()
}

/// Rolling usage budget shared by every chat mode.
#[derive(Debug, Clone, Copy)]
pub struct UsageWindow {
    pub limit: usize,
    pub window: Duration,
}

impl Default for UsageWindow {
    fn default() -> Self {
        Self {
            limit: 30,
            window: Duration::hours(24),
        }
    }
}

impl UsageWindow {
    /// An out-of-range configured window falls back to the default length
    /// rather than panicking inside chrono.
    pub fn from_config(config: &UsageConfig) -> Self {
        Self {
            limit: config.chat_usage_limit,
            window: Duration::try_hours(config.chat_usage_window_hours)
                .unwrap_or_else(|| Self::default().window),
        }
    }

    pub fn cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - self.window
    }

    pub fn used(&self, events: &[UsageEvent], now: DateTime<Utc>) -> usize {
        count_in_window(events, self.cutoff(now))
    }

    pub fn remaining(&self, events: &[UsageEvent], now: DateTime<Utc>) -> usize {
        self.limit.saturating_sub(self.used(events, now))
    }

    pub fn is_exhausted(&self, events: &[UsageEvent], now: DateTime<Utc>) -> bool {
        self.used(events, now) >= self.limit
    }

    /// When the oldest in-window event ages out, i.e. the next moment the
    /// budget grows back. `None` while the window is empty.
    pub fn reset_at(&self, events: &[UsageEvent], now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let cutoff = self.cutoff(now);
        events
            .iter()
            .filter(|e| e.at > cutoff)
            .map(|e| e.at)
            .min()
            .map(|oldest| oldest + self.window)
    }
}
