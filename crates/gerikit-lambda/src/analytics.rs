//! Usage analytics aggregation. Events are counted in memory and dropped
//! with the process.

use std::collections::{BTreeMap, HashSet};
use std::sync::{PoisonError, RwLock};

use uuid::Uuid;

use gerikit_core::models::analytics::{AnalyticsEvent, AnalyticsSummary};

/// Distinct event names, and separately distinct categories, kept per store.
pub const MAX_TRACKED_KEYS: usize = 256;
/// Distinct sessions remembered for `distinct_sessions`.
pub const MAX_TRACKED_SESSIONS: usize = 10_000;
/// Bucket for names and categories seen after [`MAX_TRACKED_KEYS`] is reached.
pub const OVERFLOW_KEY: &str = "(other)";

/// Where accepted analytics events go.
///
/// Implementations must stay bounded in memory whatever clients send.
/// [`InMemoryAnalytics`] caps distinct names and categories at
/// [`MAX_TRACKED_KEYS`] each, folding later ones into [`OVERFLOW_KEY`].
/// It remembers at most [`MAX_TRACKED_SESSIONS`] session ids, so past that
/// point `distinct_sessions` stops growing. Labels are already limited to
/// `MAX_LABEL_LEN` characters when events are validated.
pub trait AnalyticsStore: Send + Sync {
    /// Returns whether the event was kept.
    fn record(&self, event: AnalyticsEvent) -> bool;

    fn summary(&self) -> AnalyticsSummary;
}

#[derive(Debug, Default)]
struct Aggregate {
    summary: AnalyticsSummary,
    sessions: HashSet<Uuid>,
}

#[derive(Debug)]
pub struct InMemoryAnalytics {
    inner: RwLock<Aggregate>,
    max_keys: usize,
    max_sessions: usize,
}

impl Default for InMemoryAnalytics {
    fn default() -> Self {
        Self::with_limits(MAX_TRACKED_KEYS, MAX_TRACKED_SESSIONS)
    }
}

impl InMemoryAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(max_keys: usize, max_sessions: usize) -> Self {
        Self {
            inner: RwLock::default(),
            max_keys,
            max_sessions,
        }
    }
}

fn bump(counts: &mut BTreeMap<String, u64>, key: String, max_keys: usize) {
    let key = if counts.contains_key(&key) || counts.len() < max_keys {
        key
    } else {
        OVERFLOW_KEY.to_string()
    };
    *counts.entry(key).or_default() += 1;
}

impl AnalyticsStore for InMemoryAnalytics {
    fn record(&self, event: AnalyticsEvent) -> bool {
        let mut agg = self.inner.write().unwrap_or_else(PoisonError::into_inner);

        if agg.sessions.len() < self.max_sessions {
            agg.sessions.insert(event.session_id);
        }
        let distinct = agg.sessions.len() as u64;

        let summary = &mut agg.summary;
        summary.total_events += 1;
        summary.distinct_sessions = distinct;
        bump(&mut summary.by_name, event.name, self.max_keys);
        if let Some(category) = event.category {
            bump(&mut summary.by_category, category, self.max_keys);
        }
        if summary
            .first_event_at
            .is_none_or(|first| event.recorded_at < first)
        {
            summary.first_event_at = Some(event.recorded_at);
        }
        if summary
            .last_event_at
            .is_none_or(|last| event.recorded_at > last)
        {
            summary.last_event_at = Some(event.recorded_at);
        }
        true
    }

    fn summary(&self) -> AnalyticsSummary {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .summary
            .clone()
    }
}

/// Accepts and discards everything. Used when analytics are switched off.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledAnalytics;

impl AnalyticsStore for DisabledAnalytics {
    fn record(&self, _event: AnalyticsEvent) -> bool {
        false
    }

    fn summary(&self) -> AnalyticsSummary {
        AnalyticsSummary::default()
    }
}
