use std::sync::Arc;

use gerikit_criteria::ReferenceTables;

use crate::analytics::{AnalyticsStore, DisabledAnalytics, InMemoryAnalytics};
use crate::config::ServiceConfig;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub tables: Arc<ReferenceTables>,
    pub analytics: Arc<dyn AnalyticsStore>,
    pub service_name: Arc<str>,
}

impl AppState {
    pub fn new(config: &ServiceConfig, tables: ReferenceTables) -> Self {
        let analytics: Arc<dyn AnalyticsStore> = if config.analytics_enabled {
            Arc::new(InMemoryAnalytics::new())
        } else {
            Arc::new(DisabledAnalytics)
        };
        Self {
            tables: Arc::new(tables),
            analytics,
            service_name: Arc::from(config.service_name.as_str()),
        }
    }

    /// Bundled tables, in-memory analytics, default name.
    pub fn bundled() -> Self {
        Self::new(&ServiceConfig::default(), ReferenceTables::bundled().clone())
    }
}
