use axum::Json;
use axum::extract::State;
use serde::Serialize;

use gerikit_core::models::analytics::{AnalyticsEvent, AnalyticsEventInput, AnalyticsSummary};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct Recorded {
    pub recorded: bool,
}

pub async fn record_event(
    State(state): State<AppState>,
    Json(input): Json<AnalyticsEventInput>,
) -> Result<Json<Recorded>, ApiError> {
    let event = AnalyticsEvent::from_input(input, jiff::Timestamp::now())?;
    let recorded = state.analytics.record(event);
    Ok(Json(Recorded { recorded }))
}

pub async fn summary(State(state): State<AppState>) -> Json<AnalyticsSummary> {
    Json(state.analytics.summary())
}
