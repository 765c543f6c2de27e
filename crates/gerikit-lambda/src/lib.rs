//! gerikit-lambda
//!
//! HTTP surface over the scoring, criteria and note-analysis crates,
//! deployed as an AWS Lambda behind API Gateway.

pub mod analytics;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};

use state::AppState;

/// The full router with audit logging applied.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        // Instruments
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        )
        .route(
            "/instruments/{id}/score",
            post(routes::instruments::score_instrument),
        )
        // Scores
        .route("/scores/sum", post(routes::scores::sum))
        .route("/scores/morse", post(routes::scores::morse))
        .route("/scores/mmse", post(routes::scores::mmse))
        // Criteria
        .route("/criteria/beers", post(routes::criteria::beers))
        .route("/criteria/interactions", post(routes::criteria::interactions))
        .route("/criteria/stopp-start", post(routes::criteria::stopp_start))
        .route("/criteria/acb", post(routes::criteria::acb))
        // Notes
        .route("/notes/analyze", post(routes::notes::analyze))
        // Analytics
        .route("/analytics/events", post(routes::analytics::record_event))
        .route("/analytics/summary", get(routes::analytics::summary))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .with_state(state)
}
