use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct Health {
    status: &'static str,
    service: String,
    version: &'static str,
}

pub async fn health_check(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "ok",
        service: state.service_name.to_string(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
