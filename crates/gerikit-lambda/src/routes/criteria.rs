use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use gerikit_core::models::interaction::Interaction;
use gerikit_criteria::acb::{AcbResult, anticholinergic_burden};
use gerikit_criteria::beers::{BeersFinding, beers_findings, check_beers_list};
use gerikit_criteria::interactions::check_interactions;
use gerikit_criteria::stopp::{StartFinding, StoppFinding, check_start, check_stopp};

use crate::state::AppState;

#[derive(Deserialize)]
pub struct MedicationsRequest {
    pub medications: Vec<String>,
}

#[derive(Deserialize)]
pub struct StoppStartRequest {
    pub medications: Vec<String>,
    #[serde(default)]
    pub conditions: Vec<String>,
}

#[derive(Serialize)]
pub struct BeersResponse {
    /// Caller spellings, input order.
    pub matched: Vec<String>,
    pub findings: Vec<BeersFinding>,
}

#[derive(Serialize)]
pub struct InteractionsResponse {
    pub interactions: Vec<Interaction>,
}

#[derive(Serialize)]
pub struct StoppStartResponse {
    pub stopp: Vec<StoppFinding>,
    pub start: Vec<StartFinding>,
}

pub async fn beers(
    State(state): State<AppState>,
    Json(req): Json<MedicationsRequest>,
) -> Json<BeersResponse> {
    Json(BeersResponse {
        matched: check_beers_list(&state.tables, &req.medications),
        findings: beers_findings(&state.tables, &req.medications),
    })
}

pub async fn interactions(
    State(state): State<AppState>,
    Json(req): Json<MedicationsRequest>,
) -> Json<InteractionsResponse> {
    Json(InteractionsResponse {
        interactions: check_interactions(&state.tables, &req.medications),
    })
}

pub async fn stopp_start(
    State(state): State<AppState>,
    Json(req): Json<StoppStartRequest>,
) -> Json<StoppStartResponse> {
    Json(StoppStartResponse {
        stopp: check_stopp(&state.tables, &req.medications, &req.conditions),
        start: check_start(&state.tables, &req.medications, &req.conditions),
    })
}

pub async fn acb(
    State(state): State<AppState>,
    Json(req): Json<MedicationsRequest>,
) -> Json<AcbResult> {
    Json(anticholinergic_burden(&state.tables, &req.medications))
}
